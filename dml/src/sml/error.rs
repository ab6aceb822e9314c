use thiserror::Error;

use crate::hash_types::BlockHash;
use crate::network::Network;
use crate::prelude::CoreBlockHeight;
use crate::sml::quorum_validation_error::QuorumValidationError;

/// Failures while building or reconstructing a simplified masternode list.
///
/// All of these are deterministic validation failures: none is retryable and
/// none leaves the store or a previously built list in a changed state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SmlError {
    /// A diff was applied to a list it does not extend.
    #[error("base block hash mismatch: expected {expected}, found {found}")]
    BaseBlockHashMismatch {
        /// The block hash of the list being extended.
        expected: BlockHash,
        /// The base block hash the diff declared.
        found: BlockHash,
    },

    /// A store was created from a diff that is not rooted at the null hash or
    /// the network's genesis block.
    #[error("base block hash {0} is neither the null hash nor the {1} genesis hash")]
    BaseBlockNotGenesis(BlockHash, Network),

    /// The store has not accepted a base diff yet.
    #[error("no base masternode list diff has been provided")]
    StoreNotInitialized,

    /// The requested or supplied height is below the store's base list.
    #[error("height {height} is below the store base height {base_height}")]
    HeightBeforeBase {
        /// The offending height.
        height: CoreBlockHeight,
        /// The height of the base list, the floor of every reconstruction.
        base_height: CoreBlockHeight,
    },

    /// An ordered diff sequence stopped composing mid-chain.
    #[error("diff chain broken applying the diff ending at height {height}: {source}")]
    DiffChainBroken {
        /// Target height of the diff that failed to apply.
        height: CoreBlockHeight,
        /// The underlying failure.
        #[source]
        source: Box<SmlError>,
    },

    /// A quorum entry carried by a diff failed shape validation.
    #[error("invalid quorum entry in diff: {0}")]
    InvalidQuorumEntry(#[from] QuorumValidationError),
}
