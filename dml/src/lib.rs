// Rust Dash Library
// Written for Dash in 2022 by
//     The Dash Core Developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Rust Dash Deterministic Masternode List Library
//!
//! Reconstruction and verification of the deterministic masternode list
//! (DIP3/DIP4) and the LLMQ quorum commitments (DIP6) derived from it.
//!
//! The library decodes `mnlistdiff` records, folds them in height order onto
//! a base list to materialize the masternode list at any height, and handles
//! quorum commitments end to end: their canonical byte layout, the
//! commitment and entry hashes, per-request quorum ordering and the
//! deterministic selection of quorum members. BLS keys and signatures are
//! carried as opaque blobs; evaluating them is a concern of the surrounding
//! application, as are networking and persistence.

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]

pub extern crate hashes;

#[cfg(feature = "serde")]
#[macro_use]
extern crate actual_serde as serde;

pub use std::io;

pub mod bls_sig_utils;
pub mod consensus;
pub mod hash_types;
pub(crate) mod internal_macros;
pub mod network;
pub mod sml;
pub mod test_utils;
pub mod transaction;

pub use crate::hash_types::{
    BlockHash, ConfirmedHash, ConfirmedHashHashedWithProRegTx, MerkleRootMasternodeList,
    MerkleRootQuorums, ProTxHash, QuorumCommitmentHash, QuorumEntryHash, QuorumHash,
    QuorumModifierHash, QuorumOrderingHash, QuorumVVecHash, ScoreHash,
};
pub use crate::network::Network;

pub mod prelude {
    //! The types most users of the library need, re-exported in one place.

    pub use crate::bls_sig_utils::{BLSPublicKey, BLSSignature};
    pub use crate::hash_types::{BlockHash, ProTxHash, QuorumHash};
    pub use crate::network::message_sml::{DeletedQuorum, MnListDiff};
    pub use crate::network::Network;
    pub use crate::sml::error::SmlError;
    pub use crate::sml::llmq_type::{LLMQParams, LLMQType};
    pub use crate::sml::masternode_list::MasternodeList;
    pub use crate::sml::masternode_list_entry::qualified_masternode_list_entry::QualifiedMasternodeListEntry;
    pub use crate::sml::masternode_list_entry::MasternodeListEntry;
    pub use crate::sml::masternode_list_store::MasternodeListStore;
    pub use crate::sml::quorum_entry::qualified_quorum_entry::QualifiedQuorumEntry;
    pub use crate::sml::quorum_validation_error::QuorumValidationError;
    pub use crate::transaction::special_transaction::coinbase::CoinbasePayload;
    pub use crate::transaction::special_transaction::quorum_commitment::{
        QuorumCommitmentPayload, QuorumEntry,
    };

    /// A block height on the Dash core chain.
    pub type CoreBlockHeight = u32;
}
