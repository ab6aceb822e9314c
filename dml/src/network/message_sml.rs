//! Simplified masternode list messages.
//!
//! The `mnlistdiff` record provides either a full masternode list (when its
//! `base_block_hash` is all-zero) or an update to a previously known list.
//!
//! https://docs.dash.org/en/stable/docs/core/reference/p2p-network-data-messages.html#mnlistdiff

use crate::hash_types::{BlockHash, ProTxHash, QuorumHash};
use crate::internal_macros::impl_consensus_encoding;
use crate::prelude::CoreBlockHeight;
use crate::sml::llmq_type::LLMQType;
use crate::sml::masternode_list_entry::MasternodeListEntry;
use crate::transaction::special_transaction::coinbase::CoinbasePayload;
use crate::transaction::special_transaction::quorum_commitment::QuorumEntry;

/// A decoded masternode list diff: the ordered delta between the lists at
/// `base_block_hash` and `block_hash`.
///
/// The target height travels inside the embedded coinbase payload; consumers
/// read it through [`MnListDiff::height`] and stay agnostic of how the
/// payload itself was obtained.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MnListDiff {
    pub version: u16,
    pub base_block_hash: BlockHash,
    pub block_hash: BlockHash,
    pub coinbase_payload: CoinbasePayload,
    pub deleted_masternodes: Vec<ProTxHash>,
    pub new_masternodes: Vec<MasternodeListEntry>,
    pub deleted_quorums: Vec<DeletedQuorum>,
    pub new_quorums: Vec<QuorumEntry>,
}

impl_consensus_encoding!(
    MnListDiff,
    version,
    base_block_hash,
    block_hash,
    coinbase_payload,
    deleted_masternodes,
    new_masternodes,
    deleted_quorums,
    new_quorums
);

impl MnListDiff {
    /// The height this diff ends at, as declared by its coinbase payload.
    pub fn height(&self) -> CoreBlockHeight {
        self.coinbase_payload.height
    }
}

/// Identifies one quorum removed by a diff.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct DeletedQuorum {
    pub llmq_type: LLMQType,
    pub quorum_hash: QuorumHash,
}

impl_consensus_encoding!(DeletedQuorum, llmq_type, quorum_hash);
