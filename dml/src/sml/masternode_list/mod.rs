mod apply_diff;
mod builder;
mod from_diff;
mod masternode_helpers;
mod merkle_roots;
mod quorum_helpers;
mod scores_for_quorum;

use std::collections::BTreeMap;

pub use builder::MasternodeListBuilder;
pub use merkle_roots::merkle_root_from_hashes;

use crate::hash_types::{MerkleRootMasternodeList, MerkleRootQuorums, ProTxHash, QuorumHash};
use crate::prelude::CoreBlockHeight;
use crate::sml::llmq_type::LLMQType;
use crate::sml::masternode_list_entry::qualified_masternode_list_entry::QualifiedMasternodeListEntry;
use crate::sml::quorum_entry::qualified_quorum_entry::QualifiedQuorumEntry;
use crate::BlockHash;

/// The simplified masternode list at one height: every active masternode and
/// every active quorum, keyed for deterministic iteration.
///
/// A list is never mutated in place. It is built from a base diff or produced
/// by [`MasternodeList::apply_diff`] on a prior list, so each height's list
/// is a value of its own.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MasternodeList {
    pub block_hash: BlockHash,
    pub known_height: CoreBlockHeight,
    pub masternode_merkle_root: Option<MerkleRootMasternodeList>,
    pub llmq_merkle_root: Option<MerkleRootQuorums>,
    pub masternodes: BTreeMap<ProTxHash, QualifiedMasternodeListEntry>,
    pub quorums: BTreeMap<LLMQType, BTreeMap<QuorumHash, QualifiedQuorumEntry>>,
}

impl MasternodeList {
    pub fn empty(block_hash: BlockHash, block_height: CoreBlockHeight) -> Self {
        Self::build(BTreeMap::default(), BTreeMap::new(), block_hash, block_height).build()
    }

    pub fn build(
        masternodes: BTreeMap<ProTxHash, QualifiedMasternodeListEntry>,
        quorums: BTreeMap<LLMQType, BTreeMap<QuorumHash, QualifiedQuorumEntry>>,
        block_hash: BlockHash,
        block_height: CoreBlockHeight,
    ) -> MasternodeListBuilder {
        MasternodeListBuilder::new(masternodes, quorums, block_hash, block_height)
    }
}
