use std::collections::BTreeMap;

use crate::hash_types::QuorumHash;
use crate::network::message_sml::MnListDiff;
use crate::sml::error::SmlError;
use crate::sml::llmq_type::LLMQType;
use crate::sml::masternode_list::MasternodeList;
use crate::sml::quorum_entry::qualified_quorum_entry::QualifiedQuorumEntry;

impl MasternodeList {
    /// Materializes a full list directly from a diff's declared state,
    /// without a prior list to apply against. This is how the base list of a
    /// store comes to be; whether the diff qualifies as a base is the
    /// caller's check.
    pub fn from_diff(diff: &MnListDiff) -> Result<Self, SmlError> {
        for new_quorum in &diff.new_quorums {
            new_quorum.validate()?;
        }

        let masternodes = diff
            .new_masternodes
            .iter()
            .cloned()
            .map(|entry| (entry.pro_reg_tx_hash, entry.into()))
            .collect::<BTreeMap<_, _>>();

        let mut quorums: BTreeMap<LLMQType, BTreeMap<QuorumHash, QualifiedQuorumEntry>> =
            BTreeMap::new();
        for quorum in diff.new_quorums.iter().cloned() {
            quorums.entry(quorum.llmq_type).or_default().insert(quorum.quorum_hash, quorum.into());
        }

        Ok(MasternodeList::build(masternodes, quorums, diff.block_hash, diff.height()).build())
    }
}
