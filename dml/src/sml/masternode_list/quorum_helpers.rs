use std::collections::BTreeSet;

use crate::hash_types::QuorumHash;
use crate::sml::llmq_type::LLMQType;
use crate::sml::masternode_list::MasternodeList;
use crate::sml::quorum_entry::qualified_quorum_entry::QualifiedQuorumEntry;

impl MasternodeList {
    pub fn quorum_hashes(&self) -> BTreeSet<QuorumHash> {
        self.quorums.values().flat_map(|quorum_map| quorum_map.keys().cloned()).collect()
    }

    pub fn quorum_entry_of_type_for_quorum_hash(
        &self,
        llmq_type: LLMQType,
        quorum_hash: QuorumHash,
    ) -> Option<&QualifiedQuorumEntry> {
        self.quorums.get(&llmq_type)?.get(&quorum_hash)
    }

    pub fn quorums_count(&self) -> u64 {
        let mut count: u64 = 0;
        for entry in self.quorums.values() {
            count += entry.len() as u64;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use crate::network::message_sml::MnListDiff;
    use crate::sml::llmq_type::LLMQType;
    use crate::sml::masternode_list::MasternodeList;
    use crate::transaction::special_transaction::quorum_commitment::QuorumEntry;
    use crate::BlockHash;

    #[test]
    fn quorum_lookups() {
        let empty = MasternodeList::empty(BlockHash::dummy(999), 999);
        assert_eq!(empty.quorums_count(), 0);
        assert!(empty.quorum_hashes().is_empty());

        let mut diff = MnListDiff::dummy_base(1000, BlockHash::dummy(1000), Vec::new());
        let test_quorum = QuorumEntry::dummy(LLMQType::LlmqtypeTest, 1);
        let devnet_quorum = QuorumEntry::dummy(LLMQType::LlmqtypeDevnet, 2);
        diff.new_quorums = vec![test_quorum.clone(), devnet_quorum.clone()];
        let list = MasternodeList::from_diff(&diff).expect("base list");

        assert_eq!(list.quorums_count(), 2);
        assert_eq!(list.quorum_hashes().len(), 2);
        assert!(list
            .quorum_entry_of_type_for_quorum_hash(LLMQType::LlmqtypeTest, test_quorum.quorum_hash)
            .is_some());
        // Same hash under the wrong type finds nothing.
        assert!(list
            .quorum_entry_of_type_for_quorum_hash(LLMQType::LlmqtypeDevnet, test_quorum.quorum_hash)
            .is_none());
    }
}
