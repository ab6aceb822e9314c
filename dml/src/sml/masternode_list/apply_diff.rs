use crate::network::message_sml::MnListDiff;
use crate::sml::error::SmlError;
use crate::sml::masternode_list::MasternodeList;

impl MasternodeList {
    /// Applies `diff` on top of this list and returns the list at the diff's
    /// target height. This list is left untouched.
    ///
    /// The diff must extend this exact list: its `base_block_hash` has to
    /// match our block hash, otherwise the chain of diffs is broken and
    /// composing further would corrupt the result.
    pub fn apply_diff(&self, diff: &MnListDiff) -> Result<MasternodeList, SmlError> {
        if self.block_hash != diff.base_block_hash {
            return Err(SmlError::BaseBlockHashMismatch {
                expected: self.block_hash,
                found: diff.base_block_hash,
            });
        }

        // Quorum entries ride in from the outside; check their shape before
        // folding any of them in.
        for new_quorum in &diff.new_quorums {
            new_quorum.validate()?;
        }

        let mut updated_masternodes = self.masternodes.clone();

        for pro_tx_hash in &diff.deleted_masternodes {
            updated_masternodes.remove(pro_tx_hash);
        }

        for new_mn in &diff.new_masternodes {
            updated_masternodes.insert(new_mn.pro_reg_tx_hash, new_mn.clone().into());
        }

        let mut updated_quorums = self.quorums.clone();

        for deleted_quorum in &diff.deleted_quorums {
            if let Some(quorum_map) = updated_quorums.get_mut(&deleted_quorum.llmq_type) {
                quorum_map.remove(&deleted_quorum.quorum_hash);
                if quorum_map.is_empty() {
                    updated_quorums.remove(&deleted_quorum.llmq_type);
                }
            }
        }

        for new_quorum in &diff.new_quorums {
            updated_quorums
                .entry(new_quorum.llmq_type)
                .or_default()
                .insert(new_quorum.quorum_hash, new_quorum.clone().into());
        }

        Ok(MasternodeList::build(updated_masternodes, updated_quorums, diff.block_hash, diff.height())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use hashes::Hash;

    use super::*;
    use crate::network::message_sml::DeletedQuorum;
    use crate::sml::llmq_type::LLMQType;
    use crate::sml::masternode_list_entry::MasternodeListEntry;
    use crate::transaction::special_transaction::quorum_commitment::QuorumEntry;
    use crate::BlockHash;

    #[test]
    fn diff_adds_and_removes() {
        let base_diff = MnListDiff::dummy_base(
            1000,
            BlockHash::dummy(1000),
            vec![MasternodeListEntry::dummy(1), MasternodeListEntry::dummy(2)],
        );
        let base = MasternodeList::from_diff(&base_diff).expect("base list");
        assert_eq!(base.masternodes.len(), 2);

        let mut diff = MnListDiff::dummy(BlockHash::dummy(1000), BlockHash::dummy(1001), 1001);
        diff.deleted_masternodes = vec![MasternodeListEntry::dummy(1).pro_reg_tx_hash];
        diff.new_masternodes = vec![MasternodeListEntry::dummy(3)];
        diff.new_quorums = vec![QuorumEntry::dummy(LLMQType::LlmqtypeTest, 7)];

        let next = base.apply_diff(&diff).expect("applies");
        assert_eq!(next.known_height, 1001);
        assert_eq!(next.block_hash, BlockHash::dummy(1001));
        assert_eq!(next.masternodes.len(), 2);
        assert!(!next.masternodes.contains_key(&MasternodeListEntry::dummy(1).pro_reg_tx_hash));
        assert!(next.masternodes.contains_key(&MasternodeListEntry::dummy(3).pro_reg_tx_hash));
        assert_eq!(next.quorums_count(), 1);
        // The base list is a value of its own and stays as it was.
        assert_eq!(base.masternodes.len(), 2);
        assert_eq!(base.quorums_count(), 0);

        // Deleting the quorum again empties its type bucket entirely.
        let mut removal = MnListDiff::dummy(BlockHash::dummy(1001), BlockHash::dummy(1002), 1002);
        removal.deleted_quorums = vec![DeletedQuorum {
            llmq_type: LLMQType::LlmqtypeTest,
            quorum_hash: QuorumEntry::dummy(LLMQType::LlmqtypeTest, 7).quorum_hash,
        }];
        let after_removal = next.apply_diff(&removal).expect("applies");
        assert_eq!(after_removal.quorums_count(), 0);
        assert!(after_removal.quorums.is_empty());
    }

    #[test]
    fn mismatched_base_rejected() {
        let base_diff =
            MnListDiff::dummy_base(1000, BlockHash::dummy(1000), vec![MasternodeListEntry::dummy(1)]);
        let base = MasternodeList::from_diff(&base_diff).expect("base list");

        let stranger = MnListDiff::dummy(BlockHash::hash(b"elsewhere"), BlockHash::dummy(1001), 1001);
        assert_matches!(
            base.apply_diff(&stranger),
            Err(SmlError::BaseBlockHashMismatch { .. })
        );
    }

    #[test]
    fn malformed_quorum_in_diff_rejected() {
        let base_diff =
            MnListDiff::dummy_base(1000, BlockHash::dummy(1000), vec![MasternodeListEntry::dummy(1)]);
        let base = MasternodeList::from_diff(&base_diff).expect("base list");

        let mut diff = MnListDiff::dummy(BlockHash::dummy(1000), BlockHash::dummy(1001), 1001);
        let mut bad_quorum = QuorumEntry::dummy(LLMQType::Llmqtype50_60, 1);
        bad_quorum.signers = vec![0xFF]; // seven bytes expected
        diff.new_quorums = vec![bad_quorum];

        assert_matches!(base.apply_diff(&diff), Err(SmlError::InvalidQuorumEntry(_)));
    }
}
