use crate::hash_types::ProTxHash;
use crate::sml::masternode_list::MasternodeList;
use crate::sml::masternode_list_entry::qualified_masternode_list_entry::QualifiedMasternodeListEntry;

impl MasternodeList {
    pub fn masternode_count(&self) -> usize {
        self.masternodes.len()
    }

    /// Masternodes that are not banned.
    pub fn valid_masternode_count(&self) -> usize {
        self.masternodes
            .values()
            .filter(|entry| entry.masternode_list_entry.is_valid)
            .count()
    }

    pub fn masternode_for_pro_reg_tx_hash(
        &self,
        pro_reg_tx_hash: &ProTxHash,
    ) -> Option<&QualifiedMasternodeListEntry> {
        self.masternodes.get(pro_reg_tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use crate::network::message_sml::MnListDiff;
    use crate::sml::masternode_list::MasternodeList;
    use crate::sml::masternode_list_entry::MasternodeListEntry;
    use crate::BlockHash;

    #[test]
    fn counts_and_lookup() {
        let mut entries: Vec<MasternodeListEntry> =
            (0..3).map(MasternodeListEntry::dummy).collect();
        entries[2].is_valid = false;
        let diff = MnListDiff::dummy_base(1000, BlockHash::dummy(1000), entries);
        let list = MasternodeList::from_diff(&diff).expect("base list");

        assert_eq!(list.masternode_count(), 3);
        assert_eq!(list.valid_masternode_count(), 2);
        assert!(list
            .masternode_for_pro_reg_tx_hash(&MasternodeListEntry::dummy(0).pro_reg_tx_hash)
            .is_some());
        assert!(list
            .masternode_for_pro_reg_tx_hash(&MasternodeListEntry::dummy(9).pro_reg_tx_hash)
            .is_none());
    }
}
