use crate::hash_types::{QuorumModifierHash, ScoreHash};
use crate::sml::masternode_list_entry::qualified_masternode_list_entry::QualifiedMasternodeListEntry;

impl QualifiedMasternodeListEntry {
    /// The entry's rank under `modifier`, or `None` when the entry is banned
    /// or still unconfirmed and therefore ineligible for quorum membership.
    pub fn score(&self, modifier: QuorumModifierHash) -> Option<ScoreHash> {
        if !self.masternode_list_entry.is_valid {
            return None;
        }
        self.confirmed_hash_hashed_with_pro_reg_tx
            .map(|seed| ScoreHash::create_score(seed, modifier))
    }
}
