use std::collections::BTreeMap;

use crate::hash_types::{QuorumModifierHash, ScoreHash};
use crate::sml::masternode_list::MasternodeList;
use crate::sml::masternode_list_entry::qualified_masternode_list_entry::QualifiedMasternodeListEntry;
use crate::sml::quorum_entry::quorum_modifier_type::LLMQModifier;
use crate::transaction::special_transaction::quorum_commitment::QuorumEntry;

impl MasternodeList {
    /// Deterministic member selection for `quorum`: every eligible
    /// masternode is ranked under the quorum's modifier hash and the first
    /// `size` of them form the member set. Depends only on the list contents
    /// and the modifier, nothing else.
    pub fn calculate_quorum<T>(&self, quorum: &QuorumEntry) -> T
    where
        T: FromIterator<QualifiedMasternodeListEntry>,
    {
        let quorum_modifier =
            LLMQModifier::new(quorum.llmq_type, quorum.quorum_hash).build_llmq_hash();
        let score_dictionary = self.scores_for_quorum(quorum_modifier);
        score_dictionary.into_values().take(quorum.llmq_type.size() as usize).collect()
    }

    /// Every masternode that scores under `quorum_modifier`, keyed by its
    /// score. Banned and unconfirmed entries do not score at all.
    pub fn scores_for_quorum(
        &self,
        quorum_modifier: QuorumModifierHash,
    ) -> BTreeMap<ScoreHash, QualifiedMasternodeListEntry> {
        self.masternodes
            .values()
            .filter_map(|entry| entry.score(quorum_modifier).map(|score| (score, entry.clone())))
            .collect()
    }
}
