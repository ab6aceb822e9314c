use std::cmp::Ordering;

use hashes::Hash;

use crate::hash_types::ConfirmedHashHashedWithProRegTx;
use crate::sml::masternode_list_entry::MasternodeListEntry;

/// A masternode list entry together with the hashes everything downstream
/// needs: its merkle leaf hash and the scoring seed derived from the
/// registration and confirmation hashes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedMasternodeListEntry {
    pub masternode_list_entry: MasternodeListEntry,
    pub entry_hash: [u8; 32],
    /// `None` while the registration is unconfirmed; such entries never score
    /// into a quorum.
    pub confirmed_hash_hashed_with_pro_reg_tx: Option<ConfirmedHashHashedWithProRegTx>,
}

impl Ord for QualifiedMasternodeListEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.masternode_list_entry.cmp(&other.masternode_list_entry)
    }
}

impl PartialOrd for QualifiedMasternodeListEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<MasternodeListEntry> for QualifiedMasternodeListEntry {
    fn from(masternode_list_entry: MasternodeListEntry) -> Self {
        let entry_hash = masternode_list_entry.calculate_entry_hash();
        let confirmed_hash_hashed_with_pro_reg_tx =
            masternode_list_entry.is_confirmed().then(|| {
                ConfirmedHashHashedWithProRegTx::hash(
                    &[
                        masternode_list_entry.pro_reg_tx_hash.to_byte_array(),
                        masternode_list_entry.confirmed_hash.to_byte_array(),
                    ]
                    .concat(),
                )
            });
        QualifiedMasternodeListEntry {
            masternode_list_entry,
            entry_hash,
            confirmed_hash_hashed_with_pro_reg_tx,
        }
    }
}
