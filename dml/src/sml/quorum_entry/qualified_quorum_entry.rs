use crate::hash_types::{QuorumCommitmentHash, QuorumEntryHash};
use crate::transaction::special_transaction::quorum_commitment::QuorumEntry;

/// A quorum entry together with its derived hashes, computed once when the
/// entry enters a masternode list.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct QualifiedQuorumEntry {
    pub quorum_entry: QuorumEntry,
    pub commitment_hash: QuorumCommitmentHash,
    pub entry_hash: QuorumEntryHash,
}

impl From<QuorumEntry> for QualifiedQuorumEntry {
    fn from(value: QuorumEntry) -> Self {
        let commitment_hash = value.calculate_commitment_hash();
        let entry_hash = value.calculate_entry_hash();
        QualifiedQuorumEntry { quorum_entry: value, commitment_hash, entry_hash }
    }
}
