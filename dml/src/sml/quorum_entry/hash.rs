use hashes::{sha256d, Hash};

use crate::consensus::encode::VarInt;
use crate::consensus::Encodable;
use crate::hash_types::{QuorumCommitmentHash, QuorumEntryHash};
use crate::transaction::special_transaction::quorum_commitment::QuorumEntry;

impl QuorumEntry {
    /// The hash quorum members agree on and sign during the DKG.
    ///
    /// Covers the type, anchor hash, valid-members count and bitset, quorum
    /// public key and verification-vector hash. The signers bitset and both
    /// signatures are attached after the commitment is agreed, so they must
    /// stay out of the digest; so does the version.
    pub fn calculate_commitment_hash(&self) -> QuorumCommitmentHash {
        let mut writer = Vec::new();
        self.llmq_type.consensus_encode(&mut writer).expect("encoding failed");
        self.quorum_hash.consensus_encode(&mut writer).expect("encoding failed");
        VarInt(self.valid_members_count).consensus_encode(&mut writer).expect("encoding failed");
        writer.extend_from_slice(&self.valid_members);
        self.quorum_public_key.consensus_encode(&mut writer).expect("encoding failed");
        self.quorum_vvec_hash.consensus_encode(&mut writer).expect("encoding failed");
        QuorumCommitmentHash::hash(&writer)
    }

    /// The entry's own identity hash: sha256d over the full canonical
    /// encoding, byte-reversed into the chain display convention. Used to
    /// index the quorum and as its merkle leaf.
    pub fn calculate_entry_hash(&self) -> QuorumEntryHash {
        let mut writer = Vec::new();
        self.consensus_encode(&mut writer).expect("encoding failed");
        let mut bytes = sha256d::Hash::hash(&writer).to_byte_array();
        bytes.reverse();
        QuorumEntryHash::from_byte_array(bytes)
    }
}
