use hashes::Hash;

use crate::bls_sig_utils::{BLSPublicKey, BLSSignature};
use crate::hash_types::{QuorumHash, QuorumVVecHash};
use crate::sml::llmq_type::LLMQType;
use crate::transaction::special_transaction::quorum_commitment::QuorumEntry;

impl QuorumEntry {
    /// A well-formed dummy commitment of `llmq_type`, unique to `id`.
    ///
    /// Bitsets have the byte length the type implies with the two (signers)
    /// and three (valid members) lowest member bits set, so the entry passes
    /// validation for every type in the table.
    pub fn dummy(llmq_type: LLMQType, id: usize) -> QuorumEntry {
        let mut data = "dash-dml-test-quorum".as_bytes().to_vec();
        data.extend_from_slice(&id.to_le_bytes());
        let quorum_hash = QuorumHash::hash(&data);
        data.push(b'v');
        let quorum_vvec_hash = QuorumVVecHash::hash(&data);

        let bitset_len = llmq_type.bitset_len();
        let mut signers = vec![0u8; bitset_len];
        signers[0] = 0b0000_0011;
        let mut valid_members = vec![0u8; bitset_len];
        valid_members[0] = 0b0000_0111;

        let mut public_key = [0u8; 48];
        public_key[..8].copy_from_slice(&(id as u64).to_le_bytes());

        QuorumEntry {
            version: 1,
            llmq_type,
            quorum_hash,
            signers_count: 2,
            signers,
            valid_members_count: 3,
            valid_members,
            quorum_public_key: BLSPublicKey::from(public_key),
            quorum_vvec_hash,
            quorum_sig: BLSSignature::from([0x51; 96]),
            members_sig: BLSSignature::from([0x52; 96]),
        }
    }
}
