use hashes::Hash;

use crate::consensus::encode::VarInt;
use crate::consensus::Encodable;
use crate::hash_types::QuorumOrderingHash;
use crate::sml::masternode_list::MasternodeList;
use crate::sml::masternode_list_entry::qualified_masternode_list_entry::QualifiedMasternodeListEntry;
use crate::transaction::special_transaction::quorum_commitment::QuorumEntry;

impl QuorumEntry {
    /// Ranks this quorum against its competitors for one signing request;
    /// the quorum with the lowest ordering hash serves the request.
    pub fn ordering_hash_for_request_id(&self, request_id: [u8; 32]) -> QuorumOrderingHash {
        let llmq_type = VarInt(self.llmq_type as u64);

        let mut writer = Vec::with_capacity(llmq_type.len() + 64);
        llmq_type.consensus_encode(&mut writer).expect("encoding failed");
        writer.extend_from_slice(&self.quorum_hash.to_byte_array());
        writer.extend_from_slice(&request_id);

        QuorumOrderingHash::hash(&writer)
    }

    /// The members deterministically selected into this quorum, ranked under
    /// the modifier derived from the quorum's type and anchor hash.
    pub fn select_members<T>(&self, list: &MasternodeList) -> T
    where
        T: FromIterator<QualifiedMasternodeListEntry>,
    {
        list.calculate_quorum(self)
    }
}
