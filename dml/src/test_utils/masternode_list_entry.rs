use std::net::Ipv4Addr;

use hashes::Hash;

use crate::bls_sig_utils::BLSPublicKey;
use crate::hash_types::{ConfirmedHash, ProTxHash};
use crate::sml::address::ServiceAddress;
use crate::sml::masternode_list_entry::MasternodeListEntry;

impl MasternodeListEntry {
    /// A valid, confirmed dummy masternode unique to `id`.
    pub fn dummy(id: usize) -> MasternodeListEntry {
        let mut data = "dash-dml-test-masternode".as_bytes().to_vec();
        data.extend_from_slice(&id.to_le_bytes());
        let pro_reg_tx_hash = ProTxHash::hash(&data);
        data.push(b'c');
        let confirmed_hash = ConfirmedHash::hash(&data);

        let mut operator_key = [0u8; 48];
        operator_key[..8].copy_from_slice(&(id as u64).to_le_bytes());

        MasternodeListEntry {
            pro_reg_tx_hash,
            confirmed_hash,
            service_address: ServiceAddress {
                ip: Ipv4Addr::new(10, 0, (id >> 8) as u8, id as u8),
                port: 19999,
            },
            operator_public_key: BLSPublicKey::from(operator_key),
            key_id_voting: [id as u8; 20],
            is_valid: true,
        }
    }
}
