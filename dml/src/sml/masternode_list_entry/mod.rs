mod hash;
pub mod qualified_masternode_list_entry;
mod score;

use hashes::Hash;

use crate::bls_sig_utils::BLSPublicKey;
use crate::hash_types::{ConfirmedHash, ProTxHash};
use crate::internal_macros::impl_consensus_encoding;
use crate::sml::address::ServiceAddress;

/// One simplified masternode list entry, in its DIP4 wire form.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct MasternodeListEntry {
    pub pro_reg_tx_hash: ProTxHash,
    /// Hash of the block that confirmed the registration; all zeros until
    /// the registration is buried deep enough.
    pub confirmed_hash: ConfirmedHash,
    pub service_address: ServiceAddress,
    pub operator_public_key: BLSPublicKey,
    pub key_id_voting: [u8; 20],
    pub is_valid: bool,
}

impl_consensus_encoding!(
    MasternodeListEntry,
    pro_reg_tx_hash,
    confirmed_hash,
    service_address,
    operator_public_key,
    key_id_voting,
    is_valid
);

impl MasternodeListEntry {
    /// Whether the registration has been confirmed on chain yet.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed_hash != ConfirmedHash::all_zeros()
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::consensus::{deserialize, serialize};

    #[test]
    fn wire_round_trip() {
        let entry = MasternodeListEntry {
            pro_reg_tx_hash: ProTxHash::hash(b"registration"),
            confirmed_hash: ConfirmedHash::hash(b"confirmation"),
            service_address: ServiceAddress { ip: Ipv4Addr::new(198, 51, 100, 3), port: 19999 },
            operator_public_key: BLSPublicKey::from([7; 48]),
            key_id_voting: [9; 20],
            is_valid: true,
        };
        let encoded = serialize(&entry);
        // 32 + 32 + 18 + 48 + 20 + 1
        assert_eq!(encoded.len(), 151);
        assert_eq!(deserialize::<MasternodeListEntry>(&encoded).unwrap(), entry);
    }

    #[test]
    fn confirmation_tracks_the_hash() {
        let mut entry = MasternodeListEntry {
            pro_reg_tx_hash: ProTxHash::hash(b"registration"),
            confirmed_hash: ConfirmedHash::all_zeros(),
            service_address: ServiceAddress { ip: Ipv4Addr::new(198, 51, 100, 3), port: 19999 },
            operator_public_key: BLSPublicKey::from([7; 48]),
            key_id_voting: [9; 20],
            is_valid: true,
        };
        assert!(!entry.is_confirmed());
        entry.confirmed_hash = ConfirmedHash::hash(b"burial block");
        assert!(entry.is_confirmed());
    }
}
