use hashes::{sha256d, Hash};

use crate::hash_types::{MerkleRootMasternodeList, MerkleRootQuorums};
use crate::sml::masternode_list::MasternodeList;
use crate::transaction::special_transaction::coinbase::CoinbasePayload;

/// Bottom-up merkle root over pre-computed leaf hashes. A level with an odd
/// number of nodes pairs its last node with itself.
#[inline]
pub fn merkle_root_from_hashes(hashes: Vec<[u8; 32]>) -> Option<[u8; 32]> {
    let mut level = hashes;
    if level.is_empty() {
        return None;
    }
    while level.len() != 1 {
        let mut higher_level = Vec::with_capacity((level.len() + 1) / 2);
        for pair in level.chunks(2) {
            let mut buffer = Vec::with_capacity(64);
            buffer.extend_from_slice(&pair[0]);
            buffer.extend_from_slice(pair.get(1).unwrap_or(&pair[0]));
            higher_level.push(sha256d::Hash::hash(&buffer).to_byte_array());
        }
        level = higher_level;
    }
    Some(level[0])
}

impl MasternodeList {
    /// Root over the entry hashes of every masternode, ordered by
    /// registration transaction hash.
    pub fn calculate_masternodes_merkle_root(&self) -> Option<MerkleRootMasternodeList> {
        merkle_root_from_hashes(self.hashes_for_merkle_root())
            .map(MerkleRootMasternodeList::from_byte_array)
    }

    /// Root over the entry hashes of every quorum, in ascending hash order.
    pub fn calculate_llmq_merkle_root(&self) -> Option<MerkleRootQuorums> {
        merkle_root_from_hashes(self.hashes_for_quorum_merkle_root())
            .map(MerkleRootQuorums::from_byte_array)
    }

    /// Checks our masternode root against the one the coinbase payload
    /// committed to the chain.
    pub fn has_valid_mn_list_root(&self, coinbase_payload: &CoinbasePayload) -> bool {
        match self.masternode_merkle_root {
            Some(mn_merkle_root) => coinbase_payload.merkle_root_masternode_list == mn_merkle_root,
            None => false,
        }
    }

    /// Checks our quorum root against the one the coinbase payload committed
    /// to the chain.
    pub fn has_valid_llmq_list_root(&self, coinbase_payload: &CoinbasePayload) -> bool {
        match self.llmq_merkle_root {
            Some(llmq_merkle_root) => coinbase_payload.merkle_root_quorums == llmq_merkle_root,
            None => false,
        }
    }

    fn hashes_for_merkle_root(&self) -> Vec<[u8; 32]> {
        // The map is keyed by pro_reg_tx_hash, so iteration already yields
        // the canonical leaf order.
        self.masternodes.values().map(|entry| entry.entry_hash).collect()
    }

    fn hashes_for_quorum_merkle_root(&self) -> Vec<[u8; 32]> {
        let mut llmq_entry_hashes = self
            .quorums
            .values()
            .flat_map(|quorum_map| {
                quorum_map.values().map(|entry| entry.entry_hash.to_byte_array())
            })
            .collect::<Vec<_>>();
        llmq_entry_hashes.sort();
        llmq_entry_hashes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(tag: u8) -> [u8; 32] {
        [tag; 32]
    }

    fn parent(left: [u8; 32], right: [u8; 32]) -> [u8; 32] {
        let mut buffer = Vec::with_capacity(64);
        buffer.extend_from_slice(&left);
        buffer.extend_from_slice(&right);
        sha256d::Hash::hash(&buffer).to_byte_array()
    }

    #[test]
    fn empty_has_no_root() {
        assert_eq!(merkle_root_from_hashes(Vec::new()), None);
    }

    #[test]
    fn single_leaf_is_its_own_root() {
        assert_eq!(merkle_root_from_hashes(vec![leaf(1)]), Some(leaf(1)));
    }

    #[test]
    fn two_leaves_hash_together() {
        assert_eq!(
            merkle_root_from_hashes(vec![leaf(1), leaf(2)]),
            Some(parent(leaf(1), leaf(2)))
        );
    }

    #[test]
    fn odd_level_duplicates_its_last_node() {
        let expected = parent(parent(leaf(1), leaf(2)), parent(leaf(3), leaf(3)));
        assert_eq!(
            merkle_root_from_hashes(vec![leaf(1), leaf(2), leaf(3)]),
            Some(expected)
        );
    }
}
