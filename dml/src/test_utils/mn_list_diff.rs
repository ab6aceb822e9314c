use hashes::Hash;

use crate::hash_types::{MerkleRootMasternodeList, MerkleRootQuorums};
use crate::network::message_sml::MnListDiff;
use crate::prelude::CoreBlockHeight;
use crate::sml::masternode_list_entry::MasternodeListEntry;
use crate::transaction::special_transaction::coinbase::CoinbasePayload;
use crate::BlockHash;

impl MnListDiff {
    /// A diff rooted at the null hash, declaring `new_masternodes` at
    /// `height`; the kind of diff a store accepts as its base.
    pub fn dummy_base(
        height: CoreBlockHeight,
        block_hash: BlockHash,
        new_masternodes: Vec<MasternodeListEntry>,
    ) -> MnListDiff {
        let mut diff = Self::dummy(BlockHash::all_zeros(), block_hash, height);
        diff.new_masternodes = new_masternodes;
        diff
    }

    /// An empty delta between two known blocks, ending at `height`. Callers
    /// fill in the added and removed sets they need.
    pub fn dummy(
        base_block_hash: BlockHash,
        block_hash: BlockHash,
        height: CoreBlockHeight,
    ) -> MnListDiff {
        MnListDiff {
            version: 1,
            base_block_hash,
            block_hash,
            coinbase_payload: CoinbasePayload {
                version: 2,
                height,
                merkle_root_masternode_list: MerkleRootMasternodeList::all_zeros(),
                merkle_root_quorums: MerkleRootQuorums::all_zeros(),
            },
            deleted_masternodes: Vec::new(),
            new_masternodes: Vec::new(),
            deleted_quorums: Vec::new(),
            new_quorums: Vec::new(),
        }
    }
}
