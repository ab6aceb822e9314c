use hashes::Hash;

use crate::BlockHash;

impl BlockHash {
    /// A deterministic block hash unique to `id`.
    pub fn dummy(id: usize) -> BlockHash {
        let mut data = "dash-dml-test-block".as_bytes().to_vec();
        data.extend_from_slice(&id.to_le_bytes());
        BlockHash::hash(&data)
    }
}
