use std::fmt;

use hashes::Hash;

use crate::consensus::encode::VarInt;
use crate::consensus::Encodable;
use crate::hash_types::{QuorumHash, QuorumModifierHash};
use crate::sml::llmq_type::LLMQType;

/// The selection seed of one quorum: its type and its anchor block hash.
///
/// Collapsing the seed through [`LLMQModifier::build_llmq_hash`] gives the
/// modifier every masternode is ranked under, so member selection depends
/// only on the list contents and these two values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LLMQModifier {
    pub llmq_type: LLMQType,
    pub block_hash: QuorumHash,
}

impl fmt::Display for LLMQModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, BlockHash: {}", self.llmq_type, self.block_hash)
    }
}

impl LLMQModifier {
    pub fn new(llmq_type: LLMQType, block_hash: QuorumHash) -> Self {
        LLMQModifier { llmq_type, block_hash }
    }

    /// Collapses the seed into the modifier hash that ranks masternodes.
    pub fn build_llmq_hash(&self) -> QuorumModifierHash {
        let mut writer = vec![];
        VarInt(self.llmq_type as u64).consensus_encode(&mut writer).expect("encoding failed");
        writer.extend_from_slice(&self.block_hash.to_byte_array());
        QuorumModifierHash::hash(&writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_depends_on_type_and_block() {
        let block_a = QuorumHash::hash(b"block a");
        let block_b = QuorumHash::hash(b"block b");

        let base = LLMQModifier::new(LLMQType::LlmqtypeTest, block_a).build_llmq_hash();
        assert_eq!(base, LLMQModifier::new(LLMQType::LlmqtypeTest, block_a).build_llmq_hash());
        assert_ne!(base, LLMQModifier::new(LLMQType::LlmqtypeDevnet, block_a).build_llmq_hash());
        assert_ne!(base, LLMQModifier::new(LLMQType::LlmqtypeTest, block_b).build_llmq_hash());
    }
}
