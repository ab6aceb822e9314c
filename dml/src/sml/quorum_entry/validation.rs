use tracing::debug;

use crate::sml::quorum_validation_error::QuorumValidationError;
use crate::transaction::special_transaction::quorum_commitment::QuorumEntry;

impl QuorumEntry {
    /// Validates the shape of the variable-length fields against the quorum
    /// type's profile. Runs before every canonical encoding.
    ///
    /// The declared population counts are informational: they must fit the
    /// member-set size, but a disagreement with the bitset popcount is only
    /// logged, matching what the chain itself enforces.
    pub fn validate(&self) -> Result<(), QuorumValidationError> {
        let size = self.llmq_type.size();
        let expected = self.llmq_type.bitset_len();

        if self.signers.len() != expected {
            return Err(QuorumValidationError::InvalidBitsetLength {
                field: "signers",
                size,
                expected,
                found: self.signers.len(),
            });
        }
        if self.valid_members.len() != expected {
            return Err(QuorumValidationError::InvalidBitsetLength {
                field: "valid_members",
                size,
                expected,
                found: self.valid_members.len(),
            });
        }
        if self.signers_count > size as u64 {
            return Err(QuorumValidationError::PopulationCountExceedsQuorumSize {
                field: "signers",
                count: self.signers_count,
                size,
            });
        }
        if self.valid_members_count > size as u64 {
            return Err(QuorumValidationError::PopulationCountExceedsQuorumSize {
                field: "valid_members",
                count: self.valid_members_count,
                size,
            });
        }

        let signers_popcount = popcount(&self.signers);
        if signers_popcount != self.signers_count {
            debug!(
                declared = self.signers_count,
                actual = signers_popcount,
                quorum_hash = %self.quorum_hash,
                "signers count disagrees with bitset popcount"
            );
        }
        let valid_members_popcount = popcount(&self.valid_members);
        if valid_members_popcount != self.valid_members_count {
            debug!(
                declared = self.valid_members_count,
                actual = valid_members_popcount,
                quorum_hash = %self.quorum_hash,
                "valid members count disagrees with bitset popcount"
            );
        }

        Ok(())
    }
}

fn popcount(bits: &[u8]) -> u64 {
    bits.iter().map(|byte| byte.count_ones() as u64).sum()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::sml::llmq_type::LLMQType;

    #[test]
    fn well_formed_entry_passes() {
        QuorumEntry::dummy(LLMQType::Llmqtype50_60, 1).validate().expect("well formed");
    }

    #[test]
    fn wrong_bitset_length_rejected() {
        let mut entry = QuorumEntry::dummy(LLMQType::Llmqtype50_60, 1);
        entry.signers = vec![0xFF]; // one byte cannot hold fifty members
        assert_matches!(
            entry.validate(),
            Err(QuorumValidationError::InvalidBitsetLength {
                field: "signers",
                size: 50,
                expected: 7,
                found: 1,
            })
        );

        let mut entry = QuorumEntry::dummy(LLMQType::LlmqtypeTest, 1);
        entry.valid_members = vec![0x07, 0x00];
        assert_matches!(
            entry.validate(),
            Err(QuorumValidationError::InvalidBitsetLength { field: "valid_members", .. })
        );
    }

    #[test]
    fn oversized_population_count_rejected() {
        let mut entry = QuorumEntry::dummy(LLMQType::LlmqtypeTest, 1);
        entry.signers_count = 4; // a three-member quorum
        assert_matches!(
            entry.validate(),
            Err(QuorumValidationError::PopulationCountExceedsQuorumSize {
                field: "signers",
                count: 4,
                size: 3,
            })
        );
    }

    #[test]
    fn popcount_disagreement_is_tolerated() {
        let mut entry = QuorumEntry::dummy(LLMQType::LlmqtypeTest, 1);
        entry.signers_count = 1;
        entry.signers = vec![0b0000_0111];
        entry.validate().expect("informational counts are not enforced");
    }
}
