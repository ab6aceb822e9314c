use thiserror::Error;

/// Shape violations in a quorum entry.
///
/// Fixed-width fields (hashes, BLS blobs) are correct by construction of
/// their types; what remains to check are the variable-length fields whose
/// sizes the LLMQ type table dictates.
#[derive(Debug, Error, Clone, Ord, PartialOrd, PartialEq, Hash, Eq)]
pub enum QuorumValidationError {
    /// A member bitset does not have the byte length the quorum type implies.
    #[error("invalid {field} bitset length for a quorum of {size} members: expected {expected} bytes, found {found}")]
    InvalidBitsetLength {
        /// Which bitset is malformed.
        field: &'static str,
        /// Member-set size of the quorum type.
        size: u32,
        /// `ceil(size / 8)`.
        expected: usize,
        /// Length actually present.
        found: usize,
    },

    /// A declared population count names more members than the quorum has.
    #[error("{field} count {count} exceeds quorum size {size}")]
    PopulationCountExceedsQuorumSize {
        /// Which count is out of range.
        field: &'static str,
        /// The declared count.
        count: u64,
        /// Member-set size of the quorum type.
        size: u32,
    },

    /// An entry failed to decode back from its own canonical encoding.
    #[error("entry did not survive its canonical encoding round trip")]
    RoundTripFailed,
}
