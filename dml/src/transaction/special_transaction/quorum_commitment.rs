// Rust Dash Library
// Written for Dash in 2022 by
//     The Dash Core Developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! Dash Quorum Commitment Special Transaction.
//!
//! It is defined in DIP6 [dip-0006.md](https://github.com/dashpay/dips/blob/master/dip-0006.md).
//!

use std::io::{Read, Write};

use crate::bls_sig_utils::{BLSPublicKey, BLSSignature};
use crate::consensus::encode::VarInt;
use crate::consensus::{encode, Decodable, Encodable};
use crate::hash_types::{QuorumHash, QuorumVVecHash};
use crate::internal_macros::impl_consensus_encoding;
use crate::io;
use crate::sml::llmq_type::LLMQType;
use crate::sml::quorum_validation_error::QuorumValidationError;

/// One quorum commitment, as finalized at the end of a DKG session. It is
/// described in the finalization section of DIP6:
/// [dip-0006.md#6-finalization-phase](https://github.com/dashpay/dips/blob/master/dip-0006.md#6-finalization-phase)
///
/// The quorum type is read and checked against the known table before either
/// bitset, because the bitset byte lengths are derived from the type's
/// member-set size and from nothing else. The declared `signers_count` and
/// `valid_members_count` never influence how many bytes are read.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct QuorumEntry {
    pub version: u16,
    pub llmq_type: LLMQType,
    pub quorum_hash: QuorumHash,
    /// Declared number of members that signed the commitment. Informational;
    /// the authoritative record is the `signers` bitset.
    pub signers_count: u64,
    /// One bit per member index, packed little-endian within each byte.
    pub signers: Vec<u8>,
    /// Declared number of members with a valid DKG contribution.
    pub valid_members_count: u64,
    pub valid_members: Vec<u8>,
    pub quorum_public_key: BLSPublicKey,
    pub quorum_vvec_hash: QuorumVVecHash,
    /// The recovered threshold signature over the commitment hash.
    pub quorum_sig: BLSSignature,
    /// Aggregate of the individual member signatures over the commitment hash.
    pub members_sig: BLSSignature,
}

impl QuorumEntry {
    /// The size of the entry in bytes.
    pub fn size(&self) -> usize {
        let mut size = 2 + 1 + 32 + 48 + 32 + 96 + 96;
        size += VarInt(self.signers_count).len() + self.signers.len();
        size += VarInt(self.valid_members_count).len() + self.valid_members.len();
        size
    }

    /// Decodes an entry from its exact canonical byte form. Surplus bytes are
    /// an error: the encoding is exact-length, not length-prefixed as a whole.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, encode::Error> {
        encode::deserialize(bytes)
    }

    /// Decodes an entry from the hex form of its canonical bytes.
    pub fn from_hex(hex_str: &str) -> Result<Self, encode::Error> {
        let bytes =
            hex::decode(hex_str).map_err(|_| encode::Error::ParseFailed("invalid hex string"))?;
        Self::from_bytes(&bytes)
    }

    /// Validates the entry and serializes it to its canonical byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, QuorumValidationError> {
        self.validate()?;
        Ok(encode::serialize(self))
    }

    /// Deep-copies the entry by round-tripping it through its canonical
    /// encoding, which doubles as a proof the entry is self-consistent.
    pub fn verified_copy(&self) -> Result<Self, QuorumValidationError> {
        let bytes = self.to_bytes()?;
        Self::from_bytes(&bytes).map_err(|_| QuorumValidationError::RoundTripFailed)
    }
}

impl Encodable for QuorumEntry {
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        let mut len = 0;
        len += self.version.consensus_encode(w)?;
        len += self.llmq_type.consensus_encode(w)?;
        len += self.quorum_hash.consensus_encode(w)?;
        len += VarInt(self.signers_count).consensus_encode(w)?;
        len += write_fixed_bitset(w, &self.signers)?;
        len += VarInt(self.valid_members_count).consensus_encode(w)?;
        len += write_fixed_bitset(w, &self.valid_members)?;
        len += self.quorum_public_key.consensus_encode(w)?;
        len += self.quorum_vvec_hash.consensus_encode(w)?;
        len += self.quorum_sig.consensus_encode(w)?;
        len += self.members_sig.consensus_encode(w)?;
        Ok(len)
    }
}

impl Decodable for QuorumEntry {
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        let version = u16::consensus_decode(r)?;
        // The type must be known before either bitset length can be derived.
        let llmq_type = LLMQType::consensus_decode(r)?;
        let quorum_hash = QuorumHash::consensus_decode(r)?;
        let signers_count = VarInt::consensus_decode(r)?;
        let signers = read_fixed_bitset(r, llmq_type.size() as usize)?;
        let valid_members_count = VarInt::consensus_decode(r)?;
        let valid_members = read_fixed_bitset(r, llmq_type.size() as usize)?;
        let quorum_public_key = BLSPublicKey::consensus_decode(r)?;
        let quorum_vvec_hash = QuorumVVecHash::consensus_decode(r)?;
        let quorum_sig = BLSSignature::consensus_decode(r)?;
        let members_sig = BLSSignature::consensus_decode(r)?;
        Ok(QuorumEntry {
            version,
            llmq_type,
            quorum_hash,
            signers_count: signers_count.0,
            signers,
            valid_members_count: valid_members_count.0,
            valid_members,
            quorum_public_key,
            quorum_vvec_hash,
            quorum_sig,
            members_sig,
        })
    }
}

/// A Quorum Commitment Payload used in a Quorum Commitment Special
/// Transaction. This is used in the mining phase as described in DIP 6:
/// [dip-0006.md#7-mining-phase](https://github.com/dashpay/dips/blob/master/dip-0006.md#7-mining-phase).
///
/// Miners take the best final commitment for a DKG session and mine it into a
/// block.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct QuorumCommitmentPayload {
    pub version: u16,
    pub height: u32,
    pub finalization_commitment: QuorumEntry,
}

impl QuorumCommitmentPayload {
    /// The size of the payload in bytes.
    pub fn size(&self) -> usize {
        2 + 4 + self.finalization_commitment.size()
    }
}

impl_consensus_encoding!(QuorumCommitmentPayload, version, height, finalization_commitment);

/// Reads a member bitset, packed eight bits per byte.
fn read_fixed_bitset<R: Read + ?Sized>(r: &mut R, bit_count: usize) -> Result<Vec<u8>, encode::Error> {
    let mut bytes = vec![0u8; (bit_count + 7) / 8];
    r.read_exact(&mut bytes).map_err(encode::Error::from)?;
    Ok(bytes)
}

/// Writes a packed member bitset as-is.
fn write_fixed_bitset<W: Write + ?Sized>(w: &mut W, bits: &[u8]) -> Result<usize, io::Error> {
    w.write_all(bits)?;
    Ok(bits.len())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use hashes::Hash;

    use super::*;
    use crate::consensus::{deserialize, serialize};

    fn entry_of_type(llmq_type: LLMQType) -> QuorumEntry {
        let bitset_len = llmq_type.bitset_len();
        QuorumEntry {
            version: 1,
            llmq_type,
            quorum_hash: QuorumHash::hash(b"anchor block"),
            signers_count: 2,
            signers: {
                let mut bits = vec![0u8; bitset_len];
                bits[0] = 0b0000_0011;
                bits
            },
            valid_members_count: 3,
            valid_members: {
                let mut bits = vec![0u8; bitset_len];
                bits[0] = 0b0000_0111;
                bits
            },
            quorum_public_key: BLSPublicKey::from([0x42; 48]),
            quorum_vvec_hash: QuorumVVecHash::hash(b"vvec"),
            quorum_sig: BLSSignature::from([0x51; 96]),
            members_sig: BLSSignature::from([0x52; 96]),
        }
    }

    #[test]
    fn round_trip_every_known_type() {
        for llmq_type in [
            LLMQType::Llmqtype50_60,
            LLMQType::Llmqtype400_60,
            LLMQType::Llmqtype400_85,
            LLMQType::LlmqtypeTest,
            LLMQType::LlmqtypeDevnet,
        ] {
            let entry = entry_of_type(llmq_type);
            let bytes = entry.to_bytes().expect("valid entry");
            assert_eq!(bytes.len(), entry.size());
            let decoded = QuorumEntry::from_bytes(&bytes).expect("decode");
            assert_eq!(decoded, entry);
        }
    }

    #[test]
    fn bitset_lengths_come_from_the_type_table() {
        // 50 members pack into 7 bytes, 3 members into 1.
        let bytes = entry_of_type(LLMQType::Llmqtype50_60).to_bytes().unwrap();
        let decoded = QuorumEntry::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.signers.len(), 7);
        assert_eq!(decoded.valid_members.len(), 7);

        let bytes = entry_of_type(LLMQType::LlmqtypeTest).to_bytes().unwrap();
        let decoded = QuorumEntry::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.signers.len(), 1);
        assert_eq!(decoded.valid_members.len(), 1);
    }

    #[test]
    fn truncated_input_rejected() {
        let bytes = entry_of_type(LLMQType::LlmqtypeTest).to_bytes().unwrap();
        assert_matches!(
            QuorumEntry::from_bytes(&bytes[..bytes.len() - 1]),
            Err(encode::Error::UnexpectedEof)
        );
        // Cutting inside the first bitset fails the same way.
        assert_matches!(QuorumEntry::from_bytes(&bytes[..36]), Err(encode::Error::UnexpectedEof));
    }

    #[test]
    fn trailing_byte_rejected() {
        let mut bytes = entry_of_type(LLMQType::LlmqtypeTest).to_bytes().unwrap();
        bytes.push(0);
        assert_matches!(
            QuorumEntry::from_bytes(&bytes),
            Err(encode::Error::TrailingBytes { .. })
        );
    }

    #[test]
    fn unknown_quorum_type_rejected_before_bitsets() {
        let mut bytes = entry_of_type(LLMQType::LlmqtypeTest).to_bytes().unwrap();
        bytes[2] = 0x07; // no such type in the table
        assert_matches!(
            QuorumEntry::from_bytes(&bytes),
            Err(encode::Error::UnknownQuorumType(0x07))
        );
    }

    #[test]
    fn from_hex_matches_from_bytes() {
        let entry = entry_of_type(LLMQType::LlmqtypeDevnet);
        let hex_str = hex::encode(entry.to_bytes().unwrap());
        assert_eq!(QuorumEntry::from_hex(&hex_str).unwrap(), entry);
        assert_matches!(
            QuorumEntry::from_hex("not hex"),
            Err(encode::Error::ParseFailed(_))
        );
    }

    #[test]
    fn verified_copy_is_equal() {
        let entry = entry_of_type(LLMQType::Llmqtype400_85);
        assert_eq!(entry.verified_copy().expect("self-consistent"), entry);
    }

    #[test]
    fn commitment_payload_size() {
        let payload = QuorumCommitmentPayload {
            version: 1,
            height: 1_432_800,
            finalization_commitment: entry_of_type(LLMQType::LlmqtypeTest),
        };
        let encoded = serialize(&payload);
        assert_eq!(encoded.len(), payload.size());
        let decoded: QuorumCommitmentPayload = deserialize(&encoded).expect("round trip");
        assert_eq!(decoded, payload);
    }
}
