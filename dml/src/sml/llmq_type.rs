use std::fmt::{Display, Formatter};
use std::io;

use crate::consensus::{encode, Decodable, Encodable};

/// The parameter profile of one LLMQ quorum type.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Hash, Ord)]
pub struct LLMQParams {
    pub quorum_type: LLMQType,
    pub name: &'static str,
    /// Number of members deterministically selected into the quorum.
    pub size: u32,
    /// Members whose signature shares are needed to recover a threshold
    /// signature.
    pub threshold: u32,
}

pub const LLMQ_50_60: LLMQParams = LLMQParams {
    quorum_type: LLMQType::Llmqtype50_60,
    name: "llmq_50_60",
    size: 50,
    threshold: 30,
};

pub const LLMQ_400_60: LLMQParams = LLMQParams {
    quorum_type: LLMQType::Llmqtype400_60,
    name: "llmq_400_60",
    size: 400,
    threshold: 240,
};

pub const LLMQ_400_85: LLMQParams = LLMQParams {
    quorum_type: LLMQType::Llmqtype400_85,
    name: "llmq_400_85",
    size: 400,
    threshold: 340,
};

pub const LLMQ_TEST: LLMQParams = LLMQParams {
    quorum_type: LLMQType::LlmqtypeTest,
    name: "llmq_test",
    size: 3,
    threshold: 2,
};

pub const LLMQ_DEVNET: LLMQParams = LLMQParams {
    quorum_type: LLMQType::LlmqtypeDevnet,
    name: "llmq_devnet",
    size: 10,
    threshold: 6,
};

/// The enumeration of LLMQ quorum types. Each maps to exactly one member-set
/// size and signing threshold; a type byte outside this table is rejected at
/// decode time, before anything derived from the size (such as a bitset
/// length) is computed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Hash, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub enum LLMQType {
    Llmqtype50_60 = 1,  // 50 members,  30  (60%) threshold, 24 / day
    Llmqtype400_60 = 2, // 400 members, 240 (60%) threshold, 2  / day
    Llmqtype400_85 = 3, // 400 members, 340 (85%) threshold, 1  / day

    // dev-only
    LlmqtypeTest = 100,   // 3 members, 2 (66%) threshold, one per hour
    LlmqtypeDevnet = 101, // 10 members, 6 (60%) threshold, one per hour
}

impl Display for LLMQType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LLMQType::Llmqtype50_60 => "1_50/60",
                LLMQType::Llmqtype400_60 => "2_400/60",
                LLMQType::Llmqtype400_85 => "3_400/85",
                LLMQType::LlmqtypeTest => "100_Test",
                LLMQType::LlmqtypeDevnet => "101_Dev",
            }
        )
    }
}

impl LLMQType {
    pub fn params(&self) -> LLMQParams {
        match self {
            LLMQType::Llmqtype50_60 => LLMQ_50_60,
            LLMQType::Llmqtype400_60 => LLMQ_400_60,
            LLMQType::Llmqtype400_85 => LLMQ_400_85,
            LLMQType::LlmqtypeTest => LLMQ_TEST,
            LLMQType::LlmqtypeDevnet => LLMQ_DEVNET,
        }
    }

    /// Number of members in a quorum of this type.
    pub fn size(&self) -> u32 {
        self.params().size
    }

    /// Signature shares needed to recover a threshold signature.
    pub fn threshold(&self) -> u32 {
        self.params().threshold
    }

    /// Byte length of the signers and valid-members bitsets: one bit per
    /// member index, rounded up to whole bytes.
    pub fn bitset_len(&self) -> usize {
        (self.size() as usize + 7) / 8
    }
}

impl TryFrom<u8> for LLMQType {
    type Error = encode::Error;

    fn try_from(orig: u8) -> Result<Self, Self::Error> {
        match orig {
            1 => Ok(LLMQType::Llmqtype50_60),
            2 => Ok(LLMQType::Llmqtype400_60),
            3 => Ok(LLMQType::Llmqtype400_85),
            100 => Ok(LLMQType::LlmqtypeTest),
            101 => Ok(LLMQType::LlmqtypeDevnet),
            unknown => Err(encode::Error::UnknownQuorumType(unknown)),
        }
    }
}

impl From<LLMQType> for u8 {
    fn from(value: LLMQType) -> Self {
        match value {
            LLMQType::Llmqtype50_60 => 1,
            LLMQType::Llmqtype400_60 => 2,
            LLMQType::Llmqtype400_85 => 3,
            LLMQType::LlmqtypeTest => 100,
            LLMQType::LlmqtypeDevnet => 101,
        }
    }
}

impl Encodable for LLMQType {
    fn consensus_encode<S: io::Write + ?Sized>(&self, mut s: &mut S) -> Result<usize, io::Error> {
        u8::consensus_encode(&u8::from(*self), &mut s)
    }
}

impl Decodable for LLMQType {
    fn consensus_decode<D: io::Read + ?Sized>(mut d: &mut D) -> Result<LLMQType, encode::Error> {
        u8::consensus_decode(&mut d).and_then(LLMQType::try_from)
    }
}
