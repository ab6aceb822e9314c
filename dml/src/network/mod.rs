//! Dash network types.
//!
//! The chain a store operates on decides which genesis block hash, alongside
//! the all-zero null hash, marks a masternode list diff as a base diff.

pub mod message_sml;

use std::fmt;
use std::str::FromStr;

use hashes::Hash;
use thiserror::Error;

use crate::hash_types::BlockHash;

/// The cryptocurrency network to act on.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde", rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Network {
    /// Classic Dash Core Payment Chain
    Dash,
    /// Dash's testnet network.
    Testnet,
    /// Dash's devnet network.
    Devnet,
    /// Dash's regtest network.
    Regtest,
}

impl Network {
    /// Creates a `Network` from the magic bytes.
    pub fn from_magic(magic: u32) -> Option<Network> {
        // Note: any new entries here must be added to `magic` below
        match magic {
            0xBD6B0CBF => Some(Network::Dash),
            0xFFCAE2CE => Some(Network::Testnet),
            0xCEFFCAE2 => Some(Network::Devnet),
            0xDAB5BFFA => Some(Network::Regtest),
            _ => None,
        }
    }

    /// Return the network magic bytes, which should be encoded little-endian
    /// at the start of every message
    pub fn magic(self) -> u32 {
        // Note: any new entries here must be added to `from_magic` above
        match self {
            Network::Dash => 0xBD6B0CBF,
            Network::Testnet => 0xFFCAE2CE,
            Network::Devnet => 0xCEFFCAE2,
            Network::Regtest => 0xDAB5BFFA,
        }
    }

    /// The known dash genesis block hash, where one exists. Devnets mine
    /// their own genesis, so none is known up front.
    pub fn known_genesis_block_hash(self) -> Option<BlockHash> {
        match self {
            Network::Dash => {
                let mut block_hash =
                    hex::decode("00000ffd590b1485b3caadc19b22e6379c733355108f107a430458cdf3407ab6")
                        .expect("expected valid hex");
                block_hash.reverse();
                Some(BlockHash::from_byte_array(block_hash.try_into().expect("expected 32 bytes")))
            }
            Network::Testnet => {
                let mut block_hash =
                    hex::decode("00000bafbc94add76cb75e2ec92894837288a481e5c005f6563d91623bf8bc2c")
                        .expect("expected valid hex");
                block_hash.reverse();
                Some(BlockHash::from_byte_array(block_hash.try_into().expect("expected 32 bytes")))
            }
            Network::Devnet => None,
            Network::Regtest => {
                let mut block_hash =
                    hex::decode("000008ca1832a4baf228eb1553c03d3a2c8e02399550dd6ea8d65cec3ef23d2e")
                        .expect("expected valid hex");
                block_hash.reverse();
                Some(BlockHash::from_byte_array(block_hash.try_into().expect("expected 32 bytes")))
            }
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            Network::Dash => "dash",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Regtest => "regtest",
        };
        f.write_str(s)
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse {0} as network")]
pub struct ParseNetworkError(String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dash" => Ok(Network::Dash),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ParseNetworkError(s.to_owned())),
        }
    }
}
