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

//! BLS public keys and signatures.
//!
//! Carried as opaque fixed-size blobs: this crate commits to them and moves
//! them around but never evaluates them cryptographically.

use std::fmt;
use std::io;
use std::str::FromStr;

use thiserror::Error;

use crate::consensus::{encode, Decodable, Encodable};

/// Failure to parse a BLS blob from its hex form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BLSParseError {
    /// The string was not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// The decoded byte run had the wrong length.
    #[error("invalid length {found}, expected {expected} bytes")]
    InvalidLength {
        /// Bytes the string decoded to.
        found: usize,
        /// Bytes the type requires.
        expected: usize,
    },
}

macro_rules! impl_bls_bytes {
    ($name:ident, $len:literal, $docstring:literal) => {
        #[doc = $docstring]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            /// The blob as a byte slice.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// The blob as a byte array.
            pub fn to_bytes(self) -> [u8; $len] {
                self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self)
            }
        }

        impl FromStr for $name {
            type Err = BLSParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bytes = hex::decode(s)?;
                let bytes: [u8; $len] = bytes.try_into().map_err(|bytes: Vec<u8>| {
                    BLSParseError::InvalidLength { found: bytes.len(), expected: $len }
                })?;
                Ok($name(bytes))
            }
        }

        impl Encodable for $name {
            fn consensus_encode<W: io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, io::Error> {
                self.0.consensus_encode(w)
            }
        }

        impl Decodable for $name {
            fn consensus_decode<R: io::Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
                Ok($name(<[u8; $len]>::consensus_decode(r)?))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                use serde::de::Error;
                let s: String = serde::Deserialize::deserialize(d)?;
                s.parse().map_err(D::Error::custom)
            }
        }
    };
}

impl_bls_bytes!(BLSPublicKey, 48, "A 48-byte BLS public key, kept opaque.");
impl_bls_bytes!(BLSSignature, 96, "A 96-byte BLS signature, kept opaque.");

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::consensus::{deserialize, serialize};

    #[test]
    fn public_key_hex_round_trip() {
        let key = BLSPublicKey::from([0xAB; 48]);
        let hex_str = key.to_string();
        assert_eq!(hex_str.len(), 96);
        assert_eq!(hex_str.parse::<BLSPublicKey>().unwrap(), key);
    }

    #[test]
    fn wrong_length_rejected() {
        assert_matches!(
            "abcd".parse::<BLSPublicKey>(),
            Err(BLSParseError::InvalidLength { found: 2, expected: 48 })
        );
        assert_matches!(
            "zz".repeat(48).parse::<BLSPublicKey>(),
            Err(BLSParseError::InvalidHex(_))
        );
    }

    #[test]
    fn signature_consensus_round_trip() {
        let sig = BLSSignature::from([0x17; 96]);
        let encoded = serialize(&sig);
        assert_eq!(encoded.len(), 96);
        assert_eq!(deserialize::<BLSSignature>(&encoded).unwrap(), sig);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_hex_string() {
        let key = BLSPublicKey::from([0x01; 48]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", key));
        let back: BLSPublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
