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

//! Internal macros.
//!
//! Macros meant to be used inside the crate and not imported by users.

/// Implements `Encodable` and `Decodable` for a struct by encoding and
/// decoding its fields in the order they are listed. The field order is the
/// wire order.
macro_rules! impl_consensus_encoding {
    ($thing:ident, $($field:ident),+ $(,)?) => (
        impl $crate::consensus::Encodable for $thing {
            #[inline]
            fn consensus_encode<W: std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, std::io::Error> {
                let mut len = 0;
                $(len += self.$field.consensus_encode(w)?;)+
                Ok(len)
            }
        }

        impl $crate::consensus::Decodable for $thing {
            #[inline]
            fn consensus_decode<R: std::io::Read + ?Sized>(
                r: &mut R,
            ) -> Result<$thing, $crate::consensus::encode::Error> {
                Ok($thing {
                    $($field: $crate::consensus::Decodable::consensus_decode(r)?,)+
                })
            }
        }
    );
}
pub(crate) use impl_consensus_encoding;

/// Implements the consensus codec for a `hash_newtype!` type as its raw
/// 32-byte array, in the internal (non-display) byte order.
macro_rules! impl_hashencode {
    ($hashtype:ident) => {
        impl $crate::consensus::Encodable for $hashtype {
            fn consensus_encode<W: std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, std::io::Error> {
                $crate::consensus::Encodable::consensus_encode(
                    &$crate::hashes::Hash::to_byte_array(*self),
                    w,
                )
            }
        }

        impl $crate::consensus::Decodable for $hashtype {
            fn consensus_decode<R: std::io::Read + ?Sized>(
                r: &mut R,
            ) -> Result<Self, $crate::consensus::encode::Error> {
                let bytes = <<$hashtype as $crate::hashes::Hash>::Bytes as $crate::consensus::Decodable>::consensus_decode(r)?;
                Ok(<$hashtype as $crate::hashes::Hash>::from_byte_array(bytes))
            }
        }
    };
}
pub(crate) use impl_hashencode;
