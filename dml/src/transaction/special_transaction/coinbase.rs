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

//! Dash Coinbase Special Transaction.
//!
//! Each time a block is mined it includes a coinbase special transaction.
//! It is defined in DIP4 [dip-0004](https://github.com/dashpay/dips/blob/master/dip-0004.md).
//!

use hashes::Hash;

use crate::consensus::{encode, Decodable, Encodable};
use crate::hash_types::{MerkleRootMasternodeList, MerkleRootQuorums};
use crate::io;

/// A Coinbase payload. This is contained as the payload of a coinbase special
/// transaction. The Coinbase payload is described in DIP4.
///
/// It commits the block's height and the merkle roots of the masternode and
/// quorum lists active at that height; a masternode list diff carries one to
/// declare which height it ends at.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct CoinbasePayload {
    pub version: u16,
    pub height: u32,
    pub merkle_root_masternode_list: MerkleRootMasternodeList,
    pub merkle_root_quorums: MerkleRootQuorums,
}

impl CoinbasePayload {
    /// The size of the payload in bytes.
    /// version(2) + height(4) + merkle_root_masternode_list(32);
    /// if version >= 2 also merkle_root_quorums(32).
    pub fn size(&self) -> usize {
        let mut size: usize = 2 + 4 + 32;
        if self.version >= 2 {
            size += 32; // merkle_root_quorums
        }
        size
    }
}

impl Encodable for CoinbasePayload {
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        let mut len = 0;
        len += self.version.consensus_encode(w)?;
        len += self.height.consensus_encode(w)?;
        len += self.merkle_root_masternode_list.consensus_encode(w)?;
        if self.version >= 2 {
            len += self.merkle_root_quorums.consensus_encode(w)?;
        }
        Ok(len)
    }
}

impl Decodable for CoinbasePayload {
    fn consensus_decode<R: io::Read + ?Sized>(r: &mut R) -> Result<Self, encode::Error> {
        let version = u16::consensus_decode(r)?;
        let height = u32::consensus_decode(r)?;
        let merkle_root_masternode_list = MerkleRootMasternodeList::consensus_decode(r)?;
        let merkle_root_quorums = if version >= 2 {
            MerkleRootQuorums::consensus_decode(r)?
        } else {
            MerkleRootQuorums::all_zeros()
        };
        Ok(CoinbasePayload { version, height, merkle_root_masternode_list, merkle_root_quorums })
    }
}
