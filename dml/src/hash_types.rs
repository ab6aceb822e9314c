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

//! Dash hash types.
//!
//! Newtypes over `sha256d` so the different 32-byte digests flowing through
//! the masternode list cannot be confused with one another.

use hashes::{hash_newtype, sha256d, Hash};

use crate::internal_macros::impl_hashencode;

hash_newtype! {
    /// A dash block hash.
    pub struct BlockHash(sha256d::Hash);
    /// The hash of the provider registration transaction that announced a
    /// masternode.
    pub struct ProTxHash(sha256d::Hash);
    /// Hash of the block that buried a masternode registration deep enough to
    /// count as confirmed. All zeros while unconfirmed.
    pub struct ConfirmedHash(sha256d::Hash);
    /// `sha256d(pro_reg_tx_hash || confirmed_hash)`, the per-masternode seed
    /// of quorum scoring.
    pub struct ConfirmedHashHashedWithProRegTx(sha256d::Hash);
    /// The block hash anchoring a quorum; doubles as the quorum identifier.
    pub struct QuorumHash(sha256d::Hash);
    /// Hash of a quorum's public verification vector.
    pub struct QuorumVVecHash(sha256d::Hash);
    /// Identity hash of a full quorum entry, in display byte order.
    pub struct QuorumEntryHash(sha256d::Hash);
    /// Hash over the fields quorum members agree on and sign.
    pub struct QuorumCommitmentHash(sha256d::Hash);
    /// Seed hash under which masternodes are ranked for quorum membership.
    pub struct QuorumModifierHash(sha256d::Hash);
    /// Per-request hash ranking candidate quorums for a signing request.
    pub struct QuorumOrderingHash(sha256d::Hash);
    /// A masternode's rank under one quorum modifier.
    pub struct ScoreHash(sha256d::Hash);
    /// Root of the masternode-list merkle tree.
    pub struct MerkleRootMasternodeList(sha256d::Hash);
    /// Root of the quorum-list merkle tree.
    pub struct MerkleRootQuorums(sha256d::Hash);
}

impl_hashencode!(BlockHash);
impl_hashencode!(ProTxHash);
impl_hashencode!(ConfirmedHash);
impl_hashencode!(QuorumHash);
impl_hashencode!(QuorumVVecHash);
impl_hashencode!(MerkleRootMasternodeList);
impl_hashencode!(MerkleRootQuorums);

impl ScoreHash {
    /// Ranks one masternode under a quorum modifier.
    pub fn create_score(
        confirmed_hash_hashed_with_pro_reg_tx: ConfirmedHashHashedWithProRegTx,
        modifier: QuorumModifierHash,
    ) -> Self {
        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(&confirmed_hash_hashed_with_pro_reg_tx.to_byte_array());
        buf.extend_from_slice(&modifier.to_byte_array());
        ScoreHash::hash(&buf)
    }
}
