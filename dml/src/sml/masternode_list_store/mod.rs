use std::sync::{PoisonError, RwLock};

use hashes::Hash;
use tracing::{debug, trace};

use crate::network::message_sml::MnListDiff;
use crate::network::Network;
use crate::prelude::CoreBlockHeight;
use crate::sml::error::SmlError;
use crate::sml::masternode_list::MasternodeList;
use crate::BlockHash;

/// One stored diff, keyed by the height its coinbase payload declares.
/// Entries keep their arrival order; queries sort by height.
#[derive(Clone, Debug, PartialEq, Eq)]
struct DiffEntry {
    height: CoreBlockHeight,
    diff: MnListDiff,
}

/// The accepted base of a store: the root marker its base diff carried and
/// the list materialized from that diff.
#[derive(Clone, Debug, PartialEq, Eq)]
struct StoreBase {
    base_block_hash: BlockHash,
    first_height: CoreBlockHeight,
    first_masternode_list: MasternodeList,
}

/// A height-indexed store of masternode list diffs anchored to one base
/// list, able to reconstruct the list at any stored height.
///
/// A store becomes usable once a base diff (one rooted at the null hash or
/// the network's genesis block) has been accepted, and it accepts exactly
/// one base over its lifetime. From then on it only grows: diffs are
/// appended in whatever order they arrive, and every query orders them by
/// height at read time, so insertion order never leaks into results.
///
/// Appending and querying may happen concurrently from multiple callers;
/// the diff collection sits behind a lock and queries work on a
/// point-in-time copy of it. Reconstructed lists are derived values, never
/// shared mutable state.
#[derive(Debug)]
pub struct MasternodeListStore {
    /// The chain this store serves; decides which genesis hash, alongside
    /// the null hash, marks a diff as a base diff.
    pub network: Network,
    base: Option<StoreBase>,
    diff_store: RwLock<Vec<DiffEntry>>,
}

impl MasternodeListStore {
    /// An empty store on `network`. Until replaced by one built through
    /// [`MasternodeListStore::from_base_diff`], every operation on it fails
    /// with [`SmlError::StoreNotInitialized`].
    pub fn new(network: Network) -> Self {
        MasternodeListStore { network, base: None, diff_store: RwLock::new(Vec::new()) }
    }

    /// Builds a store from a base diff, materializing the base list directly
    /// from the diff's declared state and recording its height as the floor
    /// of every later query.
    ///
    /// A diff qualifies as a base only when its `base_block_hash` is the
    /// null hash or the network's known genesis hash; anything else fails
    /// with [`SmlError::BaseBlockNotGenesis`].
    pub fn from_base_diff(base_diff: MnListDiff, network: Network) -> Result<Self, SmlError> {
        if !Self::is_base_block_hash(base_diff.base_block_hash, network) {
            return Err(SmlError::BaseBlockNotGenesis(base_diff.base_block_hash, network));
        }

        let first_masternode_list = MasternodeList::from_diff(&base_diff)?;
        let first_height = base_diff.height();
        debug!(
            height = first_height,
            block_hash = %base_diff.block_hash,
            masternodes = first_masternode_list.masternode_count(),
            "accepted base masternode list diff"
        );

        Ok(MasternodeListStore {
            network,
            base: Some(StoreBase {
                base_block_hash: base_diff.base_block_hash,
                first_height,
                first_masternode_list,
            }),
            diff_store: RwLock::new(Vec::new()),
        })
    }

    fn is_base_block_hash(hash: BlockHash, network: Network) -> bool {
        hash == BlockHash::all_zeros() || network.known_genesis_block_hash() == Some(hash)
    }

    fn base(&self) -> Result<&StoreBase, SmlError> {
        self.base.as_ref().ok_or(SmlError::StoreNotInitialized)
    }

    /// Height of the base list, the floor of every reconstruction.
    pub fn first_height(&self) -> Result<CoreBlockHeight, SmlError> {
        Ok(self.base()?.first_height)
    }

    /// The root marker carried by the accepted base diff.
    pub fn base_block_hash(&self) -> Result<BlockHash, SmlError> {
        Ok(self.base()?.base_block_hash)
    }

    /// The base list itself, as materialized from the base diff.
    pub fn first_masternode_list(&self) -> Result<MasternodeList, SmlError> {
        Ok(self.base()?.first_masternode_list.clone())
    }

    /// Number of diffs stored so far, the base diff not included.
    pub fn diff_count(&self) -> usize {
        self.diff_store.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Appends a decoded diff, keyed by the height its coinbase payload
    /// declares.
    ///
    /// Heights may arrive in any order and with gaps; ordering is the
    /// responsibility of the queries. The one thing rejected outright is a
    /// height below the base, which nothing could ever compose onto.
    pub fn add_diff(&self, diff: MnListDiff) -> Result<(), SmlError> {
        let base = self.base()?;
        let height = diff.height();
        if height < base.first_height {
            return Err(SmlError::HeightBeforeBase { height, base_height: base.first_height });
        }

        let mut diff_store = self.diff_store.write().unwrap_or_else(PoisonError::into_inner);
        trace!(height, block_hash = %diff.block_hash, stored = diff_store.len() + 1, "storing masternode list diff");
        diff_store.push(DiffEntry { height, diff });
        Ok(())
    }

    /// The stored diff ending exactly at `height`, if any.
    pub fn diff_at_height(&self, height: CoreBlockHeight) -> Result<Option<MnListDiff>, SmlError> {
        self.base()?;
        let diff_store = self.diff_store.read().unwrap_or_else(PoisonError::into_inner);
        Ok(diff_store.iter().find(|entry| entry.height == height).map(|entry| entry.diff.clone()))
    }

    /// Every stored diff with a height in `[start_height, end_height]`,
    /// sorted ascending by height whatever the arrival order was.
    pub fn diffs_in_range(
        &self,
        start_height: CoreBlockHeight,
        end_height: CoreBlockHeight,
    ) -> Result<Vec<MnListDiff>, SmlError> {
        self.base()?;
        let mut entries: Vec<DiffEntry> = {
            let diff_store = self.diff_store.read().unwrap_or_else(PoisonError::into_inner);
            diff_store
                .iter()
                .filter(|entry| entry.height >= start_height && entry.height <= end_height)
                .cloned()
                .collect()
        };
        entries.sort_by_key(|entry| entry.height);
        Ok(entries.into_iter().map(|entry| entry.diff).collect())
    }

    /// Reconstructs the masternode list at `height`: every stored diff in
    /// `[first_height, height]` is applied in ascending height order onto a
    /// copy of the base list.
    ///
    /// The computation is pure with respect to the store: it works on the
    /// immutable base and a point-in-time copy of the diff collection, so
    /// concurrent appends never corrupt a reconstruction in flight. A diff
    /// that does not extend the running list surfaces as
    /// [`SmlError::DiffChainBroken`], naming the height it happened at.
    pub fn masternode_list_at_height(
        &self,
        height: CoreBlockHeight,
    ) -> Result<MasternodeList, SmlError> {
        let base = self.base()?;
        if height < base.first_height {
            return Err(SmlError::HeightBeforeBase { height, base_height: base.first_height });
        }

        let diffs = self.diffs_in_range(base.first_height, height)?;
        debug!(height, diffs = diffs.len(), "reconstructing masternode list");

        let mut masternode_list = base.first_masternode_list.clone();
        for diff in diffs {
            let diff_height = diff.height();
            masternode_list = masternode_list.apply_diff(&diff).map_err(|source| {
                SmlError::DiffChainBroken { height: diff_height, source: Box::new(source) }
            })?;
        }
        Ok(masternode_list)
    }
}
