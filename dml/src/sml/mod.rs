//! The simplified masternode list.
//!
//! Everything needed to materialize the deterministic masternode list at a
//! height: the LLMQ type table, the list entries and their scoring, the list
//! itself with diff application and quorum selection, and the diff store that
//! reconstructs a list at any height from a base list plus stored diffs.

pub mod address;
pub mod error;
pub mod llmq_type;
pub mod masternode_list;
pub mod masternode_list_entry;
pub mod masternode_list_store;
pub mod quorum_entry;
pub mod quorum_validation_error;
