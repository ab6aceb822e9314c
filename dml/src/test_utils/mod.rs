//! Deterministic dummy values for tests.
//!
//! Each `dummy` constructor derives every field from a seed string plus the
//! given id, so fixtures are reproducible and distinct ids never collide.

mod blockhash;
mod masternode_list_entry;
mod mn_list_diff;
mod quorum_entry;
