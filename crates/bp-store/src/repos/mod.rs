//! Mutation and query operations.
//!
//! Each module adds methods to `Store` via `impl Store` blocks.

pub mod create;
pub mod delete;
pub mod link;
pub mod query;
pub mod update;
