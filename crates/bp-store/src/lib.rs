//! # bp-store
//!
//! The Blueprint document store: one JSON file per design entity and a
//! relationship graph kept bidirectionally consistent on every mutation.
//!
//! - [`persistence`]: the file layout and the `Persistence` trait
//! - [`index`]: the in-memory cache every read goes through
//! - [`relations`] and [`staging`]: link/unlink, reference checks, and the
//!   copy-on-write overlay mutations are computed in
//! - [`repos`]: create, update, delete, link, and query operations on [`Store`]
//! - [`analytics`]: orphan, gap, coverage, and test-coverage reports
//! - [`journal`]: optional JSONL history of committed mutations

pub mod analytics;
pub mod error;
pub mod index;
pub mod journal;
pub mod persistence;
pub mod relations;
pub mod repos;
pub mod service;
pub mod staging;
pub mod updates;

pub use error::StoreError;
pub use service::Store;
