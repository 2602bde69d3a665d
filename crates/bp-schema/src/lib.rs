//! # bp-schema
//!
//! Structural validation for Blueprint documents.
//!
//! This crate provides:
//! - `SchemaRegistry`: JSON Schemas for every entity kind, generated from the
//!   `bp-core` document structs, plus `validate_entity` which turns raw JSON
//!   into a typed `Entity` or a field-level error
//! - ID syntax rules per kind (`ids`)
//!
//! The store calls into this crate before accepting any input; it never
//! second-guesses field shapes itself, only reference existence.

pub mod error;
pub mod ids;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
