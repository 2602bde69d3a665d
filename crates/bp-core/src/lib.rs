//! # bp-core
//!
//! Core types for Blueprint, the design-entity document store.
//!
//! This crate provides the foundational types shared across all Blueprint crates:
//! - Entity kinds and status enums
//! - The static relationship catalog (forward/reverse field pairs)
//! - Document structs for every entity kind, plus the `Entity` sum type
//! - Cross-cutting error types
//! - Journal entry envelope for JSONL change history
//! - Report types returned by queries and analytics

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod journal;
pub mod responses;
