//! Repository layer: loading and read-only access to record sequences.
//!
//! # Responsibility
//! - Resolve named data sources and load them into typed collections.
//! - Specialize the generic loader per record type by composition.
//!
//! # Invariants
//! - Repositories are fully loaded at construction or not created at all.
//! - Repository APIs never mutate loaded records.

pub mod json_repo;
pub mod lego_set_repo;
pub mod source;
