//! Record model for Brickset data.
//!
//! # Responsibility
//! - Define plain data structures loaded by the repository layer.
//! - Keep field access free of behavior beyond simple derived helpers.
//!
//! # Invariants
//! - Records are never mutated after load.
//! - Optional source fields stay `Option` all the way to query code.

pub mod lego_set;
