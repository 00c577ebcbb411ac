//! Query shapes over in-memory record sequences.
//!
//! # Responsibility
//! - Expose generic, pure query operations used by specialized repositories.
//! - Define the query-time error surface.
//!
//! # Invariants
//! - Query errors are recoverable and returned to the immediate caller.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod ops;

pub use ops::{
    count_with_member, distinct_formatted, find_extremum, find_extremum_present, group_by_key,
    join_projected, sorted_projection, Extremum,
};

/// Result type for query APIs.
pub type QueryResult<T> = Result<T, QueryError>;

/// Query-time error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query needs at least one eligible record and found none.
    EmptyCollection { query: &'static str },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection { query } => {
                write!(f, "query `{query}` found no eligible records")
            }
        }
    }
}

impl Error for QueryError {}
