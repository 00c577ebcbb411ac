//! Read-only data access over the Brickset LEGO set export.
//! A generic JSON repository loads typed records once; specialized
//! repositories answer domain questions with pure query operations.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LogConfig, LoggingError,
};
pub use model::lego_set::{Dimension, Dimensions, LegoSet, SetNumber};
pub use query::{Extremum, QueryError, QueryResult};
pub use repo::json_repo::{JsonRepository, RepoError, RepoResult, Repository};
pub use repo::lego_set_repo::{LegoSetRepository, BRICKSET_SOURCE};
pub use repo::source::{ResourceLocator, BUNDLED_RESOURCES_DIR};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
