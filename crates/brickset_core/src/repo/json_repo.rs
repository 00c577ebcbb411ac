//! Generic read-only repository backed by a JSON array.
//!
//! # Responsibility
//! - Load one named JSON source into an ordered, typed in-memory sequence.
//! - Expose read-only access to that sequence through [`Repository`].
//!
//! # Invariants
//! - Loading is all-or-nothing: a `JsonRepository` only exists after the
//!   whole source was read and every element deserialized.
//! - The stored sequence is never mutated after load; callers only ever
//!   receive shared borrows.
//! - Record order matches source order.

use crate::repo::source::ResourceLocator;
use log::{error, info};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Construction-time repository error.
///
/// `InvalidSourceName` and `Unreadable` mean the data source could not be
/// located or read; `Deserialization` means the content is not a JSON array
/// of the expected record shape.
#[derive(Debug)]
pub enum RepoError {
    InvalidSourceName(String),
    Unreadable {
        name: String,
        path: PathBuf,
        error: std::io::Error,
    },
    Deserialization {
        name: String,
        error: serde_json::Error,
    },
}

impl RepoError {
    /// Returns whether the source itself could not be located or read.
    pub fn is_data_source(&self) -> bool {
        matches!(self, Self::InvalidSourceName(_) | Self::Unreadable { .. })
    }

    /// Returns whether the source was read but its content did not parse.
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Self::Deserialization { .. })
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSourceName(_) => "invalid_source_name",
            Self::Unreadable { .. } => "source_unreadable",
            Self::Deserialization { .. } => "deserialization_failed",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSourceName(message) => write!(f, "invalid data source name: {message}"),
            Self::Unreadable { name, path, error } => write!(
                f,
                "data source `{name}` cannot be read from `{}`: {error}",
                path.display()
            ),
            Self::Deserialization { name, error } => {
                write!(f, "data source `{name}` is not a valid record array: {error}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSourceName(_) => None,
            Self::Unreadable { error, .. } => Some(error),
            Self::Deserialization { error, .. } => Some(error),
        }
    }
}

/// Read-only access to an in-memory record sequence.
pub trait Repository<T> {
    /// Returns every record in source order.
    fn get_all(&self) -> &[T];

    /// Returns the first record matching `predicate`.
    fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.get_all().iter().find(|record| predicate(*record))
    }

    /// Returns every record matching `predicate`, in source order.
    fn filter<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.get_all()
            .iter()
            .filter(|record| predicate(*record))
            .collect()
    }

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}

/// Repository holding records deserialized from one JSON array source.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRepository<T> {
    source_name: String,
    records: Vec<T>,
}

impl<T: DeserializeOwned> JsonRepository<T> {
    /// Resolves `name` through `locator` and loads the whole file.
    ///
    /// # Side effects
    /// - Reads the file synchronously.
    /// - Emits `repo_load` logging events with record count and duration.
    ///
    /// # Errors
    /// - `InvalidSourceName` / `Unreadable` when the source cannot be located
    ///   or read.
    /// - `Deserialization` when the content is not a JSON array of `T`.
    pub fn open(locator: &ResourceLocator, name: &str) -> RepoResult<Self> {
        let started_at = Instant::now();
        info!("event=repo_load module=repo status=start source={name}");

        let result = locator.resolve(name).and_then(|path| {
            let bytes = std::fs::read(&path).map_err(|error| RepoError::Unreadable {
                name: name.to_string(),
                path,
                error,
            })?;
            Self::parse(name, &bytes)
        });

        match result {
            Ok(repo) => {
                info!(
                    "event=repo_load module=repo status=ok source={} records={} duration_ms={}",
                    name,
                    repo.records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(repo)
            }
            Err(err) => {
                error!(
                    "event=repo_load module=repo status=error source={} duration_ms={} error_code={} error={}",
                    name,
                    started_at.elapsed().as_millis(),
                    err.error_code(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Parses already-loaded JSON text. `name` only labels errors.
    ///
    /// # Errors
    /// - `Deserialization` when `json` is not a JSON array of `T`.
    pub fn from_json_str(name: &str, json: &str) -> RepoResult<Self> {
        Self::parse(name, json.as_bytes())
    }

    /// Encoding errors surface as `Deserialization`, not as read failures.
    fn parse(name: &str, json: &[u8]) -> RepoResult<Self> {
        let records =
            serde_json::from_slice::<Vec<T>>(json).map_err(|error| RepoError::Deserialization {
                name: name.to_string(),
                error,
            })?;

        Ok(Self {
            source_name: name.to_string(),
            records,
        })
    }
}

impl<T> JsonRepository<T> {
    /// Wraps records that were produced elsewhere.
    pub fn from_records(name: impl Into<String>, records: Vec<T>) -> Self {
        Self {
            source_name: name.into(),
            records,
        }
    }

    /// Name this repository was loaded from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl<T> Repository<T> for JsonRepository<T> {
    fn get_all(&self) -> &[T] {
        &self.records
    }
}
