//! LEGO set record model.
//!
//! # Responsibility
//! - Define the record shape deserialized from the Brickset JSON export.
//! - Keep optional fields optional so absence is never an error.
//!
//! # Invariants
//! - A missing key and an explicit `null` both deserialize to `None`.
//! - `tags: None` (absent) is distinct from `tags: Some(vec![])` (empty).
//! - Records are plain values: equality compares every field.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifying set number as published by Brickset.
///
/// Sources mix textual numbers (`"10179-1"`) and bare integers (`75192`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetNumber {
    Numeric(u64),
    Text(String),
}

impl Display for SetNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for SetNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for SetNumber {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

/// One box measurement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
    Depth,
}

/// Box dimensions. Brickset leaves any axis blank when unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub depth: Option<f64>,
}

impl Dimensions {
    /// Returns the measurement for one axis, `None` when not recorded.
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
            Dimension::Depth => self.depth,
        }
    }
}

/// One LEGO set description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegoSet {
    pub number: SetNumber,
    pub name: String,
    /// Piece count. Older exports call this `pieceCount`.
    #[serde(alias = "pieceCount")]
    pub pieces: u32,
    /// Category label. Missing key reads as an empty label.
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub subtheme: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub url: Option<String>,
}

impl LegoSet {
    /// Creates a set with only the required fields; optional ones start empty.
    pub fn new(
        number: impl Into<SetNumber>,
        name: impl Into<String>,
        pieces: u32,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            pieces,
            theme: theme.into(),
            subtheme: None,
            year: None,
            tags: None,
            dimensions: None,
            url: None,
        }
    }

    /// Returns whether this set carries `tag`. Untagged sets never match.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// Returns one box measurement when both the dimensions and the axis exist.
    pub fn dimension(&self, dimension: Dimension) -> Option<f64> {
        self.dimensions.and_then(|dims| dims.get(dimension))
    }
}
