//! LEGO set repository and its domain queries.
//!
//! # Responsibility
//! - Load the Brickset export into a generic repository.
//! - Answer LEGO-specific questions (tags, piece counts, box sizes, themes)
//!   by composing the generic query operations.
//!
//! # Invariants
//! - Queries only read the wrapped repository; nothing is cached or mutated.
//! - Sets without tags or dimensions are skipped, never treated as errors.

use crate::model::lego_set::{Dimension, LegoSet, SetNumber};
use crate::query::{
    count_with_member, distinct_formatted, find_extremum, find_extremum_present, group_by_key,
    join_projected, sorted_projection, Extremum, QueryResult,
};
use crate::repo::json_repo::{JsonRepository, RepoResult, Repository};
use crate::repo::source::ResourceLocator;
use std::collections::BTreeMap;

/// Source name of the Brickset export.
pub const BRICKSET_SOURCE: &str = "brickset.json";

const PIECE_COUNT_DELIMITER: &str = ", ";

/// Read-only LEGO set repository.
///
/// Generic over the backing store so tests and callers can supply any
/// [`Repository<LegoSet>`]; the default is the JSON-backed loader.
#[derive(Debug, Clone)]
pub struct LegoSetRepository<R = JsonRepository<LegoSet>> {
    repo: R,
}

impl LegoSetRepository<JsonRepository<LegoSet>> {
    /// Loads `brickset.json` through `locator`.
    ///
    /// # Errors
    /// - Returns repository construction errors unchanged.
    pub fn open(locator: &ResourceLocator) -> RepoResult<Self> {
        JsonRepository::open(locator, BRICKSET_SOURCE).map(Self::with_repository)
    }

    /// Loads the Brickset export bundled with this crate.
    pub fn open_default() -> RepoResult<Self> {
        Self::open(&ResourceLocator::bundled())
    }
}

impl<R: Repository<LegoSet>> LegoSetRepository<R> {
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every set in source order.
    pub fn get_all(&self) -> &[LegoSet] {
        self.repo.get_all()
    }

    pub fn find_by_number(&self, number: &SetNumber) -> Option<&LegoSet> {
        self.repo.find(|set| &set.number == number)
    }

    /// Returns the number of sets carrying `tag`.
    pub fn count_lego_sets_with_tag(&self, tag: &str) -> usize {
        count_with_member(self.get_all(), tag, |set| set.tags.as_deref())
    }

    /// Returns the set with the most pieces; the first one wins a tie.
    ///
    /// # Errors
    /// - `QueryError::EmptyCollection` when the repository holds no sets.
    pub fn lego_set_with_most_pieces(&self) -> QueryResult<&LegoSet> {
        find_extremum(self.get_all(), Extremum::Max, "most_pieces", |set| set.pieces)
    }

    /// Returns the name of the set with the most pieces.
    pub fn name_of_lego_set_with_most_pieces(&self) -> QueryResult<&str> {
        self.lego_set_with_most_pieces().map(|set| set.name.as_str())
    }

    /// Returns the set with the fewest pieces; the first one wins a tie.
    pub fn lego_set_with_fewest_pieces(&self) -> QueryResult<&LegoSet> {
        find_extremum(self.get_all(), Extremum::Min, "fewest_pieces", |set| set.pieces)
    }

    /// Returns the set with the largest measurement along `dimension`.
    ///
    /// Sets missing dimensions, or missing that one axis, are ignored.
    ///
    /// # Errors
    /// - `QueryError::EmptyCollection` when no set records that axis.
    pub fn lego_set_with_largest(&self, dimension: Dimension) -> QueryResult<&LegoSet> {
        find_extremum_present(
            self.get_all(),
            Extremum::Max,
            largest_query_name(dimension),
            |set| set.dimension(dimension),
        )
    }

    /// Returns the set with the smallest measurement along `dimension`.
    pub fn lego_set_with_smallest(&self, dimension: Dimension) -> QueryResult<&LegoSet> {
        find_extremum_present(
            self.get_all(),
            Extremum::Min,
            smallest_query_name(dimension),
            |set| set.dimension(dimension),
        )
    }

    /// Joins the piece counts of every set in `theme`, e.g. `"2, 7"`.
    pub fn piece_counts_for_theme(&self, theme: &str) -> String {
        join_projected(
            self.get_all(),
            |set| set.theme == theme,
            |set| set.pieces,
            PIECE_COUNT_DELIMITER,
        )
    }

    /// Yields every set name in ascending order.
    pub fn sorted_names(&self) -> impl Iterator<Item = &str> + '_ {
        sorted_projection(self.get_all(), |set| set.name.as_str())
    }

    /// Yields one display line per distinct set, in first-seen order.
    pub fn distinct_listing(&self) -> impl Iterator<Item = String> + '_ {
        distinct_formatted(self.get_all(), format_listing_line)
    }

    /// Groups set names by theme; names keep source order within a theme.
    pub fn names_by_theme(&self) -> BTreeMap<&str, Vec<&str>> {
        group_by_key(
            self.get_all(),
            |set| set.theme.as_str(),
            |set| set.name.as_str(),
        )
    }

    /// Returns the distinct theme labels in ascending order.
    pub fn themes(&self) -> Vec<&str> {
        self.names_by_theme().into_keys().collect()
    }
}

fn format_listing_line(set: &LegoSet) -> String {
    format!(
        "{} {} ({}, {} pieces)",
        set.number, set.name, set.theme, set.pieces
    )
}

fn largest_query_name(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Width => "largest_width",
        Dimension::Height => "largest_height",
        Dimension::Depth => "largest_depth",
    }
}

fn smallest_query_name(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Width => "smallest_width",
        Dimension::Height => "smallest_height",
        Dimension::Depth => "smallest_depth",
    }
}

#[cfg(test)]
mod tests {
    use super::format_listing_line;
    use crate::model::lego_set::LegoSet;

    #[test]
    fn listing_line_includes_number_name_theme_and_pieces() {
        let set = LegoSet::new("10179-1", "Millennium Falcon", 5195, "Star Wars");
        assert_eq!(
            format_listing_line(&set),
            "10179-1 Millennium Falcon (Star Wars, 5195 pieces)"
        );
    }

    #[test]
    fn listing_line_renders_numeric_set_numbers() {
        let set = LegoSet::new(75192_u64, "Millennium Falcon", 7541, "Star Wars");
        assert!(format_listing_line(&set).starts_with("75192 "));
    }
}
