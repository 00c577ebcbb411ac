//! CLI entry point for Brickset queries.
//!
//! # Responsibility
//! - Load the Brickset export and print a fixed set of query answers.
//! - Own all console formatting; the core only returns values.
//!
//! Usage: `brickset_cli [RESOURCE_DIR] [LOG_DIR]`. Without arguments the
//! export bundled with `brickset_core` is used and logs go to
//! `<temp>/brickset-logs`.

use brickset_core::{
    init_logging_with, Dimension, LegoSetRepository, LogConfig, QueryResult, ResourceLocator,
};
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

const SAMPLE_TAG: &str = "Microscale";
const SAMPLE_THEME: &str = "Duplo";
const DEFAULT_LOG_DIR_NAME: &str = "brickset-logs";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let locator = args
        .next()
        .map(ResourceLocator::new)
        .unwrap_or_else(ResourceLocator::bundled);
    let log_dir = log_dir_from(args.next());

    // Logging is best effort; queries still run without it.
    if let Err(err) = LogConfig::with_default_level(&log_dir).and_then(init_logging_with) {
        eprintln!("brickset: logging disabled: {err}");
    }

    let repository = match LegoSetRepository::open(&locator) {
        Ok(repository) => repository,
        Err(err) => {
            eprintln!("brickset: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("brickset_core version={}", brickset_core::core_version());
    println!(
        "sets tagged {SAMPLE_TAG}: {}",
        repository.count_lego_sets_with_tag(SAMPLE_TAG)
    );
    print_answer(
        "set with most pieces",
        repository.name_of_lego_set_with_most_pieces(),
    );
    print_answer(
        "set with fewest pieces",
        repository
            .lego_set_with_fewest_pieces()
            .map(|set| set.name.as_str()),
    );
    print_answer(
        "widest box",
        repository
            .lego_set_with_largest(Dimension::Width)
            .map(|set| set.name.as_str()),
    );
    println!(
        "{SAMPLE_THEME} piece counts: {}",
        repository.piece_counts_for_theme(SAMPLE_THEME)
    );

    println!("names:");
    for name in repository.sorted_names() {
        println!("  {name}");
    }

    println!("sets:");
    for line in repository.distinct_listing() {
        println!("  {line}");
    }

    println!("themes:");
    for (theme, names) in repository.names_by_theme() {
        println!("  {theme}: {}", names.join(", "));
    }

    ExitCode::SUCCESS
}

/// Explicit argument wins; otherwise a directory under the system temp dir,
/// which is absolute as the logger requires.
fn log_dir_from(arg: Option<String>) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME))
}

fn print_answer<T: Display>(label: &str, answer: QueryResult<T>) {
    match answer {
        Ok(value) => println!("{label}: {value}"),
        Err(err) => println!("{label}: n/a ({err})"),
    }
}
