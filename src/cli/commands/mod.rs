//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Subcommand;

pub mod distance;
pub mod locations;
pub mod safety;
pub mod similarity;

use crate::app::AppContext;
use crate::cli::colors::{self, ColorSupport};
use crate::core::ParseIssue;
use crate::error::{LgError, Result};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Judge level reports for safety, with the single-removal dampener
    Safety(safety::SafetyArgs),

    /// Total distance between the sorted location columns
    Distance(distance::DistanceArgs),

    /// Frequency-weighted similarity score of the location columns
    Similarity(similarity::SimilarityArgs),

    /// Distance and similarity in one pass
    Locations(locations::LocationsArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Safety(args) => safety::run(ctx, args),
        Commands::Distance(args) => distance::run(ctx, args),
        Commands::Similarity(args) => similarity::run(ctx, args),
        Commands::Locations(args) => locations::run(ctx, args),
    }
}

/// Print skipped-line notices ahead of a human-format result block.
pub(crate) fn print_issues(issues: &[ParseIssue], support: ColorSupport) {
    for issue in issues {
        println!(
            "{}",
            colors::dim(
                &format!(
                    "line {:<4} skipped   \"{}\": {}",
                    issue.line, issue.token, issue.message
                ),
                support,
            )
        );
    }
    if !issues.is_empty() {
        println!();
    }
}

/// Resolve the input path (argument wins over config) and open it.
pub(crate) fn open_input(
    ctx: &AppContext,
    file: Option<&Path>,
) -> Result<(PathBuf, BufReader<File>)> {
    let path = file.map_or_else(|| ctx.config.input.path.clone(), Path::to_path_buf);
    let handle = File::open(&path).map_err(|source| LgError::InputFile {
        path: path.clone(),
        source,
    })?;
    Ok((path, BufReader::new(handle)))
}
