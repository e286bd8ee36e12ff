//! Command-line interface for the Bookscout recommender.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;
use recommend::RecommendArgs;

pub(crate) const ARG_BOOKS: &str = "books";
pub(crate) const ARG_CANDIDATES: &str = "candidates";
pub(crate) const ARG_USERS: &str = "users";
pub(crate) const ARG_RATINGS: &str = "ratings";
pub(crate) const ARG_OUTPUT_DIR: &str = "output-dir";
pub(crate) const ENV_BOOKS: &str = "BOOKSCOUT_CMDS_RECOMMEND_BOOKS";
pub(crate) const ENV_CANDIDATES: &str = "BOOKSCOUT_CMDS_RECOMMEND_CANDIDATES";
pub(crate) const ENV_USERS: &str = "BOOKSCOUT_CMDS_RECOMMEND_USERS";
pub(crate) const ENV_RATINGS: &str = "BOOKSCOUT_CMDS_RECOMMEND_RATINGS";

/// Run the Bookscout CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, table
/// loading, or report persistence fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "bookscout",
    about = "Offline content-based book recommendations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend books for a random sample of users.
    Recommend(RecommendArgs),
}
