//! Recommend command implementation for the Bookscout CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use bookscout_core::StopWords;
use bookscout_data::{ReportWriter, load_tables, sample_users};
use bookscout_scorer::{SessionConfig, run_session};

use crate::{
    ARG_BOOKS, ARG_CANDIDATES, ARG_OUTPUT_DIR, ARG_RATINGS, ARG_USERS, CliError, ENV_BOOKS,
    ENV_CANDIDATES, ENV_RATINGS, ENV_USERS,
};

const DEFAULT_SAMPLE_SIZE: usize = 5;
const DEFAULT_SEED: u64 = 42;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend books for a random sample of users. The four \
                 input tables are `;`-delimited CSV files; paths can come \
                 from CLI flags, configuration files, or environment \
                 variables. Each sampled user produces ranked result tables \
                 and agreement summaries in the output directory.",
    about = "Recommend books for a sample of users"
)]
#[ortho_config(prefix = "BOOKSCOUT")]
pub(crate) struct RecommendArgs {
    /// Path to the full book catalog table.
    #[arg(long = ARG_BOOKS, value_name = "path")]
    #[serde(default)]
    pub(crate) books: Option<Utf8PathBuf>,
    /// Path to the filtered candidate catalog table.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Path to the user table.
    #[arg(long = ARG_USERS, value_name = "path")]
    #[serde(default)]
    pub(crate) users: Option<Utf8PathBuf>,
    /// Path to the ratings table.
    #[arg(long = ARG_RATINGS, value_name = "path")]
    #[serde(default)]
    pub(crate) ratings: Option<Utf8PathBuf>,
    /// Directory receiving the per-user result files.
    #[arg(long = ARG_OUTPUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) output_dir: Option<Utf8PathBuf>,
    /// How many users to sample.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) sample_size: Option<usize>,
    /// Seed for the deterministic user sampler.
    #[arg(long, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Full catalog table path.
    pub(crate) books: Utf8PathBuf,
    /// Candidate catalog table path.
    pub(crate) candidates: Utf8PathBuf,
    /// User table path.
    pub(crate) users: Utf8PathBuf,
    /// Ratings table path.
    pub(crate) ratings: Utf8PathBuf,
    /// Output directory for per-user artefacts.
    pub(crate) output_dir: Utf8PathBuf,
    /// Number of users to sample.
    pub(crate) sample_size: usize,
    /// Sampler seed.
    pub(crate) seed: u64,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.books, ARG_BOOKS)?;
        Self::require_existing(&self.candidates, ARG_CANDIDATES)?;
        Self::require_existing(&self.users, ARG_USERS)?;
        Self::require_existing(&self.ratings, ARG_RATINGS)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        if path.as_std_path().is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let books = args.books.ok_or(CliError::MissingArgument {
            field: ARG_BOOKS,
            env: ENV_BOOKS,
        })?;
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_CANDIDATES,
        })?;
        let users = args.users.ok_or(CliError::MissingArgument {
            field: ARG_USERS,
            env: ENV_USERS,
        })?;
        let ratings = args.ratings.ok_or(CliError::MissingArgument {
            field: ARG_RATINGS,
            env: ENV_RATINGS,
        })?;
        Ok(Self {
            books,
            candidates,
            users,
            ratings,
            output_dir: args.output_dir.unwrap_or_else(|| Utf8PathBuf::from(".")),
            sample_size: args.sample_size.unwrap_or(DEFAULT_SAMPLE_SIZE),
            seed: args.seed.unwrap_or(DEFAULT_SEED),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    run_with_config(&config)
}

pub(crate) fn run_with_config(config: &RecommendConfig) -> Result<(), CliError> {
    info!("loading input tables");
    let tables = load_tables(
        &config.books,
        &config.candidates,
        &config.users,
        &config.ratings,
    )?;
    info!(
        "loaded {} catalog rows, {} candidates, {} users, {} ratings",
        tables.catalog.len(),
        tables.candidates.len(),
        tables.users.len(),
        tables.ratings.len()
    );

    let sampled = sample_users(&tables.users, config.sample_size, config.seed);
    info!("recommending for {} users", sampled.len());

    let stop_words = StopWords::english();
    let session_config = SessionConfig::default();
    let writer = ReportWriter::new(config.output_dir.clone());

    for (position, user_id) in sampled.iter().enumerate() {
        let index = position + 1;
        match run_session(
            *user_id,
            &tables.catalog,
            &tables.candidates,
            &tables.ratings,
            &stop_words,
            &session_config,
        ) {
            Ok(report) => {
                writer.persist(index, &report)?;
                info!("user {user_id}: wrote result set {index}");
            }
            Err(err) => warn!("skipping user {user_id}: {err}"),
        }
    }

    info!("recommendation complete");
    Ok(())
}
