//! Error types emitted by the Bookscout CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers all return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

use bookscout_data::{ReportError, TableError};

/// Errors emitted by the Bookscout CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag name of the offending option.
        field: &'static str,
        /// The path that failed validation.
        path: Utf8PathBuf,
    },
    /// Loading an input table failed.
    #[error(transparent)]
    Load(#[from] TableError),
    /// Writing a report artefact failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}
