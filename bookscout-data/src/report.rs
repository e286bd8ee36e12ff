//! Per-user report persistence.
//!
//! Each sampled user produces five artefacts in the output directory: the
//! two ranked CSV tables, the golden-standard CSV table, and two plain-text
//! agreement summaries. File names carry the 1-based sample index, and the
//! column headers reproduce the historical output format verbatim
//! (including the `Occurences` spelling).

use std::io::Write;

use camino::Utf8PathBuf;
use thiserror::Error;

use bookscout_scorer::{GoldenEntry, ScoredCandidate, UserReport};

use crate::fs::create_report_file;

/// Errors raised while writing report artefacts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Creating the output file (or its parent directory) failed.
    #[error("failed to create report file at {path}")]
    Create {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Encoding a CSV record failed.
    #[error("failed to encode a record into {path}")]
    Encode {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// Writing the file contents failed.
    #[error("failed to write report file at {path}")]
    Write {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

/// Writes one user's artefacts into a fixed output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    root: Utf8PathBuf,
}

impl ReportWriter {
    /// Create a writer rooted at `root`; the directory is created on first
    /// write.
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist every artefact for the user at 1-based sample position
    /// `index`.
    ///
    /// # Errors
    /// Returns [`ReportError`] when any file cannot be created or written.
    pub fn persist(&self, index: usize, report: &UserReport) -> Result<(), ReportError> {
        self.write_ranked(
            &format!("JaccardResult{index}.csv"),
            "Jaccard",
            &report.by_jaccard,
        )?;
        self.write_ranked(&format!("DiceResult{index}.csv"), "Dice", &report.by_dice)?;
        self.write_text(
            &format!("ListSimilarity_{index}.txt"),
            &format!("List similarity: {}", report.list_similarity),
        )?;
        self.write_golden(&format!("GoldenResult{index}.csv"), &report.golden)?;
        self.write_text(
            &format!("GoldenSimilarity_{index}.txt"),
            &format!(
                "Golden-Jaccard similarity: {}\nGolden-Dice similarity: {}",
                report.golden_jaccard, report.golden_dice
            ),
        )?;
        Ok(())
    }

    fn write_ranked(
        &self,
        name: &str,
        metric: &str,
        entries: &[ScoredCandidate],
    ) -> Result<(), ReportError> {
        let path = self.root.join(name);
        let file = create_report_file(&path).map_err(|source| ReportError::Create {
            path: path.clone(),
            source,
        })?;
        let mut writer = csv::Writer::from_writer(file);
        let encode_err = |source| ReportError::Encode {
            path: path.clone(),
            source,
        };

        writer
            .write_record(["ISBN", "Title", "Author", "Year", metric])
            .map_err(encode_err)?;
        for entry in entries {
            let year = entry.year.to_string();
            let score = entry.score.to_string();
            writer
                .write_record([
                    entry.isbn.as_str(),
                    entry.title.as_str(),
                    entry.author.as_str(),
                    year.as_str(),
                    score.as_str(),
                ])
                .map_err(encode_err)?;
        }
        writer.flush().map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })
    }

    fn write_golden(&self, name: &str, entries: &[GoldenEntry]) -> Result<(), ReportError> {
        let path = self.root.join(name);
        let file = create_report_file(&path).map_err(|source| ReportError::Create {
            path: path.clone(),
            source,
        })?;
        let mut writer = csv::Writer::from_writer(file);
        let encode_err = |source| ReportError::Encode {
            path: path.clone(),
            source,
        };

        writer
            .write_record(["ISBN", "Title", "Author", "Year", "Occurences", "Total Score"])
            .map_err(encode_err)?;
        for entry in entries {
            let year = entry.year.to_string();
            let occurrences = entry.occurrences.to_string();
            let score = entry.score.to_string();
            writer
                .write_record([
                    entry.isbn.as_str(),
                    entry.title.as_str(),
                    entry.author.as_str(),
                    year.as_str(),
                    occurrences.as_str(),
                    score.as_str(),
                ])
                .map_err(encode_err)?;
        }
        writer.flush().map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })
    }

    fn write_text(&self, name: &str, content: &str) -> Result<(), ReportError> {
        let path = self.root.join(name);
        let mut file = create_report_file(&path).map_err(|source| ReportError::Create {
            path: path.clone(),
            source,
        })?;
        file.write_all(content.as_bytes())
            .map_err(|source| ReportError::Write { path, source })
    }
}
