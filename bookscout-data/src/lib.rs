//! Data layer for the Bookscout engine.
//!
//! The crate owns everything the scoring pipeline treats as an external
//! collaborator: loading the `;`-delimited input tables into read-only
//! in-memory structures, deterministic seeded user sampling, and persisting
//! the per-user report artefacts.

#![forbid(unsafe_code)]

mod fs;
mod report;
mod sample;
mod tables;

pub use report::{ReportError, ReportWriter};
pub use sample::sample_users;
pub use tables::{
    SessionTables, TableError, load_catalog, load_ratings, load_tables, load_users,
};
