//! Problem file reader errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::LoadId;

/// Reasons a problem file could not be turned into a load set.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened.
    #[error("Failed to open problem file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line failed.
    #[error("Failed to read problem input: {0}")]
    Io(#[from] std::io::Error),

    /// A line does not have exactly three fields.
    #[error("Line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// The load number is not a positive integer.
    #[error("Line {line}: '{value}' is not a positive load number")]
    InvalidId { line: usize, value: String },

    /// A pickup or dropoff is not a finite `(x,y)` pair.
    #[error("Line {line}: '{value}' is not a location of the form (x,y)")]
    InvalidLocation { line: usize, value: String },

    /// The load number appeared on an earlier line.
    #[error("Line {line}: load {id} was already defined")]
    DuplicateId { line: usize, id: LoadId },

    /// Load numbers skip `id`.
    #[error("Load {id} is missing; load numbers must run from 1 without gaps")]
    MissingId { id: LoadId },
}
