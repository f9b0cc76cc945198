//! Typed failures of the loading and selection layers.
//!
//! Loading is all-or-nothing: the first bad line aborts the whole load and
//! no partial store is ever returned.

use std::{io, path::PathBuf};

use thiserror::Error;

/// A record file could not be turned into a store.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file is missing or cannot be opened.
    #[error("cannot read `{}`", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The reader failed mid-file, e.g. on invalid UTF-8; `line` is 1-based
    /// and counts the header.
    #[error("{}: line {line}: unreadable data", path.display())]
    UnreadableLine {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A line did not parse; `line` is 1-based and counts the header.
    #[error("{}: line {line}: malformed record `{content}`", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        content: String,
        #[source]
        source: RecordError,
    },
}

/// Why a single delimited line failed to become a record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("field {index} (`{value}`): {reason}")]
    Field {
        index: usize,
        value: String,
        reason: &'static str,
    },
}

/// A user-supplied reporting period or record id outside the valid domain.
#[derive(Debug, Error)]
#[error("invalid selection: {0}")]
pub struct InvalidSelection(pub String);
