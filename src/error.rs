//! Error types for hexsed
//!
//! Every failure the library can report is a variant of [`HexsedError`].
//! Not finding the pattern is not an error: it is a zero-match outcome.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, HexsedError>;

/// Which hex segment of an expression a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    Find,
    Replace,
}

impl fmt::Display for SegmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentRole::Find => write!(f, "find"),
            SegmentRole::Replace => write!(f, "replace"),
        }
    }
}

#[derive(Error, Debug)]
pub enum HexsedError {
    /// Structural grammar violation in an edit expression
    #[error("Badly formed expression: {expression}\n{reason}")]
    MalformedExpression { expression: String, reason: String },

    /// A character outside 0-9A-Fa-f inside a hex segment
    #[error("Invalid hex chars in {role} segment: {segment}")]
    InvalidHexDigit { segment: String, role: SegmentRole },

    /// Target file missing or unreadable
    #[error("{reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// Input rejected by one of the single-value converters
    #[error("Invalid argument for -{flag}: {input:?} ({reason})")]
    InvalidConversion {
        flag: char,
        input: String,
        reason: String,
    },
}

impl HexsedError {
    pub(crate) fn malformed(expression: &str, reason: impl Into<String>) -> Self {
        HexsedError::MalformedExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn conversion(flag: char, input: &str, reason: impl Into<String>) -> Self {
        HexsedError::InvalidConversion {
            flag,
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Build a `SourceUnavailable` error with an actionable message for `err`
    pub fn source_unavailable(path: &Path, err: &io::Error) -> Self {
        let reason = if is_not_found(err) {
            not_found_error(path)
        } else if is_permission_denied(err) {
            permission_error(path)
        } else {
            format!("Cannot read '{}': {}", path.display(), err)
        };

        HexsedError::SourceUnavailable {
            path: path.to_path_buf(),
            reason,
        }
    }
}

/// Check if an IO error is a permission denied error
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Check if an IO error is a "not found" error
pub fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// Message for a file that cannot be read because of its permissions
pub fn permission_error(path: &Path) -> String {
    format!(
        "Permission denied when reading '{}'\n\n\
         Possible fixes:\n\
         1. Check file permissions: ls -l '{}'\n\
         2. Grant read access with: chmod u+r '{}'",
        path.display(),
        path.display(),
        path.display()
    )
}

/// Message for a path that does not exist
pub fn not_found_error(path: &Path) -> String {
    format!(
        "No such file: '{}'\n\n\
         Possible fixes:\n\
         1. Check the file path is correct\n\
         2. Use an absolute path if the relative path is ambiguous",
        path.display()
    )
}
