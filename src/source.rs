//! Source loading
//!
//! The byte processor works on a contiguous, fully loaded buffer. This module
//! checks the path and reads the file before any editing starts.

use crate::error::{HexsedError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// True when `path` refers to something that exists
pub fn source_exists(path: &Path) -> bool {
    path.exists()
}

/// Read the whole of `path` into memory
pub fn load_source(path: &Path) -> Result<Vec<u8>> {
    if !source_exists(path) {
        let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        return Err(HexsedError::source_unavailable(path, &err));
    }
    if path.is_dir() {
        return Err(HexsedError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: format!("'{}' is a directory, not a file", path.display()),
        });
    }

    let data = fs::read(path).map_err(|e| HexsedError::source_unavailable(path, &e))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "loaded source");
    Ok(data)
}
