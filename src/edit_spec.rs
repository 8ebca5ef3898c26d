//! Edit descriptor
//!
//! An [`EditSpec`] is what the expression parser produces and what the byte
//! processor consumes. It is immutable once built.

use crate::error::{HexsedError, Result};
use std::fmt;

/// Budget value meaning "apply to every match"
pub const UNBOUNDED: usize = usize::MAX;

/// The edit applied to each match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Remove the matched bytes (`/hex/d`)
    Delete,
    /// Replace the matched bytes (`/hex/hex/s`)
    Substitute,
}

impl Operation {
    /// Noun used when reporting how many edits were made
    pub fn noun(self) -> &'static str {
        match self {
            Operation::Delete => "deletions",
            Operation::Substitute => "substitutions",
        }
    }

    /// Terminal letter of the expression
    pub fn command(self) -> char {
        match self {
            Operation::Delete => 'd',
            Operation::Substitute => 's',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSpec {
    operation: Operation,
    find_bytes: Vec<u8>,
    replace_bytes: Vec<u8>,
    match_budget: usize,
}

impl EditSpec {
    /// Build a spec, checking the invariants the parser guarantees.
    ///
    /// `replace_bytes` must be empty for [`Operation::Delete`] and non-empty
    /// for [`Operation::Substitute`]; `find_bytes` is never empty.
    pub fn new(
        operation: Operation,
        find_bytes: Vec<u8>,
        replace_bytes: Vec<u8>,
        match_budget: usize,
    ) -> Result<Self> {
        let spec = Self {
            operation,
            find_bytes,
            replace_bytes,
            match_budget,
        };

        if spec.find_bytes.is_empty() {
            return Err(HexsedError::malformed(&spec.to_string(), "Zero length search string"));
        }
        match operation {
            Operation::Delete if !spec.replace_bytes.is_empty() => Err(HexsedError::malformed(
                &spec.to_string(),
                "A delete expression takes no replacement",
            )),
            Operation::Substitute if spec.replace_bytes.is_empty() => Err(
                HexsedError::malformed(&spec.to_string(), "Zero length replacement string"),
            ),
            _ => Ok(spec),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn find_bytes(&self) -> &[u8] {
        &self.find_bytes
    }

    pub fn replace_bytes(&self) -> &[u8] {
        &self.replace_bytes
    }

    pub fn find_len(&self) -> usize {
        self.find_bytes.len()
    }

    pub fn replace_len(&self) -> usize {
        self.replace_bytes.len()
    }

    pub fn match_budget(&self) -> usize {
        self.match_budget
    }

    /// True when no `=N` prefix limits the number of edits
    pub fn is_unbounded(&self) -> bool {
        self.match_budget == UNBOUNDED
    }
}

/// Renders the canonical expression, e.g. `=2/0D0A/0A/s`
impl fmt::Display for EditSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_unbounded() {
            write!(f, "={}", self.match_budget)?;
        }
        write!(f, "/")?;
        for b in &self.find_bytes {
            write!(f, "{:02X}", b)?;
        }
        write!(f, "/")?;
        if self.operation == Operation::Substitute {
            for b in &self.replace_bytes {
                write!(f, "{:02X}", b)?;
            }
            write!(f, "/")?;
        }
        write!(f, "{}", self.operation.command())
    }
}
