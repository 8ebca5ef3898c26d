use crate::edit_spec::{EditSpec, Operation};
use memchr::memmem::Finder;
use std::io::{self, Write};

/// Counters produced by one edit pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditOutcome {
    pub matches_applied: usize,
    pub bytes_read: usize,
    pub bytes_written: usize,
}

/// Cursor and match count for a single pass over the source
#[derive(Debug, Default)]
struct ScanState {
    cursor: usize,
    applied: usize,
}

/// Applies an [`EditSpec`] to byte buffers.
///
/// The finder is built once, so a processor can be reused for several
/// buffers with the same spec.
pub struct ByteProcessor<'a> {
    spec: &'a EditSpec,
    finder: Finder<'a>,
}

impl<'a> ByteProcessor<'a> {
    pub fn new(spec: &'a EditSpec) -> Self {
        Self {
            spec,
            finder: Finder::new(spec.find_bytes()),
        }
    }

    /// Stream the edited form of `source` into `out`.
    ///
    /// Matches never overlap: each search starts right after the bytes the
    /// previous match consumed, so replacement bytes are never rescanned.
    pub fn apply<W: Write>(&self, source: &[u8], out: &mut W) -> io::Result<EditOutcome> {
        let mut state = ScanState::default();
        let mut written = 0usize;
        let budget = self.spec.match_budget();

        while state.cursor < source.len() {
            let rest = &source[state.cursor..];
            let found = if state.applied < budget {
                self.finder.find(rest)
            } else {
                None
            };

            match found {
                None => {
                    out.write_all(rest)?;
                    written += rest.len();
                    state.cursor = source.len();
                }
                Some(offset) => {
                    out.write_all(&rest[..offset])?;
                    written += offset;
                    state.applied += 1;
                    state.cursor += offset + self.spec.find_len();

                    if self.spec.operation() == Operation::Substitute {
                        out.write_all(self.spec.replace_bytes())?;
                        written += self.spec.replace_len();
                    }
                }
            }
        }

        let outcome = EditOutcome {
            matches_applied: state.applied,
            bytes_read: source.len(),
            bytes_written: written,
        };

        tracing::debug!(
            spec = %self.spec,
            bytes_read = outcome.bytes_read,
            bytes_written = outcome.bytes_written,
            matches = outcome.matches_applied,
            "edit pass complete"
        );

        Ok(outcome)
    }

    /// Run the pass into a fresh buffer
    pub fn apply_to_vec(&self, source: &[u8]) -> (Vec<u8>, EditOutcome) {
        let mut output = Vec::with_capacity(source.len());
        let outcome = self
            .apply(source, &mut output)
            .expect("writing to a Vec cannot fail");
        (output, outcome)
    }
}

/// Apply `spec` to `source`, writing the result to `out`
pub fn apply<W: Write>(spec: &EditSpec, source: &[u8], out: &mut W) -> io::Result<EditOutcome> {
    ByteProcessor::new(spec).apply(source, out)
}

/// Write the `Did N deletions.` line
pub fn write_report<W: Write>(outcome: &EditOutcome, operation: Operation, out: &mut W) -> io::Result<()> {
    writeln!(out, "Did {} {}.", outcome.matches_applied, operation.noun())
}
