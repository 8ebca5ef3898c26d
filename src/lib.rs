//! hexsed: a stream editor for hex values
//!
//! This library exposes the expression parser and byte processor used by the
//! `hexsed` binary (src/main.rs) and by the property tests.

pub mod byte_processor;
pub mod cli;
pub mod config;
pub mod convert;
pub mod edit_spec;
pub mod error;
pub mod expression;
pub mod logger;
pub mod source;

// Re-export commonly used types for convenience
pub use byte_processor::{apply, write_report, ByteProcessor, EditOutcome};
pub use convert::Conversion;
pub use edit_spec::{EditSpec, Operation, UNBOUNDED};
pub use error::{HexsedError, SegmentRole};
pub use expression::parse_expression;
pub use source::{load_source, source_exists};
