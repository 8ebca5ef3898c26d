//! Expression parser
//!
//! Turns an expression such as `=2/0D0A/0A/s` into an [`EditSpec`].
//!
//! ```text
//! expr := [ "=" digits ] "/" hexpairs "/" ( "d" | hexpairs "/" "s" )
//! ```
//!
//! Parsing is fail-fast: the first violation is returned and nothing else is
//! looked at.

use crate::edit_spec::{EditSpec, Operation, UNBOUNDED};
use crate::error::{HexsedError, Result, SegmentRole};
use std::str::FromStr;

/// Parse an edit expression into a validated [`EditSpec`]
pub fn parse_expression(expression: &str) -> Result<EditSpec> {
    let (match_budget, body) = split_count_prefix(expression)?;
    let bytes = body.as_bytes();
    let len = bytes.len();

    if len < 2 {
        return Err(HexsedError::malformed(expression, "Expression is too short"));
    }

    let separators: Vec<usize> = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'/')
        .map(|(i, _)| i)
        .collect();

    let operation = check_structure(bytes, separators.len())
        .map_err(|reason| HexsedError::malformed(expression, reason))?;

    // separators[0] == 0 and the last separator sits at len - 2
    let find_segment = &body[separators[0] + 1..separators[1]];
    let replace_segment = match operation {
        Operation::Delete => "",
        Operation::Substitute => &body[separators[1] + 1..separators[2]],
    };

    if find_segment.is_empty() {
        return Err(HexsedError::malformed(expression, "Zero length search string"));
    }
    if operation == Operation::Substitute && replace_segment.is_empty() {
        return Err(HexsedError::malformed(expression, "Zero length replacement string"));
    }
    if find_segment.len() % 2 != 0 || replace_segment.len() % 2 != 0 {
        return Err(HexsedError::malformed(
            expression,
            "Each hex value must be input as a pair, eg 00..0F",
        ));
    }

    let find_bytes = decode_hex_segment(find_segment, SegmentRole::Find)?;
    let replace_bytes = match operation {
        Operation::Delete => Vec::new(),
        Operation::Substitute => decode_hex_segment(replace_segment, SegmentRole::Replace)?,
    };

    tracing::debug!(
        expression,
        find_len = find_bytes.len(),
        replace_len = replace_bytes.len(),
        budget = match_budget,
        "parsed expression"
    );

    EditSpec::new(operation, find_bytes, replace_bytes, match_budget)
}

/// Strip an optional `=N` prefix, returning the budget and the remainder
fn split_count_prefix(expression: &str) -> Result<(usize, &str)> {
    let Some(rest) = expression.strip_prefix('=') else {
        return Ok((UNBOUNDED, expression));
    };

    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, body) = rest.split_at(digits_end);

    if digits.is_empty() {
        return Err(HexsedError::malformed(
            expression,
            "A count prefix '=' must be followed by decimal digits",
        ));
    }

    let budget = digits
        .parse::<usize>()
        .map_err(|_| HexsedError::malformed(expression, format!("Count {} is too large", digits)))?;

    Ok((budget, body))
}

/// Validate separators and terminal letter, yielding the operation.
///
/// The separator count decides delete vs substitute; the terminal letter
/// must then agree with it.
fn check_structure(bytes: &[u8], separator_count: usize) -> std::result::Result<Operation, &'static str> {
    let len = bytes.len();

    if bytes[0] != b'/' || bytes[len - 2] != b'/' {
        return Err("Expression must start with '/' and end with '/d' or '/s'");
    }

    let operation = match separator_count {
        2 => Operation::Delete,
        3 => Operation::Substitute,
        _ => return Err("Expected 2 separators for delete or 3 for substitute"),
    };

    match (bytes[len - 1], operation) {
        (b'd', Operation::Delete) | (b's', Operation::Substitute) => Ok(operation),
        (b'd', Operation::Substitute) => Err("Command 'd' takes a single hex segment"),
        (b's', Operation::Delete) => Err("Command 's' needs a find and a replace segment"),
        _ => Err("Command must be 'd' or 's'"),
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode one hex pair, most significant nibble first
pub fn decode_hex_pair(pair: [u8; 2]) -> Option<u8> {
    Some((nibble(pair[0])? << 4) | nibble(pair[1])?)
}

/// Decode a whole segment of hex pairs into bytes
pub fn decode_hex_segment(segment: &str, role: SegmentRole) -> Result<Vec<u8>> {
    let invalid = || HexsedError::InvalidHexDigit {
        segment: segment.to_string(),
        role,
    };

    if !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    if segment.len() % 2 != 0 {
        return Err(HexsedError::malformed(
            segment,
            "Each hex value must be input as a pair, eg 00..0F",
        ));
    }

    segment
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| decode_hex_pair([pair[0], pair[1]]).ok_or_else(invalid))
        .collect()
}

impl FromStr for EditSpec {
    type Err = HexsedError;

    fn from_str(s: &str) -> Result<Self> {
        parse_expression(s)
    }
}
