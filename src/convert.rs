//! Single-value converters
//!
//! Helpers that print the hex pairs for a character, escape sequence,
//! number or string, so users can build expressions without a hex table.
//! Output is always uppercase, two digits per byte.

use crate::error::{HexsedError, Result};

/// Escape letters and the byte each one stands for
const ESCAPES: [(char, u8); 11] = [
    ('a', 0x07),
    ('b', 0x08),
    ('f', 0x0c),
    ('n', 0x0a),
    ('r', 0x0d),
    ('t', 0x09),
    ('v', 0x0b),
    ('\\', 0x5c),
    ('\'', 0x27),
    ('"', 0x22),
    ('?', 0x3f),
];

/// Which converter a command-line flag selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Char,
    Escape,
    Decimal,
    Octal,
    String,
}

impl Conversion {
    pub fn apply(self, input: &str) -> Result<String> {
        match self {
            Conversion::Char => char_to_hex(input),
            Conversion::Escape => escape_to_hex(input),
            Conversion::Decimal => decimal_to_hex(input),
            Conversion::Octal => octal_to_hex(input),
            Conversion::String => string_to_hex(input),
        }
    }
}

fn escape_byte(letter: char) -> Option<u8> {
    ESCAPES
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, b)| *b)
}

fn hex_pairs(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

/// `-a`: hex of the first byte of `input`
pub fn char_to_hex(input: &str) -> Result<String> {
    match input.as_bytes().first() {
        Some(b) => Ok(hex_pairs(&[*b])),
        None => Err(HexsedError::conversion('a', input, "expected a character")),
    }
}

/// `-e`: hex of a two-character escape such as `\n`
pub fn escape_to_hex(input: &str) -> Result<String> {
    let mut chars = input.chars();
    let (Some('\\'), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(HexsedError::conversion(
            'e',
            input,
            "badly formed parameter, expected a backslash and one character",
        ));
    };

    escape_byte(letter)
        .map(|b| hex_pairs(&[b]))
        .ok_or_else(|| HexsedError::conversion('e', input, "unknown escape sequence"))
}

fn radix_to_hex(flag: char, input: &str, radix: u32, range: &str) -> Result<String> {
    let value = u32::from_str_radix(input.trim(), radix)
        .map_err(|_| HexsedError::conversion(flag, input, format!("expected a number in range {}", range)))?;
    let byte = u8::try_from(value)
        .map_err(|_| HexsedError::conversion(flag, input, format!("outside range {}", range)))?;
    Ok(hex_pairs(&[byte]))
}

/// `-i`: hex of a decimal value in 0-255
pub fn decimal_to_hex(input: &str) -> Result<String> {
    radix_to_hex('i', input, 10, "0-255")
}

/// `-o`: hex of an octal value in 0-377
pub fn octal_to_hex(input: &str) -> Result<String> {
    radix_to_hex('o', input, 8, "0-377")
}

/// `-s`: hex of every byte in `input`, honoring backslash escapes
pub fn string_to_hex(input: &str) -> Result<String> {
    let mut bytes = Vec::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let letter = chars
            .next()
            .ok_or_else(|| HexsedError::conversion('s', input, "trailing backslash"))?;
        let byte = escape_byte(letter).ok_or_else(|| {
            HexsedError::conversion('s', input, format!("unknown escape sequence \\{}", letter))
        })?;
        bytes.push(byte);
    }

    Ok(hex_pairs(&bytes))
}
