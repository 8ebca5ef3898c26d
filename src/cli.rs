use crate::convert::Conversion;
use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "

License: MIT
Rust Edition: 2024"
);

#[derive(Parser, Debug)]
#[command(name = "hexsed")]
#[command(about = "A stream editor for hex values")]
#[command(long_about = "hexsed finds exact byte sequences in a file and deletes or substitutes them.

Byte sequences are written as hex pairs, so any byte (including NUL) can be
matched. The edited file is written to stdout; the input file is never changed.

EXPRESSIONS:
  /HEX/d          Delete every occurrence of HEX
  /HEX/HEX/s      Substitute the second HEX for every occurrence of the first
  =N/HEX/d        Only edit the first N occurrences (also works with s)

  Matches never overlap: /4141/d on AAAA deletes twice, never three times.

EXAMPLES:
  hexsed /0D0A/0A/s dos.txt > unix.txt     Convert CRLF line endings to LF
  hexsed -n /00/d data.bin > clean.bin     Strip NUL bytes, report the count
  hexsed =1/FEFF/d file.txt                Remove the first FE FF pair only
  hexsed -s 'tab\\there'                    Print the hex pairs for a string
  hexsed -e '\\n'                           Print the hex pair for an escape")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
#[command(group(
    ArgGroup::new("convert")
        .args(["ascii", "escape", "decimal", "octal", "string"])
        .conflicts_with_all(["expression", "file"])
))]
pub struct Cli {
    /// Edit expression, e.g. /41/42/s
    #[arg(value_name = "EXPR")]
    expression: Option<String>,

    /// File to edit
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Report the number of edits on stderr
    #[arg(short = 'n', long = "count")]
    count: bool,

    /// Print the hex value of a character
    #[arg(short = 'a', long = "ascii", value_name = "CHAR")]
    ascii: Option<String>,

    /// Print the hex value of an escape sequence such as \n
    #[arg(short = 'e', long = "escape", value_name = "ESC")]
    escape: Option<String>,

    /// Print the hex value of a decimal number (0-255)
    #[arg(short = 'i', long = "decimal", value_name = "DEC")]
    decimal: Option<String>,

    /// Print the hex value of an octal number (0-377)
    #[arg(short = 'o', long = "octal", value_name = "OCT")]
    octal: Option<String>,

    /// Print the hex pairs of every byte in a string (escapes allowed)
    #[arg(short = 's', long = "string", value_name = "STRING", allow_hyphen_values = true)]
    string: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Args {
    Edit {
        expression: String,
        file: String,
        report_count: bool,
    },
    Convert {
        conversion: Conversion,
        input: String,
    },
}

pub fn parse_args() -> Result<Args> {
    Cli::parse().into_args()
}

impl Cli {
    /// Turn parsed flags into the action to run
    pub fn into_args(self) -> Result<Args> {
        let conversions = [
            (Conversion::Char, self.ascii),
            (Conversion::Escape, self.escape),
            (Conversion::Decimal, self.decimal),
            (Conversion::Octal, self.octal),
            (Conversion::String, self.string),
        ];
        // The arg group allows at most one of these
        if let Some((conversion, Some(input))) =
            conversions.into_iter().find(|(_, input)| input.is_some())
        {
            return Ok(Args::Convert { conversion, input });
        }

        let expression = self
            .expression
            .context("No expression provided. Usage: hexsed [-n] /41/42/s file")?;
        let file = self
            .file
            .context("No file name provided. Usage: hexsed [-n] /41/42/s file")?;

        Ok(Args::Edit {
            expression,
            file,
            report_count: self.count,
        })
    }
}
