use anyhow::{Context, Result};
use colored::Colorize;
use hexsed::cli::{parse_args, Args};
use hexsed::config::{self, Config};
use hexsed::{load_source, logger, parse_expression, write_report, ByteProcessor};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}", e);
        Config::default()
    });

    match parse_args().and_then(|args| run(args, &config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e, config.output.color);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, config: &Config) -> Result<()> {
    if let Some(log_path) = logger::init_debug_logging(&config.logging)? {
        tracing::info!(log = %log_path.display(), "hexsed {} started", env!("CARGO_PKG_VERSION"));
    }

    match args {
        Args::Edit {
            expression,
            file,
            report_count,
        } => execute_edit(&expression, Path::new(&file), report_count || config.output.report_count),
        Args::Convert { conversion, input } => {
            let hex = conversion.apply(&input)?;
            println!("{}", hex);
            Ok(())
        }
    }
}

fn execute_edit(expression: &str, file: &Path, report_count: bool) -> Result<()> {
    // Parse first: a bad expression must fail before the file is touched
    let spec = parse_expression(expression)?;
    let source = load_source(file)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = ByteProcessor::new(&spec)
        .apply(&source, &mut out)
        .context("Failed to write edited output")?;
    out.flush().context("Failed to write edited output")?;

    tracing::info!(
        expression,
        file = %file.display(),
        matches = outcome.matches_applied,
        "applied {}",
        spec.operation().noun()
    );

    if report_count {
        write_report(&outcome, spec.operation(), &mut io::stderr().lock())?;
    }

    Ok(())
}

fn print_error(err: &anyhow::Error, color_enabled: bool) {
    let use_color =
        color_enabled && std::env::var("NO_COLOR").is_err() && io::stderr().is_terminal();

    if use_color {
        eprintln!("{} {:#}", "hexsed:".red().bold(), err);
    } else {
        eprintln!("hexsed: {:#}", err);
    }
}
