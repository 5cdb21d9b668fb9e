//! # chatlens CLI
//!
//! Command-line front end for the chatlens library: reads an export, runs the
//! pipeline and writes the selected format to a file or stdout.

use std::io::Write;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::output::to_error_json;
use chatlens::core::process_bytes;
use chatlens::format::{OutputFormat, to_format_string, write_to_format};
use chatlens::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    let format: OutputFormat = args.format.into();
    if let Err(e) = run(&args, format) {
        report_error(&e, format);
        process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(args: &Args, format: OutputFormat) -> Result<(), ChatlensError> {
    let start = Instant::now();

    let parser = TranscriptParser::with_config(args.parser_config());
    let filter = args.filter_config()?;
    let report_config = args.report_config();

    debug!(input = %args.input, %format, "reading transcript");
    let bytes = std::fs::read(&args.input)?;
    let report = process_bytes(bytes, &parser, &filter)?;

    match args.output {
        Some(ref path) => {
            write_to_format(&report, path, format, &report_config)?;
            info!(output = %path, "report written");
        }
        None => {
            let rendered = to_format_string(&report, format, &report_config)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    info!(
        parsed = report.stats.parsed_count,
        analyzed = report.stats.filtered_count,
        users = report.analytics.total_users,
        elapsed_ms = start.elapsed().as_millis(),
        "done"
    );
    Ok(())
}

fn report_error(err: &ChatlensError, format: OutputFormat) {
    if format == OutputFormat::Json {
        if let Ok(envelope) = to_error_json(err) {
            println!("{envelope}");
            return;
        }
    }
    eprintln!("Error: {err}");
}
