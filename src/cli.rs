use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Reads a session JSON document on stdin and prints a one-line status.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Debug mode: log decoding and calculation details to stderr
    #[arg(
        long,
        env = "STATUSLINE_DEBUG",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub debug: bool,
}

impl Args {
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Args as clap::Parser>::try_parse()
    }
}

/// First line of a clap error without its `error: ` prefix.
pub fn arg_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Install a stderr logger when debug mode is on. `RUST_LOG` narrows it.
///
/// Stdout is reserved for the status line, so nothing is installed otherwise.
pub fn init_logging(debug: bool) {
    if !debug {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

/// Write the status line, or the single `Error:` line, and return the
/// process exit code. A failed write is a failure too.
pub fn emit<W: Write>(out: &mut W, result: anyhow::Result<String>) -> i32 {
    match result {
        Ok(line) => match write_line(out, &line) {
            Ok(()) => 0,
            Err(e) => {
                tracing::debug!(error = %e, "failed to write status line");
                1
            }
        },
        Err(e) => {
            tracing::debug!(error = ?e, "status rendering failed");
            let _ = write_line(out, &format!("Error: {e:#}"));
            1
        }
    }
}
