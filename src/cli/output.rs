//! Handles all user-facing output for the CLI.
//!
//! Results are written to any `WriteColor` sink so the same code serves the
//! terminal and in-memory buffers. Colour is only applied to the call label
//! in text mode; JSON output is never coloured.

use std::io::{self, IsTerminal};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::args::OutputFormat;
use crate::result::BuildResult;

/// One built result together with the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub call: String,
    pub result: BuildResult,
}

impl Entry {
    pub fn new(call: impl Into<String>, result: BuildResult) -> Self {
        Self {
            call: call.into(),
            result,
        }
    }
}

/// Writes the entries in the requested format.
pub fn write_entries<W: WriteColor>(
    out: &mut W,
    format: OutputFormat,
    entries: &[Entry],
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, entries),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)
        }
    }
}

/// Writes the entries to stdout, colouring labels when stdout is a terminal.
pub fn print_entries(format: OutputFormat, entries: &[Entry]) -> io::Result<()> {
    let choice = match format {
        OutputFormat::Text if io::stdout().is_terminal() => ColorChoice::Auto,
        _ => ColorChoice::Never,
    };
    let mut stdout = StandardStream::stdout(choice);
    write_entries(&mut stdout, format, entries)
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_text<W: WriteColor>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(out, "{}", entry.call)?;
        out.reset()?;
        writeln!(out, " = {}", entry.result)?;
    }
    Ok(())
}
