//! The command-line interface.
//!
//! This module is the entry point for all CLI commands: it parses arguments,
//! installs logging, wires the requested sources into a `ResultBuilder`, and
//! hands the results to the output layer.

use clap::Parser;
use miette::IntoDiagnostic;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::builder::ResultBuilder;
use crate::clock::{offset_from_minutes, Clock, FixedClock, SystemClock};
use crate::error::BuildError;
use crate::random::SeededRandom;

use self::args::{Command, SnapshotArgs, SourceArgs};
use self::output::Entry;

pub mod args;
pub mod output;

/// Builder wired from command-line flags.
pub type CliBuilder = ResultBuilder<SeededRandom, Box<dyn Clock>>;

/// The main entry point for the CLI.
pub fn run() -> miette::Result<()> {
    let args = SnapshotArgs::parse();
    init_logging(args.verbose);

    let mut builder = builder_from_args(&args.sources)?;
    let entries = execute(&mut builder, &args.resolved_command())?;
    output::print_entries(args.format, &entries).into_diagnostic()
}

/// Runs one subcommand against `builder`, returning what it built.
pub fn execute(builder: &mut CliBuilder, command: &Command) -> Result<Vec<Entry>, BuildError> {
    match *command {
        Command::Demo { input } => Ok(vec![
            Entry::new(input_call(input), builder.build_from_input(input)?),
            Entry::new(SOURCES_CALL, builder.build_from_sources()),
        ]),
        Command::Input { input } => Ok(vec![Entry::new(
            input_call(input),
            builder.build_from_input(input)?,
        )]),
        Command::Sources { count } => Ok((0..count)
            .map(|_| Entry::new(SOURCES_CALL, builder.build_from_sources()))
            .collect()),
    }
}

/// Wires the random source and the clock selected by `sources`.
pub fn builder_from_args(sources: &SourceArgs) -> Result<CliBuilder, BuildError> {
    let random = match sources.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };

    let offset = sources.offset_minutes.map(offset_from_minutes).transpose()?;
    let clock: Box<dyn Clock> = match (&sources.fixed_clock, offset) {
        (Some(instant), offset) => {
            let clock = FixedClock::parse_rfc3339(instant)?;
            Box::new(match offset {
                Some(offset) => clock.with_offset(offset),
                None => clock,
            })
        }
        (None, Some(offset)) => Box::new(SystemClock::with_offset(offset)),
        (None, None) => Box::new(SystemClock::local()),
    };

    info!(
        seeded = sources.seed.is_some(),
        fixed_clock = sources.fixed_clock.is_some(),
        "wired result builder"
    );
    Ok(ResultBuilder::new(random, clock))
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

const SOURCES_CALL: &str = "buildFromSources()";

fn input_call(input: i32) -> String {
    format!("buildFromInput({input})")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::reference_date_time;

    fn pinned() -> SourceArgs {
        SourceArgs {
            seed: Some(1234),
            fixed_clock: Some("2022-10-01T10:30:00Z".to_string()),
            offset_minutes: None,
        }
    }

    #[test]
    fn test_demo_builds_input_then_sources() {
        let mut builder = builder_from_args(&pinned()).unwrap();
        let entries = execute(&mut builder, &Command::Demo { input: 3 }).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].call, "buildFromInput(3)");
        assert_eq!(entries[0].result.one_string, "aaa");
        assert_eq!(entries[0].result.one_date_time, reference_date_time());
        assert_eq!(entries[1].call, "buildFromSources()");
        assert_eq!(
            entries[1].result.one_date_time.to_string(),
            "2022-10-01 10:30:00"
        );
    }

    #[test]
    fn test_demo_with_negative_input_fails() {
        let mut builder = builder_from_args(&pinned()).unwrap();
        let err = execute(&mut builder, &Command::Demo { input: -2 }).unwrap_err();
        assert!(matches!(err, BuildError::NegativeInput { input: -2 }));
    }

    #[test]
    fn test_sources_count_draws_consecutively() {
        let mut builder = builder_from_args(&pinned()).unwrap();
        let entries = execute(&mut builder, &Command::Sources { count: 3 }).unwrap();

        let mut replay = builder_from_args(&pinned()).unwrap();
        for entry in &entries {
            assert_eq!(entry.result, replay.build_from_sources());
        }
    }

    #[test]
    fn test_sources_count_zero_is_empty() {
        let mut builder = builder_from_args(&pinned()).unwrap();
        assert!(execute(&mut builder, &Command::Sources { count: 0 })
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_offset_shifts_fixed_clock() {
        let sources = SourceArgs {
            offset_minutes: Some(60),
            ..pinned()
        };
        let mut builder = builder_from_args(&sources).unwrap();
        let result = builder.build_from_sources();
        assert_eq!(result.one_date_time.to_string(), "2022-10-01 11:30:00");
    }

    #[test]
    fn test_bad_fixed_clock_is_rejected() {
        let sources = SourceArgs {
            fixed_clock: Some("2022-13-45".to_string()),
            ..pinned()
        };
        assert!(matches!(
            builder_from_args(&sources),
            Err(BuildError::InvalidInstant { .. })
        ));
    }

    #[test]
    fn test_bad_offset_is_rejected() {
        let sources = SourceArgs {
            offset_minutes: Some(-2000),
            ..pinned()
        };
        assert!(matches!(
            builder_from_args(&sources),
            Err(BuildError::InvalidOffset { minutes: -2000 })
        ));
    }

    #[test]
    fn test_unpinned_sources_still_build() {
        let mut builder = builder_from_args(&SourceArgs::default()).unwrap();
        let result = builder.build_from_sources();
        assert!((0.0..1.0).contains(&result.one_double));
        assert!(result.one_string.len() < 10);
    }
}
