//! Defines the command-line arguments and subcommands for the CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure. Source selection
//! flags are global so they can follow any subcommand.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Input used by the demo when none is given.
pub const DEFAULT_INPUT: i32 = 3;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "snapshot-testing",
    version,
    about = "Builds sample results from an input or from random and clock sources."
)]
pub struct SnapshotArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output format for the built results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl SnapshotArgs {
    /// The subcommand to run, defaulting to the demo.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo {
            input: DEFAULT_INPUT,
        })
    }
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Build one result from an input and one from the sources.
    Demo {
        /// Input for the input-driven result.
        #[arg(long, default_value_t = DEFAULT_INPUT, allow_negative_numbers = true)]
        input: i32,
    },
    /// Build a result from an explicit input.
    Input {
        /// Non-negative input; also the length of the repeated string.
        #[arg(required = true, allow_negative_numbers = true)]
        input: i32,
    },
    /// Build results from the random and clock sources.
    Sources {
        /// Number of consecutive results to draw.
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },
}

/// Where the random draws and the current time come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct SourceArgs {
    /// Seed for a reproducible random source (entropy when absent).
    #[arg(long, env = "SNAPSHOT_SEED", global = true)]
    pub seed: Option<u64>,

    /// Pin the clock to an RFC 3339 instant, e.g. 2022-10-01T10:30:00Z.
    #[arg(long, env = "SNAPSHOT_FIXED_CLOCK", global = true)]
    pub fixed_clock: Option<String>,

    /// UTC offset in minutes used to read the clock.
    #[arg(long, env = "SNAPSHOT_OFFSET_MINUTES", global = true, allow_negative_numbers = true)]
    pub offset_minutes: Option<i32>,
}

/// Output formats understood by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `call = BuildResult(...)` line per result.
    Text,
    /// Pretty-printed JSON array of `{ call, result }` entries.
    Json,
}
