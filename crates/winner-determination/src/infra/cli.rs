//! CLI arguments for the `winner-determination` binary.

use {
    super::io::Format,
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

/// Determine the winners of a combinatorial auction
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The log filter.
    #[arg(long, env, default_value = "warn,winner_determination=info")]
    pub log: String,

    /// At which log level logs should be printed to stderr instead of stdout.
    /// All logs go to stderr when omitted, since stdout carries the report.
    #[arg(long, env)]
    pub stderr_threshold: Option<tracing::Level>,

    /// Whether to use JSON format for the logs.
    #[arg(long, env, default_value = "false")]
    pub use_json_logs: bool,

    /// Path to the configuration file. This file should be in TOML format.
    /// Built-in defaults are used when omitted.
    #[arg(long, env)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Determine the winning bids and write the report.
    Solve {
        /// The auction to clear.
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Where to write the report. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Send the whole conflict graph to the cover solver.
        #[arg(long)]
        no_kernel: bool,
    },
    /// Convert an auction into MiniZinc data.
    Convert {
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Defaults to the input path with a `.dzn` extension.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Time the pipeline with and without kernelization against a direct
    /// set packing model.
    Bench {
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
}
