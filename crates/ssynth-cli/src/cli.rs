//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ssynth",
    version,
    about = "Read, check and write serialized synthesizer pipeline constraints",
    long_about = "Read, check and write serialized synthesizer pipeline constraints.\n\n\
                  Payloads are JSON envelopes tagged with a module name and an exact\n\
                  library version; a payload written by any other version is rejected."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Library version to write and require, instead of this build's own.
    #[arg(long = "library-version", value_name = "VERSION", global = true)]
    pub library_version: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every transformation kind the catalogue can rebuild, or the
    /// parameters of one.
    Kinds(KindsArgs),

    /// Decode an envelope and show the constraints it holds.
    Inspect(InspectArgs),

    /// Wrap a bare constraints mapping into a versioned envelope.
    Wrap(WrapArgs),
}

#[derive(Parser)]
pub struct KindsArgs {
    /// Show the parameters of this kind only.
    #[arg(value_name = "KIND")]
    pub kind: Option<String>,

    /// Print the kinds and their schemas as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Envelope file, or `-` for stdin.
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Print the decoded constraints re-encoded as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct WrapArgs {
    /// JSON object of column name to `{"type", "params"}` descriptor, or `-`
    /// for stdin.
    #[arg(value_name = "CONSTRAINTS")]
    pub constraints: PathBuf,

    /// Write the envelope here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Indent the output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
