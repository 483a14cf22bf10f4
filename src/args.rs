//! Command-line arguments for the `tabular-source` binary.

use clap::Parser;
use std::path::PathBuf;
use tabular_source::{HoldStream, Options, Serialization};

#[derive(Debug, Parser)]
#[command(about, version)]
pub(crate) struct Args {
    /// File path to read rather than stdin.
    #[arg(value_name = "PATH")]
    pub(crate) input: Option<PathBuf>,

    /// Inline query supplying the data instead of stdin.
    #[arg(short, long, value_name = "QUERY")]
    pub(crate) query: Option<String>,

    /// Follow the input, polling a pipe or FIFO until end of stream.
    #[arg(short, long)]
    pub(crate) stream: bool,

    /// Keep a named FIFO open across writer disconnects.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub(crate) hold_stream: Option<HoldStream>,

    /// Verbose report format.
    #[arg(short, long, default_value_t, value_enum, value_name = "FORMAT")]
    pub(crate) format: Serialization,

    /// Write data to file rather than stdout.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Print a report of the source to stderr.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,
}

impl Args {
    /// Builds the acquisition options.
    ///
    /// An unset `--hold-stream` falls back to `TABULAR_SOURCE_HOLD_STREAM`.
    /// The binary has no file notification facility.
    pub(crate) fn to_options(&self) -> Options {
        Options::new(
            self.input.clone(),
            self.query.is_some(),
            self.stream,
            self.hold_stream.unwrap_or_else(HoldStream::from_env),
            false,
        )
    }
}
