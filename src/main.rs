//! `tabular-source` opens and classifies an input stream, then copies it to stdout.

pub(crate) mod args;
pub(crate) mod verbose;

use std::io;
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use tabular_source::exit_code::ExitCode;
use tabular_source::{DataSource, Drain, Output};
use verbose::Verbose;

/// Pause between reads of a non-blocking source with no data.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> process::ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            return match err.print() {
                Ok(()) => ExitCode::from(&err).into(),
                Err(_) => ExitCode::Io.into(),
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprintln!("tabular-source: {err:#}");
            ExitCode::from(&err).into()
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.to_options();
    let mut source = DataSource::acquire(&options)?;

    if args.verbose {
        Verbose::default().write_report(&source, &options, args.format)?;
    }

    let mut output = args
        .output
        .as_deref()
        .map_or_else(|| Ok(Output::stdout()), Output::file)?;

    copy(&mut source, &mut output, options.stream_mode())?;
    output.flush()?;
    source.close();

    Ok(())
}

/// Copies the source to `output`, polling while a followed stream has no data.
fn copy(source: &mut DataSource, output: &mut Output, follow: bool) -> Result<()> {
    loop {
        match source.drain_into(output) {
            Ok(Drain::Finished(_)) => return Ok(()),
            Ok(Drain::Pending(_)) if follow => {
                output.flush()?;
                thread::sleep(POLL_INTERVAL);
            }
            Ok(Drain::Pending(_)) => return Ok(()),
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", source.source()));
            }
        }
    }
}

