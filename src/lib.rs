//! Acquisition and classification of the input stream of a tabular data viewer.
//!
//! Given a user-supplied path (or none), `tabular-source` resolves the stream
//! to read from, works out how that stream behaves, and configures it for
//! either one-shot reading or continuous following.
//!
//! ## Module structure
//!
//! - `path.rs`: `~` expansion into a [`ResolvedPath`]
//! - `format.rs`: [`Format`] hints sniffed from `.csv`/`.tsv` suffixes
//! - `source.rs`: opening a [`DataSource`] from a path or standard input
//! - `classify.rs`: FIFO/file classification, non-blocking mode and truncation detection
//! - `options/`: the [`Options`] bundle, [`HoldStream`] policy and report [`Serialization`]
//! - `error.rs`: [`Error`] and its [`ErrorClass`]
//! - `exit_code.rs`: sysexits-style exit codes for the CLI
//! - `output.rs`: stdout, stderr and file writers
//!
//! # Flow
//!
//! The path is expanded, opened (or standard input is used), tagged with a
//! format hint from the unexpanded name, then classified from the metadata of
//! the open descriptor:
//!
//! ```
//! use std::io::{Read, Write};
//! use tabular_source::{DataSource, Format, Options};
//! use anyhow::Result;
//!
//! # fn example() -> Result<()> {
//! let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
//! file.write_all(b"id,name\n1,ada\n")?;
//!
//! let options = Options::default().with_path(file.path());
//! let mut source = DataSource::acquire(&options)?;
//! assert_eq!(source.format(), Format::Csv);
//! assert!(source.is_file());
//! assert!(source.is_blocking());
//!
//! let mut content = String::new();
//! source.read_to_string(&mut content)?;
//! assert_eq!(content, "id,name\n1,ada\n");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Streaming
//!
//! In stream mode a FIFO or pipe is switched to non-blocking reads, while a
//! regular file records its size for [`DataSource::check_truncation`]. Following
//! a regular file needs a change notification facility that the host provides;
//! without one classification fails with a fatal [`Error::StreamingWithoutNotify`].
//!
//! # Errors
//!
//! Errors are never turned into process exits by the library. [`Error::class`]
//! tells recoverable failures (a file that could not be opened) from fatal
//! configuration states (`~` without `HOME`, streaming a file without notification).

mod classify;
pub mod error;
pub mod exit_code;
pub mod format;
pub mod options;
pub mod output;
pub mod path;
pub mod source;

pub use error::{Error, ErrorClass};
pub use format::Format;
pub use options::{Options, hold_stream::HoldStream, serialization::Serialization};
pub use output::Output;
pub use path::{PATH_CAPACITY, ResolvedPath};
pub use source::{DataSource, Drain, Handle, Kind, State};
