//! Configuration options for acquiring a data source.
//!
//! This module provides the [`Options`] struct, the configuration bundle handed
//! to [`DataSource::acquire`](crate::DataSource::acquire).
//!
//! # Structure
//!
//! - **Path**: the user-supplied path, or none to read standard input
//! - **Alternate source**: data arrives another way (an inline query), so no stream is opened
//! - **Stream mode**: follow the source continuously instead of reading it once
//! - **HoldStream** ([`HoldStream`]): keep a named FIFO open across writer disconnects
//! - **Notify support**: the host has a file change notification facility
//!
//! # Usage
//!
//! ```
//! use tabular_source::{HoldStream, Options};
//!
//! let options = Options::default()
//!     .with_path("~/report.csv")
//!     .with_stream_mode(true)
//!     .with_hold_stream(HoldStream::Reopen);
//! assert!(options.stream_mode());
//! assert_eq!(options.hold_stream(), HoldStream::Reopen);
//! ```
//!
//! # Environment Variables
//!
//! - `TABULAR_SOURCE_HOLD_STREAM`: hold-stream policy (default: `default`)
//! - `HOME`: substituted for `~` in the path

pub mod hold_stream;
pub mod serialization;

use self::hold_stream::HoldStream;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unified configuration for opening and classifying a data source.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Path as typed by the user, before `~` expansion.
    path: Option<PathBuf>,

    /// Data arrives through an alternate source such as an inline query.
    alternate_source: bool,

    /// Follow the source instead of reading it once.
    stream_mode: bool,

    /// Policy for named FIFOs.
    hold_stream: HoldStream,

    /// The host can watch files for changes.
    notify_support: bool,
}

impl Options {
    /// Creates a new `Options` with every setting given.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(
        path: Option<PathBuf>,
        alternate_source: bool,
        stream_mode: bool,
        hold_stream: HoldStream,
        notify_support: bool,
    ) -> Self {
        Self {
            path,
            alternate_source,
            stream_mode,
            hold_stream,
            notify_support,
        }
    }

    /// Set the path to read from.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set whether an alternate source supplies the data.
    #[must_use]
    pub const fn with_alternate_source(mut self, alternate_source: bool) -> Self {
        self.alternate_source = alternate_source;
        self
    }

    /// Set stream mode.
    #[must_use]
    pub const fn with_stream_mode(mut self, stream_mode: bool) -> Self {
        self.stream_mode = stream_mode;
        self
    }

    /// Set the hold-stream policy.
    #[must_use]
    pub const fn with_hold_stream(mut self, hold_stream: HoldStream) -> Self {
        self.hold_stream = hold_stream;
        self
    }

    /// Set whether file change notification is available.
    #[must_use]
    pub const fn with_notify_support(mut self, notify_support: bool) -> Self {
        self.notify_support = notify_support;
        self
    }

    /// Get the unresolved path.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the alternate source flag.
    #[must_use]
    pub const fn alternate_source(&self) -> bool {
        self.alternate_source
    }

    /// Get the stream mode flag.
    #[must_use]
    pub const fn stream_mode(&self) -> bool {
        self.stream_mode
    }

    /// Get the hold-stream policy.
    #[must_use]
    pub const fn hold_stream(&self) -> HoldStream {
        self.hold_stream
    }

    /// Get the notification capability flag.
    #[must_use]
    pub const fn notify_support(&self) -> bool {
        self.notify_support
    }
}

impl Display for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let path = self
            .path
            .as_deref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Options {{ path: {}, alternate_source: {}, stream_mode: {}, hold_stream: {}, notify_support: {} }}",
            path, self.alternate_source, self.stream_mode, self.hold_stream, self.notify_support
        )
    }
}
