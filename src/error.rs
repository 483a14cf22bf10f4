//! Error types for tabular-source.

use core::fmt::{self, Display, Formatter};
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error types for tabular-source.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error on a path or an already open handle.
    #[error("{message} \"{path}\" ({source})")]
    Io {
        /// Resolved path, or empty for standard input.
        path: String,
        /// Error description.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A `~` was used but `HOME` is not set.
    #[error("HOME directory is not defined")]
    HomeUnset,

    /// Streaming a regular file needs a change notification facility.
    #[error("streaming on file is not available without file notification service")]
    StreamingWithoutNotify {
        /// Path of the regular file.
        path: String,
    },
}

/// Whether the host may report an error and carry on, or must give up the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorClass {
    /// The source could not be opened or inspected.
    Recoverable,
    /// The configuration cannot be honored.
    Fatal,
}

impl Display for ErrorClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable => write!(f, "recoverable"),
            Self::Fatal => write!(f, "fatal"),
        }
    }
}

impl Error {
    /// Builds an `Io` error with context.
    pub(crate) fn io(path: impl Into<String>, message: &str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: message.to_string(),
            source,
        }
    }

    /// Returns the error classification.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Io { .. } => ErrorClass::Recoverable,
            Self::HomeUnset | Self::StreamingWithoutNotify { .. } => ErrorClass::Fatal,
        }
    }

    /// Returns true for configuration states that end the session.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self.class(), ErrorClass::Fatal)
    }

    /// Returns the OS error code, if the failure came from a system call.
    #[must_use]
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::Io { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}
