//! Policy for keeping a FIFO open across writer disconnects.

use clap::ValueEnum;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};
use std::env;

/// What to do when the writer of a FIFO goes away.
///
/// A FIFO opened read-only reports end-of-stream (and `POLLHUP`) once its last
/// writer disconnects. With `Reopen`, a named FIFO is reopened for reading and
/// appending, so the reader itself counts as a writer and later writers can
/// reconnect without the reader seeing a hangup.
///
/// # Examples
///
/// ```
/// use tabular_source::HoldStream;
///
/// assert_eq!(HoldStream::default(), HoldStream::Default);
/// assert_eq!(HoldStream::Reopen.to_string(), "reopen");
/// assert!(HoldStream::Reopen.reopens_fifo());
/// assert!(!HoldStream::Never.reopens_fifo());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum HoldStream {
    /// Leave the source as opened.
    #[default]
    Default,
    /// Never reopen the source.
    Never,
    /// Reopen a named FIFO with write access.
    Reopen,
}

impl Display for HoldStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Never => write!(f, "never"),
            Self::Reopen => write!(f, "reopen"),
        }
    }
}

impl HoldStream {
    /// Returns true if a named FIFO should be reopened with write access.
    #[must_use]
    pub const fn reopens_fifo(&self) -> bool {
        matches!(self, Self::Reopen)
    }

    /// Parse the policy from the `TABULAR_SOURCE_HOLD_STREAM` environment variable.
    ///
    /// Unset or unrecognized values fall back to `HoldStream::Default`.
    #[must_use]
    pub fn from_env() -> Self {
        env::var(ENV_HOLD_STREAM)
            .ok()
            .as_deref()
            .map_or_else(Self::default, Self::parse_lenient)
    }

    /// Parse a policy name, case-insensitively, falling back to `HoldStream::Default`.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            s if s.eq_ignore_ascii_case("never") => Self::Never,
            s if s.eq_ignore_ascii_case("reopen") => Self::Reopen,
            _ => Self::Default,
        }
    }
}

/// Environment variable name for the hold-stream policy
pub const ENV_HOLD_STREAM: &str = "TABULAR_SOURCE_HOLD_STREAM";
