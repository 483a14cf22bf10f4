//! Serialization format of the source report.

use clap::ValueEnum;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// Serialization format options for the verbose report.
///
/// # Examples
///
/// ```
/// use tabular_source::Serialization;
///
/// assert_eq!(Serialization::default(), Serialization::Text);
/// assert_eq!(Serialization::Json.to_string(), "json");
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
pub enum Serialization {
    /// One `field value` pair per line.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// CSV output with a header row.
    Csv,
}

impl Display for Serialization {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
