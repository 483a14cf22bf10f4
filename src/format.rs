//! Content format hints inferred from a file name suffix.

use core::fmt::{self, Display, Formatter};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use serde::{Deserialize, Serialize};

/// Shortest path that can carry a `.xxx` suffix after at least one name byte.
const MIN_SUFFIXED_LEN: usize = 5;

/// Format hint for the content of a data source.
///
/// # Examples
///
/// ```
/// use tabular_source::Format;
///
/// assert_eq!(Format::sniff("data.csv"), Format::Csv);
/// assert_eq!(Format::sniff("data.TSV"), Format::Tsv);
/// assert_eq!(Format::sniff("data.txt"), Format::Matrix);
/// assert_eq!(Format::default().to_string(), "matrix");
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
)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    /// Preformatted table, as printed by a database client.
    #[default]
    Matrix,
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix => write!(f, "matrix"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl Format {
    /// Infers the format from the last four bytes of `path`.
    ///
    /// Only `.csv` and `.tsv` are recognized, ASCII case-insensitively.
    /// Anything else, including paths shorter than five bytes, is `Matrix`.
    #[must_use]
    pub fn sniff(path: impl AsRef<OsStr>) -> Self {
        let bytes = path.as_ref().as_bytes();
        if bytes.len() < MIN_SUFFIXED_LEN {
            return Self::Matrix;
        }

        match &bytes[bytes.len() - 4..] {
            [b'.', suffix @ ..] if suffix.eq_ignore_ascii_case(b"csv") => Self::Csv,
            [b'.', suffix @ ..] if suffix.eq_ignore_ascii_case(b"tsv") => Self::Tsv,
            _ => Self::Matrix,
        }
    }
}
