//! Home directory shorthand expansion.

use core::fmt::{self, Display, Formatter};
use std::env;
use std::ffi::{OsStr, OsString};
use std::ops::Deref;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

use memchr::memchr_iter;

use crate::error::Error;

/// Capacity ceiling of a resolved path, including the terminating byte of the C convention.
pub const PATH_CAPACITY: usize = 4096;

/// Environment variable substituted for the shorthand marker.
pub const ENV_HOME: &str = "HOME";

/// The home directory shorthand.
const MARKER: u8 = b'~';

/// An absolute path after `~` expansion, always shorter than [`PATH_CAPACITY`] bytes.
///
/// # Examples
///
/// ```
/// use std::ffi::OsString;
/// use tabular_source::ResolvedPath;
///
/// let home = || Some(OsString::from("/home/ada"));
/// let resolved = ResolvedPath::expand_with("~/data.csv", home).unwrap();
/// assert_eq!(resolved.as_path(), std::path::Path::new("/home/ada/data.csv"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    /// Expands every `~` in `raw` with the value of `HOME`.
    ///
    /// `HOME` is only read when a marker is reached.
    ///
    /// # Errors
    ///
    /// Returns `Error::HomeUnset` if a marker is found and `HOME` is not set.
    pub fn expand(raw: impl AsRef<OsStr>) -> Result<Self, Error> {
        Self::expand_with(raw, || env::var_os(ENV_HOME))
    }

    /// Expands every `~` in `raw` with the value produced by `home`.
    ///
    /// Bytes are copied verbatim except the marker, which is replaced by the home value.
    /// The substituted text is not scanned again. Output longer than
    /// `PATH_CAPACITY - 1` bytes is silently truncated.
    ///
    /// # Errors
    ///
    /// Returns `Error::HomeUnset` if a marker is found and `home` yields `None`.
    pub fn expand_with<F>(raw: impl AsRef<OsStr>, home: F) -> Result<Self, Error>
    where
        F: FnOnce() -> Option<OsString>,
    {
        let bytes = raw.as_ref().as_bytes();
        let limit = PATH_CAPACITY - 1;
        let mut expanded = Vec::with_capacity(bytes.len().min(limit));
        let mut home = Some(home);
        let mut home_dir: Option<OsString> = None;
        let mut start = 0;

        for marker in memchr_iter(MARKER, bytes) {
            push_bounded(&mut expanded, &bytes[start..marker], limit);
            start = marker + 1;

            if expanded.len() >= limit {
                return Ok(Self::from_bytes(expanded));
            }

            if home_dir.is_none() {
                home_dir = home.take().and_then(|f| f());
            }
            let dir = home_dir.as_ref().ok_or(Error::HomeUnset)?;
            push_bounded(&mut expanded, dir.as_bytes(), limit);
        }

        push_bounded(&mut expanded, &bytes[start..], limit);

        Ok(Self::from_bytes(expanded))
    }

    fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(PathBuf::from(OsString::from_vec(bytes)))
    }

    /// Gets the resolved path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.as_os_str().len()
    }

    /// Returns true when nothing was resolved, as for standard input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    /// Consumes the `ResolvedPath`, returning the inner `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

/// Appends as much of `bytes` as fits below `limit`.
fn push_bounded(buf: &mut Vec<u8>, bytes: &[u8], limit: usize) {
    let room = limit.saturating_sub(buf.len());
    buf.extend_from_slice(&bytes[..bytes.len().min(room)]);
}

impl Deref for ResolvedPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for ResolvedPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
