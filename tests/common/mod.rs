//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::ffi::CString;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, TempDir};

/// Creates a named FIFO inside `dir`.
#[allow(unsafe_code)]
pub(crate) fn make_fifo(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    let c_path = CString::new(path.as_os_str().as_bytes()).expect("path without NUL");

    // Safety: `c_path` is a valid NUL-terminated string for the duration of the call
    let rc = unsafe { libc::mkfifo(c_path.as_ptr(), 0o600) };
    assert_eq!(rc, 0, "mkfifo failed: {}", io::Error::last_os_error());

    path
}

/// Opens a FIFO read/write, which never blocks on Linux and keeps a writer attached.
pub(crate) fn attach_writer(path: &Path) -> File {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .expect("open fifo writer")
}

/// Creates a temp file with `suffix` holding `contents`.
pub(crate) fn temp_file_with(suffix: &str, contents: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents).expect("write test data");
    file.flush().expect("flush test data");
    file
}
