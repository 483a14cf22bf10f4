//! Classifying an open source and setting up its read mode.
//!
//! Classification looks at the open descriptor, never the path:
//!
//! - **FIFO or pipe**: optionally reopened with write access to survive writer
//!   disconnects, and switched to non-blocking reads when streaming.
//! - **Regular file**: when streaming, the current end of file is recorded so a
//!   shrink can be detected later. Following a file needs a change notification
//!   facility the host must provide.
//! - **Anything else** (terminals, character devices): left as is.

use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom};
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};
use std::os::unix::fs::FileTypeExt;

use crate::error::Error;
use crate::options::hold_stream::HoldStream;
use crate::source::{DataSource, Handle, Kind, State};

impl DataSource {
    /// Classifies the open handle and configures blocking and truncation detection.
    ///
    /// Sources without a handle, or already classified, are left untouched
    /// apart from the state moving to `Classified`. On failure every
    /// classification attribute is back at its opened value, the state stays
    /// `Opened` and reads keep being refused.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if the handle cannot be inspected, reopened or reconfigured.
    /// - `Error::StreamingWithoutNotify` if `stream_mode` is set on a regular
    ///   file and `notify_support` is not.
    pub fn classify(
        &mut self,
        stream_mode: bool,
        hold_stream: HoldStream,
        notify_support: bool,
    ) -> Result<(), Error> {
        if self.state != State::Opened {
            return Ok(());
        }

        if self.handle.is_none() {
            self.state = State::Classified;
            return Ok(());
        }

        if let Err(err) = self.configure(stream_mode, hold_stream, notify_support) {
            self.kind = Kind::Other;
            self.is_blocking = true;
            self.detect_truncation = false;
            self.last_known_size = None;
            return Err(err);
        }

        self.state = State::Classified;

        Ok(())
    }

    fn configure(
        &mut self,
        stream_mode: bool,
        hold_stream: HoldStream,
        notify_support: bool,
    ) -> Result<(), Error> {
        let file_type = self
            .with_handle_file(File::metadata)
            .map_err(|source| self.io_error("cannot get status of file", source))?
            .file_type();

        self.kind = if file_type.is_fifo() {
            Kind::Fifo
        } else if file_type.is_file() {
            Kind::File
        } else {
            Kind::Other
        };

        if self.is_fifo() && !self.is_pipe && hold_stream.reopens_fifo() {
            self.reopen_for_append()?;
        }

        if stream_mode {
            if self.is_file() {
                if !notify_support {
                    return Err(Error::StreamingWithoutNotify {
                        path: self.source(),
                    });
                }

                let size = self
                    .with_handle_file(|mut file| file.seek(SeekFrom::End(0)))
                    .map_err(|source| self.io_error("cannot find end of file", source))?;

                self.detect_truncation = true;
                self.last_known_size = Some(size);
            } else {
                self.with_fd(set_nonblocking)
                    .map_err(|source| self.io_error("cannot set non-blocking mode of", source))?;
            }
        }

        self.is_blocking = self
            .with_fd(is_blocking)
            .map_err(|source| self.io_error("cannot get descriptor flags of", source))?;

        Ok(())
    }

    /// Compares the current size of the file against the last known size.
    ///
    /// Returns true if the file shrank. The snapshot is updated either way.
    /// Always false unless truncation detection is on.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the handle cannot be inspected.
    pub fn check_truncation(&mut self) -> Result<bool, Error> {
        if !self.detect_truncation {
            return Ok(false);
        }

        let size = self
            .with_handle_file(|file| file.metadata().map(|metadata| metadata.len()))
            .map_err(|source| self.io_error("cannot get status of file", source))?;
        let truncated = self.last_known_size.is_some_and(|last| size < last);
        self.last_known_size = Some(size);

        Ok(truncated)
    }

    /// Swaps the handle for one opened read/append on the same path.
    ///
    /// The old handle is only dropped once the new one is open.
    fn reopen_for_append(&mut self) -> Result<(), Error> {
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error("cannot reopen fifo", source))?;

        self.handle = Some(Handle::File(file));

        Ok(())
    }

    fn with_handle_file<R>(&self, f: impl FnOnce(&File) -> io::Result<R>) -> io::Result<R> {
        self.handle
            .as_ref()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotConnected))?
            .with_file(f)
    }

    fn with_fd<R>(&self, f: impl FnOnce(BorrowedFd<'_>) -> io::Result<R>) -> io::Result<R> {
        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotConnected))?;

        f(handle.as_fd())
    }

    fn io_error(&self, message: &str, source: io::Error) -> Error {
        Error::io(self.path.to_string(), message, source)
    }
}

/// Reads the file status flags of a descriptor.
#[allow(unsafe_code)]
fn status_flags(fd: BorrowedFd<'_>) -> io::Result<libc::c_int> {
    // Safety: `F_GETFL` only reads the flags of a descriptor that outlives the call
    let flags = unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_GETFL) };
    if flags == -1 {
        return Err(io::Error::last_os_error());
    }

    Ok(flags)
}

/// Adds `O_NONBLOCK` to a descriptor, keeping its other status flags.
#[allow(unsafe_code)]
pub(crate) fn set_nonblocking(fd: BorrowedFd<'_>) -> io::Result<()> {
    let flags = status_flags(fd)?;
    if flags & libc::O_NONBLOCK != 0 {
        return Ok(());
    }

    // Safety: `F_SETFL` on a borrowed, open descriptor with flags it already had plus `O_NONBLOCK`
    if unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_SETFL, flags | libc::O_NONBLOCK) } == -1 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

/// Returns true unless the descriptor has `O_NONBLOCK` set.
pub(crate) fn is_blocking(fd: BorrowedFd<'_>) -> io::Result<bool> {
    status_flags(fd).map(|flags| flags & libc::O_NONBLOCK == 0)
}
