//! Opening the input stream of a session.

use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, Read, Stdin, Write};
use std::os::fd::{AsFd, BorrowedFd};
use std::path::Path;

use crate::error::Error;
use crate::format::Format;
use crate::options::Options;
use crate::path::ResolvedPath;

/// Size of the scratch buffer used by [`DataSource::drain_into`].
const DRAIN_BUFFER_SIZE: usize = 8192;

/// The open descriptor of a data source.
#[derive(Debug)]
pub enum Handle {
    /// The process's standard input. Never closed by this crate.
    Stdin(Stdin),
    /// A file or named FIFO opened by path.
    File(File),
}

impl Handle {
    /// Runs `f` with a `File` sharing this handle's open file description.
    ///
    /// Standard input is duplicated for the call, so metadata and offsets are those of fd 0.
    pub(crate) fn with_file<R>(&self, f: impl FnOnce(&File) -> io::Result<R>) -> io::Result<R> {
        match self {
            Self::File(file) => f(file),
            Self::Stdin(stdin) => {
                let dup = File::from(stdin.as_fd().try_clone_to_owned()?);
                f(&dup)
            }
        }
    }
}

impl AsFd for Handle {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            Self::Stdin(stdin) => stdin.as_fd(),
            Self::File(file) => file.as_fd(),
        }
    }
}

impl Read for Handle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(stdin) => stdin.read(buf),
            Self::File(file) => file.read(buf),
        }
    }
}

/// Lifecycle of a `DataSource`.
///
/// A `DataSource` only exists once opened, so there is no unopened state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Opened, not yet classified.
    Opened,
    /// Classified and ready to read.
    Classified,
    /// Handle released.
    Closed,
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened => write!(f, "opened"),
            Self::Classified => write!(f, "classified"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// What the open handle turned out to be when classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Not classified yet, or neither a FIFO nor a regular file.
    #[default]
    Other,
    /// A named FIFO or an anonymous pipe.
    Fifo,
    /// A regular file.
    File,
}

/// Outcome of [`DataSource::drain_into`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drain {
    /// End of stream was reached after copying this many bytes.
    Finished(u64),
    /// No more data right now; more may arrive later.
    Pending(u64),
}

impl Drain {
    /// Number of bytes copied.
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        match self {
            Self::Finished(n) | Self::Pending(n) => *n,
        }
    }
}

/// The input stream of a session and how it behaves.
///
/// Created by [`DataSource::open`], finalized in place by
/// [`DataSource::classify`], then read until the session ends.
#[derive(Debug)]
pub struct DataSource {
    pub(crate) path: ResolvedPath,
    pub(crate) handle: Option<Handle>,
    pub(crate) format: Format,
    pub(crate) is_pipe: bool,
    pub(crate) kind: Kind,
    pub(crate) is_blocking: bool,
    pub(crate) detect_truncation: bool,
    pub(crate) last_known_size: Option<u64>,
    pub(crate) state: State,
}

impl DataSource {
    const fn with_handle(path: ResolvedPath, handle: Option<Handle>, format: Format) -> Self {
        Self {
            path,
            handle,
            format,
            is_pipe: false,
            kind: Kind::Other,
            is_blocking: true,
            detect_truncation: false,
            last_known_size: None,
            state: State::Opened,
        }
    }

    /// Opens the data source for a session.
    ///
    /// - With a path: `~` is expanded and the result opened for reading. The
    ///   format hint is sniffed from the path as given, not the expanded one.
    /// - Without a path or alternate source: standard input, marked as a pipe.
    /// - Without a path but with an alternate source: no handle at all.
    ///
    /// Opening a named FIFO blocks until a writer connects.
    ///
    /// # Errors
    ///
    /// - `Error::HomeUnset` if the path uses `~` and `HOME` is not set.
    /// - `Error::Io` if the file cannot be opened.
    pub fn open(requested: Option<&Path>, alternate_source: bool) -> Result<Self, Error> {
        match requested {
            Some(raw) => {
                let path = ResolvedPath::expand(raw)?;
                let file = File::open(&path)
                    .map_err(|source| Error::io(path.to_string(), "cannot open file", source))?;

                Ok(Self::with_handle(
                    path,
                    Some(Handle::File(file)),
                    Format::sniff(raw),
                ))
            }
            None if alternate_source => Ok(Self::with_handle(
                ResolvedPath::default(),
                None,
                Format::default(),
            )),
            None => {
                let mut source = Self::with_handle(
                    ResolvedPath::default(),
                    Some(Handle::Stdin(io::stdin())),
                    Format::default(),
                );
                source.is_pipe = true;
                Ok(source)
            }
        }
    }

    /// Opens and classifies the source described by `options`.
    ///
    /// # Errors
    ///
    /// Any error of [`DataSource::open`] or [`DataSource::classify`].
    pub fn acquire(options: &Options) -> Result<Self, Error> {
        let mut source = Self::open(options.path(), options.alternate_source())?;
        source.classify(
            options.stream_mode(),
            options.hold_stream(),
            options.notify_support(),
        )?;

        Ok(source)
    }

    /// Copies everything currently readable into `writer`.
    ///
    /// Stops at end of stream, or when a non-blocking descriptor has nothing more to give.
    ///
    /// # Errors
    ///
    /// Returns read or write errors other than `WouldBlock` and `Interrupted`,
    /// including the error of reading a source that is not classified.
    pub fn drain_into<W: Write>(&mut self, writer: &mut W) -> io::Result<Drain> {
        let mut buf = [0; DRAIN_BUFFER_SIZE];
        let mut copied = 0;

        loop {
            match self.read(&mut buf) {
                Ok(0) => return Ok(Drain::Finished(copied)),
                Ok(n) => {
                    writer.write_all(&buf[..n])?;
                    copied += n as u64;
                }
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => {
                    return Ok(Drain::Pending(copied));
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    /// Releases the handle. Standard input stays open for the process.
    pub fn close(&mut self) {
        self.handle = None;
        self.state = State::Closed;
    }

    /// Returns the resolved path, or `"-"` for stdin and `"<query>"` for an alternate source.
    pub fn source(&self) -> String {
        if self.is_pipe {
            "-".to_string()
        } else if self.path.is_empty() {
            "<query>".to_string()
        } else {
            self.path.to_string()
        }
    }

    /// Gets the resolved path, empty when no path was given.
    pub const fn path(&self) -> &ResolvedPath {
        &self.path
    }

    /// Gets the open handle, if any.
    pub const fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// Returns true if a stream is open.
    pub const fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Gets the format hint.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Returns true when reading standard input because nothing else was given.
    pub const fn is_pipe(&self) -> bool {
        self.is_pipe
    }

    /// Gets what the open handle was classified as.
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns true when the open handle is a FIFO or pipe.
    pub const fn is_fifo(&self) -> bool {
        matches!(self.kind, Kind::Fifo)
    }

    /// Returns true when the open handle is a regular file.
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, Kind::File)
    }

    /// Returns true when reads on the handle block.
    pub const fn is_blocking(&self) -> bool {
        self.is_blocking
    }

    /// Returns true when the reader must watch for the file shrinking.
    pub const fn detect_truncation(&self) -> bool {
        self.detect_truncation
    }

    /// Size of the file when classified, if truncation detection is on.
    pub const fn last_known_size(&self) -> Option<u64> {
        self.last_known_size
    }

    /// Gets the lifecycle state.
    pub const fn state(&self) -> State {
        self.state
    }
}

/// Reads are only served once classified; an alternate source reads as empty.
impl Read for DataSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.state != State::Classified {
            return Err(io::Error::other(format!("{} source is not readable", self.state)));
        }

        self.handle.as_mut().map_or(Ok(0), |handle| handle.read(buf))
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            Kind::Fifo => "Fifo",
            Kind::File => "File",
            Kind::Other if self.has_handle() => "Stream",
            Kind::Other => "None",
        };

        write!(f, "{kind}({})", self.source())
    }
}
