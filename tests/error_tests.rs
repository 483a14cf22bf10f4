use std::io;

use tabular_source::{Error, ErrorClass};

fn io_error(kind: io::ErrorKind) -> Error {
    Error::Io {
        path: "/data/table.csv".to_string(),
        message: "cannot open file".to_string(),
        source: io::Error::new(kind, "test I/O error"),
    }
}

#[test]
fn test_io_error_display() {
    let err = io_error(io::ErrorKind::NotFound);
    assert_eq!(
        err.to_string(),
        "cannot open file \"/data/table.csv\" (test I/O error)"
    );
}

#[test]
fn test_io_error_is_recoverable() {
    let err = io_error(io::ErrorKind::PermissionDenied);
    assert_eq!(err.class(), ErrorClass::Recoverable);
    assert!(!err.is_fatal());
    assert_eq!(err.errno(), None);
}

#[test]
fn test_io_error_errno() {
    let err = Error::Io {
        path: String::new(),
        message: "cannot get status of file".to_string(),
        source: io::Error::from_raw_os_error(libc::EBADF),
    };
    assert_eq!(err.errno(), Some(libc::EBADF));
    assert!(err.to_string().starts_with("cannot get status of file \"\" ("));
}

#[test]
fn test_error_source_chain() {
    let err = io_error(io::ErrorKind::NotFound);
    let source = std::error::Error::source(&err).expect("has a source");
    assert_eq!(source.to_string(), "test I/O error");
}

#[test]
fn test_fatal_errors() {
    assert_eq!(Error::HomeUnset.class(), ErrorClass::Fatal);

    let err = Error::StreamingWithoutNotify {
        path: "/data/table.csv".to_string(),
    };
    assert!(err.is_fatal());
    assert_eq!(ErrorClass::Fatal.to_string(), "fatal");
    assert_eq!(ErrorClass::Recoverable.to_string(), "recoverable");
}
