use std::path::Path;

use tabular_source::{HoldStream, Options, Serialization};

#[test]
fn test_options_default() {
    let options = Options::default();
    assert_eq!(options.path(), None);
    assert!(!options.alternate_source());
    assert!(!options.stream_mode());
    assert_eq!(options.hold_stream(), HoldStream::Default);
    assert!(!options.notify_support());
}

#[test]
fn test_options_builders() {
    let options = Options::default()
        .with_path("~/table.tsv")
        .with_alternate_source(true)
        .with_stream_mode(true)
        .with_hold_stream(HoldStream::Never)
        .with_notify_support(true);

    assert_eq!(options.path(), Some(Path::new("~/table.tsv")));
    assert!(options.alternate_source());
    assert!(options.stream_mode());
    assert_eq!(options.hold_stream(), HoldStream::Never);
    assert!(options.notify_support());
}

#[test]
fn test_options_new_matches_builders() {
    let built = Options::default()
        .with_path("data.csv")
        .with_hold_stream(HoldStream::Reopen);
    let new = Options::new(
        Some("data.csv".into()),
        false,
        false,
        HoldStream::Reopen,
        false,
    );
    assert_eq!(built, new);
}

#[test]
fn test_options_display() {
    let options = Options::default().with_stream_mode(true);
    assert_eq!(
        options.to_string(),
        "Options { path: -, alternate_source: false, stream_mode: true, hold_stream: default, notify_support: false }"
    );
}

#[test]
fn test_options_serialize_json() {
    let options = Options::default()
        .with_path("feed")
        .with_hold_stream(HoldStream::Reopen);
    let json = serde_json::to_string(&options).expect("serialize");
    assert_eq!(
        json,
        r#"{"path":"feed","alternateSource":false,"streamMode":false,"holdStream":"reopen","notifySupport":false}"#
    );

    let parsed: Options = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, options);
}

#[test]
fn test_hold_stream_parse_lenient() {
    assert_eq!(HoldStream::parse_lenient("reopen"), HoldStream::Reopen);
    assert_eq!(HoldStream::parse_lenient(" REOPEN "), HoldStream::Reopen);
    assert_eq!(HoldStream::parse_lenient("Never"), HoldStream::Never);
    assert_eq!(HoldStream::parse_lenient("2"), HoldStream::Default);
    assert_eq!(HoldStream::parse_lenient(""), HoldStream::Default);
}

#[test]
fn test_hold_stream_display() {
    assert_eq!(HoldStream::Default.to_string(), "default");
    assert_eq!(HoldStream::Never.to_string(), "never");
    assert_eq!(HoldStream::Reopen.to_string(), "reopen");
}

#[test]
fn test_serialization_display() {
    assert_eq!(Serialization::default(), Serialization::Text);
    assert_eq!(Serialization::Text.to_string(), "text");
    assert_eq!(Serialization::Csv.to_string(), "csv");
}
