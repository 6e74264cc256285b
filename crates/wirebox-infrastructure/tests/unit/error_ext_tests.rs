//! Error context extension tests

use std::io;

use wirebox_domain::Error;
use wirebox_infrastructure::ErrorContext;

#[test]
fn test_context_wraps_source() {
    let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
    let error = result.context("Failed to read config").unwrap_err();

    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Failed to read config: gone");
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(3);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 3);
}
