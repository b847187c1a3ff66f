//! Error context extension tests

use fivcglue_domain::Error;
use fivcglue_infrastructure::ErrorContext;
use std::io;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = failing().context("Loading plugins").unwrap_err();

    assert!(matches!(err, Error::Infrastructure { source: Some(_), .. }));
    assert!(err.to_string().contains("Loading plugins: no such file"));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 1);
}

#[test]
fn test_typed_contexts() {
    assert!(matches!(
        failing().io_context("reading").unwrap_err(),
        Error::Io { .. }
    ));
    assert!(matches!(
        failing().config_context("parsing").unwrap_err(),
        Error::Configuration { .. }
    ));
}
