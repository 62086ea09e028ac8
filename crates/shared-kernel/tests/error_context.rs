// crates/shared-kernel/tests/error_context.rs
use std::{io, path::PathBuf};

use file_input_shared_kernel::{ErrorContext, FileInputError, InfrastructureError};

fn unreadable() -> std::result::Result<(), InfrastructureError> {
    Err(InfrastructureError::FileRead { path: PathBuf::from("config.json"), source: io::Error::other("root-io") })
}

#[test]
fn context_wraps_and_formats() {
    let err = unreadable().context("loading formatter defaults").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("loading formatter defaults"));
    assert!(display.contains("Infrastructure error:"));
    assert!(display.contains("config.json"));
}

#[test]
fn with_context_is_lazy_and_nests() {
    let err = unreadable()
        .with_context(|| "inner".to_string())
        .with_context(|| "outer".to_string())
        .unwrap_err();

    let FileInputError::Context { context, source } = err else {
        panic!("expected context");
    };
    assert_eq!(context, "outer");
    assert!(matches!(*source, FileInputError::Context { ref context, .. } if context == "inner"));
}

#[test]
fn unknown_units_are_domain_errors() {
    let err: FileInputError = "PB".parse::<file_input_shared_kernel::ByteUnit>().unwrap_err().into();
    assert!(err.to_string().starts_with("Domain error: Unknown byte unit 'PB'"));
}
