//! # Domain
//!
//! Pure logic of the file input: byte formatting, content-size validation,
//! and the policies deciding when a bound control reports an error.

#![allow(clippy::multiple_crate_versions)]

pub mod bytes;
pub mod config;
pub mod error_state;
pub mod validators;

pub use bytes::{BytesFormatter, FormatOutcome, FormatRequest, NumericArg, UnitArg, select_unit, to_bytes};
pub use config::{FileInputConfig, FileInputConfigBuilder};
pub use error_state::{
    ControlStatus, DefaultErrorStateMatcher, ErrorStateMatcher, FormContext, ShowOnDirtyErrorStateMatcher,
};
pub use validators::{
    FileValidators, MaxContentSize, MinContentSize, ValidationError, ValidationErrors, ValidationResult, Validator,
    validate_all,
};
