// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, FileInputError, InfraResult, InfrastructureError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{ByteUnit, FileHandle, FileName, FileSet, FileSize, ModificationTime};
