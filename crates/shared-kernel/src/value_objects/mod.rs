// crates/shared-kernel/src/value_objects/mod.rs
pub mod byte_unit;
pub mod file_info;
pub mod file_set;

pub use byte_unit::ByteUnit;
pub use file_info::{FileName, FileSize, ModificationTime};
pub use file_set::{FileHandle, FileSet};
