//! # Infrastructure
//!
//! In-process implementations of the port traits plus filesystem helpers:
//!
//! - [`forms`]: a form-control model and its parent form
//! - [`element`]: a headless native file element
//! - [`focus`]: a focus monitor fed by explicit calls
//! - [`filesystem`]: selections built from paths on disk
//! - [`persistence`]: formatter configuration files

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod element;
pub mod filesystem;
pub mod focus;
pub mod forms;
pub mod persistence;

pub use element::InMemoryFileElement;
pub use filesystem::{file_handle_from_path, selection_from_paths};
pub use focus::ManualFocusMonitor;
pub use forms::{FormControl, ParentForm};
pub use persistence::{ConfigFormat, FileReader, load_config, parse_config};
