//! # Use Cases
//!
//! The interactive file input and the building blocks it is composed of:
//!
//! - [`state_changes`]: synchronous multicast change signal
//! - [`base`]: form-control plumbing shared by form field controls
//!   (error state, matcher selection, accessor callbacks)
//! - [`control`]: the file input state machine
//!
//! Use cases depend on domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod base;
pub mod control;
pub mod state_changes;

pub use base::FormControlBase;
pub use control::{CONTROL_TYPE, FileInputControl};
pub use state_changes::StateChanges;
