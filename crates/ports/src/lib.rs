//! # Ports
//!
//! Interface definitions for the collaborators around the file input.
//!
//! - [`native`]: the platform file element and its chooser dialog
//! - [`focus`]: focus monitoring of the host element
//! - [`form`]: form-framework bindings (value accessor, binding state)
//! - [`field`]: the contract consumed by labels, hints and error chrome
//!
//! The control in the use-case layer implements the accessor and field
//! contracts and depends on the others only through these traits.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod field;
pub mod focus;
pub mod form;
pub mod native;

pub use field::{FormFieldControl, SubscriptionId};
pub use focus::{FocusEvents, FocusMonitor, FocusOrigin};
pub use form::{ControlValueAccessor, FormBinding, OnChange, OnTouched};
pub use native::{ClearEvent, ClickTarget, NativeFileElement};
