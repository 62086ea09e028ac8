//! # file_input
//!
//! A form control for selecting files, a byte-size formatter, and aggregate
//! size validators.
//!
//! The workspace is layered; this crate re-exports the public surface of
//! every layer and adds [`bind`] to wire a control to a form model.
//!
//! ```
//! use file_input::prelude::*;
//!
//! let formatter = BytesFormatter::new();
//! assert_eq!(formatter.format(1024).to_string(), "1 kB");
//! assert_eq!(formatter.format("test").to_string(), "test");
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::rc::Rc;

pub use file_input_domain as domain;
pub use file_input_infra as infra;
pub use file_input_ports as ports;
pub use file_input_shared_kernel as shared_kernel;
pub use file_input_usecase as usecase;

pub use file_input_domain::{
    BytesFormatter, ControlStatus, DefaultErrorStateMatcher, ErrorStateMatcher, FileInputConfig,
    FileInputConfigBuilder, FileValidators, FormContext, FormatOutcome, MaxContentSize, MinContentSize,
    NumericArg, ShowOnDirtyErrorStateMatcher, UnitArg, ValidationError, ValidationErrors, Validator, to_bytes,
};
pub use file_input_infra::{
    FormControl, InMemoryFileElement, ManualFocusMonitor, ParentForm, load_config, selection_from_paths,
};
pub use file_input_shared_kernel::{
    ByteUnit, DomainError, ErrorContext, FileHandle, FileInputError, FileName, FileSet, FileSize,
    InfrastructureError, ModificationTime, Result,
};
pub use file_input_usecase::{CONTROL_TYPE, FileInputControl, StateChanges};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connects `control` to the form model `form`.
///
/// The control receives the form's current value and reports view changes
/// and blur back to it; its error state is then computed from `form` on
/// every [`FileInputControl::do_check`].
pub fn bind(control: &mut FileInputControl, form: &FormControl) {
    form.connect(control);
    control.set_binding(Some(Rc::new(form.clone())));
}

/// The types most hosts need, for glob import.
pub mod prelude {
    pub use file_input_ports::{
        ClearEvent, ClickTarget, ControlValueAccessor, FocusMonitor, FocusOrigin, FormBinding, FormFieldControl,
        NativeFileElement,
    };

    pub use crate::{
        ByteUnit, BytesFormatter, FileHandle, FileInputConfig, FileInputControl, FileSet, FileValidators,
        FormControl, FormatOutcome, InMemoryFileElement, ManualFocusMonitor, ParentForm, ValidationError, bind,
    };
}
