// crates/ports/src/form.rs
use file_input_domain::{ControlStatus, ErrorStateMatcher, FormContext};
use file_input_shared_kernel::FileSet;

/// Callback the form framework registers to receive view → model updates.
pub type OnChange = Box<dyn FnMut(Option<&FileSet>)>;

/// Callback the form framework registers to learn the control was left.
pub type OnTouched = Box<dyn FnMut()>;

/// Contract a control implements to plug into a form binding.
pub trait ControlValueAccessor {
    /// Model → view write. Never reported back through the change callback.
    fn write_value(&mut self, value: Option<FileSet>);

    fn register_on_change(&mut self, callback: OnChange);

    fn register_on_touched(&mut self, callback: OnTouched);

    fn set_disabled_state(&mut self, disabled: bool);
}

/// Form-side state of the control a value accessor is bound to.
pub trait FormBinding {
    fn status(&self) -> ControlStatus;

    fn form_context(&self) -> Option<FormContext>;

    /// Runs `matcher` against the current state. Implementors holding the
    /// state behind a borrow should override this to avoid the snapshot copy.
    fn evaluate_error_state(&self, matcher: &dyn ErrorStateMatcher) -> bool {
        let status = self.status();
        let form = self.form_context();
        matcher.is_error_state(Some(&status), form.as_ref())
    }
}
