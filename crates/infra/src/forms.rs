// crates/infra/src/forms.rs
use std::{
    cell::{Cell, Ref, RefCell},
    rc::Rc,
};

use file_input_domain::{ControlStatus, ErrorStateMatcher, FormContext, ValidationErrors, Validator, validate_all};
use file_input_ports::{ControlValueAccessor, FormBinding};
use file_input_shared_kernel::FileSet;
use log::trace;

/// Submission state shared by every control of one form.
#[derive(Debug, Clone, Default)]
pub struct ParentForm {
    submitted: Rc<Cell<bool>>,
}

impl ParentForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&self) {
        self.submitted.set(true);
    }

    pub fn reset(&self) {
        self.submitted.set(false);
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted.get()
    }
}

struct FormControlState {
    value: Option<FileSet>,
    status: ControlStatus,
    disabled: bool,
    validators: Vec<Box<dyn Validator>>,
    parent: Option<ParentForm>,
}

impl FormControlState {
    fn revalidate(&mut self) {
        self.status.errors = if self.disabled {
            ValidationErrors::new()
        } else {
            validate_all(self.validators.iter().map(Box::as_ref), self.value.as_ref())
        };
    }
}

/// Model side of a form field holding a file selection.
///
/// Cheap to clone; clones share the same state. Validators run on every
/// value change, the control itself latches `touched` and `dirty`.
#[derive(Clone)]
pub struct FormControl {
    state: Rc<RefCell<FormControlState>>,
}

impl FormControl {
    pub fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        let mut state = FormControlState {
            value: None,
            status: ControlStatus::default(),
            disabled: false,
            validators,
            parent: None,
        };
        state.revalidate();
        Self { state: Rc::new(RefCell::new(state)) }
    }

    /// Attaches the control to a form whose submission state matchers may consult.
    #[must_use]
    pub fn with_parent(self, parent: ParentForm) -> Self {
        self.state.borrow_mut().parent = Some(parent);
        self
    }

    pub fn add_validator(&self, validator: Box<dyn Validator>) {
        let mut state = self.state.borrow_mut();
        state.validators.push(validator);
        state.revalidate();
    }

    /// Wires `accessor` to this control: pushes the current value down and
    /// registers the change and touched callbacks.
    pub fn connect(&self, accessor: &mut dyn ControlValueAccessor) {
        let (value, disabled) = {
            let state = self.state.borrow();
            (state.value.clone(), state.disabled)
        };
        accessor.write_value(value);
        if disabled {
            accessor.set_disabled_state(true);
        }

        let state = Rc::clone(&self.state);
        accessor.register_on_change(Box::new(move |value| {
            let mut state = state.borrow_mut();
            state.value = value.cloned();
            state.status.dirty = true;
            state.revalidate();
            trace!("form control: view changed, {} error(s)", state.status.errors.len());
        }));

        let state = Rc::clone(&self.state);
        accessor.register_on_touched(Box::new(move || state.borrow_mut().status.touched = true));
    }

    /// Model-side write, mirrored to `accessor`. Does not mark the control dirty.
    pub fn set_value(&self, value: Option<FileSet>, accessor: &mut dyn ControlValueAccessor) {
        {
            let mut state = self.state.borrow_mut();
            state.value.clone_from(&value);
            state.revalidate();
        }
        accessor.write_value(value);
    }

    pub fn set_disabled(&self, disabled: bool, accessor: &mut dyn ControlValueAccessor) {
        {
            let mut state = self.state.borrow_mut();
            state.disabled = disabled;
            state.revalidate();
        }
        accessor.set_disabled_state(disabled);
    }

    /// Empties the value and forgets user interaction.
    pub fn reset(&self, accessor: &mut dyn ControlValueAccessor) {
        {
            let mut state = self.state.borrow_mut();
            state.value = None;
            state.status.touched = false;
            state.status.dirty = false;
            state.revalidate();
        }
        accessor.write_value(None);
    }

    #[must_use]
    pub fn value(&self) -> Option<FileSet> {
        self.state.borrow().value.clone()
    }

    pub fn errors(&self) -> Ref<'_, ValidationErrors> {
        Ref::map(self.state.borrow(), |state| &state.status.errors)
    }

    #[must_use]
    pub fn has_error(&self, key: &str) -> bool {
        self.state.borrow().status.errors.contains(key)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.state.borrow().status.is_invalid()
    }

    #[must_use]
    pub fn touched(&self) -> bool {
        self.state.borrow().status.touched
    }

    #[must_use]
    pub fn dirty(&self) -> bool {
        self.state.borrow().status.dirty
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    pub fn mark_as_touched(&self) {
        self.state.borrow_mut().status.touched = true;
    }

    pub fn mark_as_dirty(&self) {
        self.state.borrow_mut().status.dirty = true;
    }
}

impl FormBinding for FormControl {
    fn status(&self) -> ControlStatus {
        self.state.borrow().status.clone()
    }

    fn form_context(&self) -> Option<FormContext> {
        let state = self.state.borrow();
        state.parent.as_ref().map(|parent| FormContext { submitted: parent.is_submitted() })
    }

    fn evaluate_error_state(&self, matcher: &dyn ErrorStateMatcher) -> bool {
        let state = self.state.borrow();
        let form = state.parent.as_ref().map(|parent| FormContext { submitted: parent.is_submitted() });
        matcher.is_error_state(Some(&state.status), form.as_ref())
    }
}

impl std::fmt::Debug for FormControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FormControl")
            .field("value", &state.value)
            .field("status", &state.status)
            .field("disabled", &state.disabled)
            .field("validators", &state.validators.len())
            .finish_non_exhaustive()
    }
}
