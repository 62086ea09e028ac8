// crates/usecase/src/base.rs
use std::rc::Rc;

use file_input_domain::{DefaultErrorStateMatcher, ErrorStateMatcher};
use file_input_ports::{FormBinding, OnChange, OnTouched};
use file_input_shared_kernel::FileSet;
use log::trace;

use crate::state_changes::StateChanges;

/// Plumbing every form field control needs, embedded by value.
///
/// Owns the change stream, the derived error-state flag with its matchers,
/// the attached form binding, and the callbacks registered through the value
/// accessor contract.
pub struct FormControlBase {
    state_changes: StateChanges,
    error_state: bool,
    default_matcher: Rc<dyn ErrorStateMatcher>,
    matcher_override: Option<Rc<dyn ErrorStateMatcher>>,
    binding: Option<Rc<dyn FormBinding>>,
    on_change: OnChange,
    on_touched: OnTouched,
}

impl FormControlBase {
    /// `default_matcher` is the form framework's ambient policy.
    pub fn new(default_matcher: Rc<dyn ErrorStateMatcher>) -> Self {
        Self {
            state_changes: StateChanges::new(),
            error_state: false,
            default_matcher,
            matcher_override: None,
            binding: None,
            on_change: Box::new(|_| {}),
            on_touched: Box::new(|| {}),
        }
    }

    #[must_use]
    pub fn state_changes(&self) -> &StateChanges {
        &self.state_changes
    }

    #[must_use]
    pub fn error_state(&self) -> bool {
        self.error_state
    }

    /// Local matcher; takes precedence over the default one while set.
    pub fn set_error_state_matcher(&mut self, matcher: Option<Rc<dyn ErrorStateMatcher>>) {
        self.matcher_override = matcher;
    }

    #[must_use]
    pub fn error_state_matcher(&self) -> &dyn ErrorStateMatcher {
        self.matcher_override.as_deref().unwrap_or(&*self.default_matcher)
    }

    pub fn set_binding(&mut self, binding: Option<Rc<dyn FormBinding>>) {
        self.binding = binding;
    }

    #[must_use]
    pub fn binding(&self) -> Option<&Rc<dyn FormBinding>> {
        self.binding.as_ref()
    }

    /// Re-evaluates the error state; publishes one change when it flipped.
    ///
    /// Runs on every inspection cycle, so it only compares booleans.
    pub fn update_error_state(&mut self) -> bool {
        let Some(binding) = &self.binding else {
            return false;
        };
        let current = binding.evaluate_error_state(self.error_state_matcher());
        if current == self.error_state {
            return false;
        }
        trace!("error state {} -> {}", self.error_state, current);
        self.error_state = current;
        self.state_changes.next();
        true
    }

    pub fn register_on_change(&mut self, callback: OnChange) {
        self.on_change = callback;
    }

    pub fn register_on_touched(&mut self, callback: OnTouched) {
        self.on_touched = callback;
    }

    pub fn notify_change(&mut self, value: Option<&FileSet>) {
        (self.on_change)(value);
    }

    pub fn notify_touched(&mut self) {
        (self.on_touched)();
    }
}

impl Default for FormControlBase {
    fn default() -> Self {
        Self::new(Rc::new(DefaultErrorStateMatcher))
    }
}

impl std::fmt::Debug for FormControlBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormControlBase")
            .field("state_changes", &self.state_changes)
            .field("error_state", &self.error_state)
            .field("has_matcher_override", &self.matcher_override.is_some())
            .field("bound", &self.binding.is_some())
            .finish_non_exhaustive()
    }
}
