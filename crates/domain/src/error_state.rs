// crates/domain/src/error_state.rs
use crate::validators::ValidationErrors;

/// Snapshot of the form-side state of a bound control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlStatus {
    pub errors: ValidationErrors,
    /// Latched once the user has left the control.
    pub touched: bool,
    /// Latched once the user has changed the value.
    pub dirty: bool,
}

impl ControlStatus {
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// State of the form that contains the control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormContext {
    pub submitted: bool,
}

/// Decides when a bound control reports itself as invalid.
pub trait ErrorStateMatcher {
    fn is_error_state(&self, control: Option<&ControlStatus>, form: Option<&FormContext>) -> bool;
}

/// Invalid once the control has been touched and carries at least one error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorStateMatcher;

impl ErrorStateMatcher for DefaultErrorStateMatcher {
    fn is_error_state(&self, control: Option<&ControlStatus>, _form: Option<&FormContext>) -> bool {
        control.is_some_and(|status| status.touched && status.is_invalid())
    }
}

/// Invalid as soon as the value was changed, or the form was submitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOnDirtyErrorStateMatcher;

impl ErrorStateMatcher for ShowOnDirtyErrorStateMatcher {
    fn is_error_state(&self, control: Option<&ControlStatus>, form: Option<&FormContext>) -> bool {
        let submitted = form.is_some_and(|form| form.submitted);
        control.is_some_and(|status| status.is_invalid() && (status.dirty || submitted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::ValidationError;

    fn status(errors: usize, touched: bool, dirty: bool) -> ControlStatus {
        let errors = (0..errors).map(|i| ValidationError::custom(format!("e{i}"), "failed")).collect();
        ControlStatus { errors, touched, dirty }
    }

    #[test]
    fn default_requires_touched_and_errors() {
        let matcher = DefaultErrorStateMatcher;
        assert!(!matcher.is_error_state(None, None));
        assert!(!matcher.is_error_state(Some(&status(0, true, false)), None));
        assert!(!matcher.is_error_state(Some(&status(1, false, true)), None));
        assert!(matcher.is_error_state(Some(&status(1, true, false)), None));
    }

    #[test]
    fn dirty_matcher_honours_submission() {
        let matcher = ShowOnDirtyErrorStateMatcher;
        let submitted = FormContext { submitted: true };
        assert!(!matcher.is_error_state(Some(&status(1, true, false)), None));
        assert!(matcher.is_error_state(Some(&status(1, false, true)), None));
        assert!(matcher.is_error_state(Some(&status(1, false, false)), Some(&submitted)));
        assert!(!matcher.is_error_state(Some(&status(0, false, true)), Some(&submitted)));
    }
}
