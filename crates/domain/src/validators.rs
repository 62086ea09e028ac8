// crates/domain/src/validators.rs
use std::slice;

use file_input_shared_kernel::FileSet;
use serde::{Deserialize, Serialize};

/// Structured failure attached to a bound control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    #[serde(rename_all = "camelCase")]
    MaxContentSize { actual_size: u64, max_size: u64 },
    #[serde(rename_all = "camelCase")]
    MinContentSize { actual_size: u64, min_size: u64 },
    /// Failure reported by a validator defined outside this crate.
    Custom { key: String, message: String },
}

impl ValidationError {
    pub fn custom(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Custom { key: key.into(), message: message.into() }
    }

    /// Name under which the failure is stored on a control.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::MaxContentSize { .. } => "maxContentSize",
            Self::MinContentSize { .. } => "minContentSize",
            Self::Custom { key, .. } => key,
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Failures currently attached to a control, at most one per key, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `error`, replacing an earlier failure with the same key.
    pub fn insert(&mut self, error: ValidationError) {
        match self.0.iter_mut().find(|existing| existing.key() == error.key()) {
            Some(existing) => *existing = error,
            None => self.0.push(error),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ValidationError> {
        self.0.iter().find(|error| error.key() == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(ValidationError::key)
    }

    pub fn iter(&self) -> slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Constraint evaluated against the value held by a control.
pub trait Validator {
    fn validate(&self, value: Option<&FileSet>) -> ValidationResult;
}

impl<F> Validator for F
where
    F: Fn(Option<&FileSet>) -> ValidationResult,
{
    fn validate(&self, value: Option<&FileSet>) -> ValidationResult {
        self(value)
    }
}

/// Runs every validator and collects the failures.
pub fn validate_all<'v, I, V>(validators: I, value: Option<&FileSet>) -> ValidationErrors
where
    I: IntoIterator<Item = &'v V>,
    V: Validator + ?Sized + 'v,
{
    validators.into_iter().filter_map(|validator| validator.validate(value).err()).collect()
}

/// Aggregate-size constraints for file selections.
///
/// Neither constraint applies when nothing is selected.
pub struct FileValidators;

impl FileValidators {
    #[must_use]
    pub fn max_content_size(max_size: u64) -> MaxContentSize {
        MaxContentSize { max_size }
    }

    #[must_use]
    pub fn min_content_size(min_size: u64) -> MinContentSize {
        MinContentSize { min_size }
    }
}

/// Fails when the selection's total size exceeds `max_size` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxContentSize {
    pub max_size: u64,
}

impl Validator for MaxContentSize {
    fn validate(&self, value: Option<&FileSet>) -> ValidationResult {
        let Some(actual_size) = selected_size(value) else {
            return Ok(());
        };
        if actual_size > self.max_size {
            return Err(ValidationError::MaxContentSize { actual_size, max_size: self.max_size });
        }
        Ok(())
    }
}

/// Fails when the selection's total size is below `min_size` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinContentSize {
    pub min_size: u64,
}

impl Validator for MinContentSize {
    fn validate(&self, value: Option<&FileSet>) -> ValidationResult {
        let Some(actual_size) = selected_size(value) else {
            return Ok(());
        };
        if actual_size < self.min_size {
            return Err(ValidationError::MinContentSize { actual_size, min_size: self.min_size });
        }
        Ok(())
    }
}

fn selected_size(value: Option<&FileSet>) -> Option<u64> {
    value.filter(|set| !set.is_empty()).map(|set| set.total_size().bytes())
}
