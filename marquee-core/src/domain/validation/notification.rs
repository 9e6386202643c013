use super::{ValidationError, ValidationHandler};
use crate::error::Result;

/// Accumulating handler: records every error in the order appended and never
/// aborts the pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn with_error(error: impl Into<ValidationError>) -> Self {
        Self {
            errors: vec![error.into()],
        }
    }

    /// Record an error without going through the handler trait.
    pub fn push(&mut self, error: impl Into<ValidationError>) {
        self.errors.push(error.into());
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(ValidationError::message)
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<()> {
        self.errors.push(error);
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
