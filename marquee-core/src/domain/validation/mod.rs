//! Validation primitives shared by every aggregate.
//!
//! Validators report problems through a [`ValidationHandler`]. The handler
//! decides whether a problem stops the pass ([`ThrowsValidationHandler`]) or is
//! collected for later inspection ([`Notification`]). Validators always call
//! `handler.append(..)?` so the same rule code serves both strategies.

mod notification;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

pub use notification::Notification;

/// A single validation problem described by a human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for ValidationError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

pub trait ValidationHandler: Send {
    /// Record one error. Returns `Err` when the handler aborts the pass.
    fn append(&mut self, error: ValidationError) -> Result<()>;

    /// Record every error held by another handler, preserving order.
    fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<()> {
        for error in other.errors() {
            self.append(error.clone())?;
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError];

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Fail-fast handler: the first appended error aborts validation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<()> {
        Err(CatalogError::single(error))
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}

/// Anything that can check itself against a handler.
pub trait Validate {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<()>;
}
