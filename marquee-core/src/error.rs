use thiserror::Error;

use crate::domain::validation::{Notification, ValidationError};

#[derive(Error, Debug)]
pub enum CatalogError {
    /// One or more field or reference rules were violated. Carries every
    /// error collected during the pass, in the order they were found.
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<ValidationError>,
    },

    #[error("{0}")]
    NotFound(String),

    /// Infrastructure failure the caller cannot recover from.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

impl CatalogError {
    pub fn validation(
        message: impl Into<String>,
        notification: Notification,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            errors: notification.into_errors(),
        }
    }

    pub fn single(error: ValidationError) -> Self {
        Self::Validation {
            message: error.message().to_string(),
            errors: vec![error],
        }
    }

    pub fn internal(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Validation errors carried by this failure; empty for other kinds.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
