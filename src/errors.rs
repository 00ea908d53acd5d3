//! Error handling for the trustboard service.
//!
//! The classification core itself is total and cannot fail; these types
//! cover the surrounding service (configuration, lookups, locks, I/O) and
//! their HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the trustboard service
#[derive(Error, Debug)]
pub enum TrustboardError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {resource} - {id}")]
    NotFound { resource: String, id: String },

    #[error("Lock poisoned: {resource}")]
    LockPoisoned { resource: String },

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Shorthand for Result with TrustboardError
pub type TrustboardResult<T> = Result<T, TrustboardError>;

impl TrustboardError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for TrustboardError {
    fn into_response(self) -> Response {
        let status = match self {
            TrustboardError::Config { .. }
            | TrustboardError::Serialization { .. }
            | TrustboardError::Validation { .. } => StatusCode::BAD_REQUEST,
            TrustboardError::NotFound { .. } => StatusCode::NOT_FOUND,
            TrustboardError::LockPoisoned { .. }
            | TrustboardError::Io { .. }
            | TrustboardError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = axum::Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Helper trait for safe RwLock read operations
pub trait SafeReadLock<T: ?Sized> {
    /// Safely acquire a read lock, returning a TrustboardError on poison
    fn safe_read(&self) -> TrustboardResult<std::sync::RwLockReadGuard<'_, T>>;
}

impl<T: ?Sized> SafeReadLock<T> for std::sync::RwLock<T> {
    fn safe_read(&self) -> TrustboardResult<std::sync::RwLockReadGuard<'_, T>> {
        self.read().map_err(|_| TrustboardError::LockPoisoned {
            resource: "rwlock_read".to_string(),
        })
    }
}

/// Convert from serde_json errors
impl From<serde_json::Error> for TrustboardError {
    fn from(err: serde_json::Error) -> Self {
        TrustboardError::serialization("json_operation", err)
    }
}

/// Convert from std::io errors
impl From<std::io::Error> for TrustboardError {
    fn from(err: std::io::Error) -> Self {
        TrustboardError::io("io_operation", err)
    }
}

/// Convert from figment errors
impl From<figment::Error> for TrustboardError {
    fn from(err: figment::Error) -> Self {
        TrustboardError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TrustboardError::config("missing configuration file");
        assert!(config_err.to_string().contains("Configuration error"));

        let lookup_err = TrustboardError::not_found("source", "SRC-999");
        assert!(lookup_err.to_string().contains("SRC-999"));
    }

    #[test]
    fn test_error_chaining() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let board_err = TrustboardError::io("reading config", io_err);

        assert!(board_err.source().is_some());
        assert!(board_err.to_string().contains("I/O operation failed"));
    }

    #[test]
    fn test_safe_read_lock() {
        let lock = std::sync::RwLock::new(5_u32);
        let guard = lock.safe_read().expect("lock should not be poisoned");
        assert_eq!(*guard, 5);
    }
}
