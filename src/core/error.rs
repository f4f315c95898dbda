//! Core error types with error code system

use thiserror::Error;

pub use super::error_code::*;
use super::types::TypeInfo;

/// Opaque error raised by a host callable while it was being invoked
///
/// `kind` is the host's exception class name (e.g. `ValueError`), `message` its text.
/// The evaluator never inspects or rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct HostError {
    pub kind: String,
    pub message: String,
}

impl HostError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new("TypeError", message)
    }

    pub fn value_error(message: impl Into<String>) -> Self {
        Self::new("ValueError", message)
    }
}

/// Main error type for the evaluator and the extension module
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgorithmError {
    /// The collection argument does not support iteration
    #[error("{code}: parameter {parameter} does not support iteration (got {actual})", code = AO0001)]
    TypeMismatch {
        parameter: String,
        actual: TypeInfo,
    },

    /// The predicate argument cannot be invoked
    #[error("{code}: parameter {parameter} must be a callable (got {actual})", code = AO0002)]
    NotCallable {
        parameter: String,
        actual: TypeInfo,
    },

    /// The predicate itself failed; rendered exactly as the host error
    #[error("{0}")]
    Predicate(#[from] HostError),

    /// Strict truthiness rejected a predicate result
    #[error("{code}: predicate returned {actual} for element {index}, expected bool", code = AO0052)]
    NonBooleanResult {
        index: usize,
        actual: TypeInfo,
    },

    /// Wrong number of positional arguments
    #[error("{code}: {name}() expects {} arguments, got {actual}", describe_arity(.min, .max), code = AO0101)]
    InvalidArity {
        name: String,
        min: usize,
        /// Maximum arguments (None for unlimited)
        max: Option<usize>,
        actual: usize,
    },

    /// No method registered under this name
    #[error("{code}: module has no method '{name}'", code = AO0102)]
    UnknownFunction { name: String },
}

fn describe_arity(min: &usize, max: &Option<usize>) -> String {
    match max {
        Some(max) if max == min => min.to_string(),
        Some(max) => format!("{min}-{max}"),
        None => format!("at least {min}"),
    }
}

impl AlgorithmError {
    pub fn type_mismatch(parameter: impl Into<String>, actual: TypeInfo) -> Self {
        Self::TypeMismatch {
            parameter: parameter.into(),
            actual,
        }
    }

    pub fn not_callable(parameter: impl Into<String>, actual: TypeInfo) -> Self {
        Self::NotCallable {
            parameter: parameter.into(),
            actual,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::TypeMismatch { .. } => AO0001,
            Self::NotCallable { .. } => AO0002,
            Self::Predicate(_) => AO0051,
            Self::NonBooleanResult { .. } => AO0052,
            Self::InvalidArity { .. } => AO0101,
            Self::UnknownFunction { .. } => AO0102,
        }
    }

    /// Get error information with help text
    pub fn error_info(&self) -> &'static ErrorInfo {
        self.error_code().info()
    }

    /// The host error raised by the predicate, if that is what failed
    pub fn host_error(&self) -> Option<&HostError> {
        match self {
            Self::Predicate(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for evaluator and module operations
pub type Result<T> = std::result::Result<T, AlgorithmError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_type_mismatch_message() {
        let err = AlgorithmError::type_mismatch("collection", TypeInfo::Int);
        assert_eq!(
            err.to_string(),
            "AO0001: parameter collection does not support iteration (got int)"
        );
        assert_eq!(err.error_code(), AO0001);
    }

    #[test]
    fn test_predicate_error_is_unmodified() {
        let host = HostError::value_error("boom");
        let err = AlgorithmError::from(host.clone());
        assert_eq!(err.to_string(), host.to_string());
        assert_eq!(err.host_error(), Some(&host));
        assert_eq!(err.source().map(|s| s.to_string()), Some(host.to_string()));
    }

    #[test]
    fn test_arity_message() {
        let exact = AlgorithmError::InvalidArity {
            name: "all_of_impl".to_string(),
            min: 2,
            max: Some(2),
            actual: 1,
        };
        assert_eq!(
            exact.to_string(),
            "AO0101: all_of_impl() expects 2 arguments, got 1"
        );

        let open = AlgorithmError::InvalidArity {
            name: "f".to_string(),
            min: 1,
            max: None,
            actual: 0,
        };
        assert!(open.to_string().contains("at least 1"));
    }
}
