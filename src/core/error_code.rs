//! Error code system in the style of the Rust compiler (E0001, E0002, ...)
//!
//! Every [`AlgorithmError`](super::AlgorithmError) carries one of the `AO0001`-style
//! codes defined here. Codes are grouped by category:
//! argument validation (AO0001-AO0050), evaluation (AO0051-AO0100) and
//! module dispatch (AO0101-AO0150).

use std::fmt;

/// Error categories for organizing error codes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Argument validation errors (AO0001-AO0050)
    Argument,
    /// Evaluation errors (AO0051-AO0100)
    Evaluation,
    /// Module dispatch errors (AO0101-AO0150)
    Registry,
}

/// Error code following the Rust compiler pattern (AO0001, AO0002, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub code: u16,
}

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self { code }
    }

    /// Get the full error code string (e.g., "AO0001")
    pub fn code_str(&self) -> String {
        format!("AO{:04}", self.code)
    }

    /// Get error information from the registry
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_REGISTRY.get_error_info(self)
    }

    pub fn category(&self) -> ErrorCategory {
        match self.code {
            1..=50 => ErrorCategory::Argument,
            51..=100 => ErrorCategory::Evaluation,
            _ => ErrorCategory::Registry,
        }
    }

    /// Get human-readable description for this error code
    pub fn description(&self) -> &'static str {
        self.info().title
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AO{:04}", self.code)
    }
}

/// Error information with help text
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Error code number
    pub code: u16,
    /// Human-readable error title
    pub title: &'static str,
    /// Detailed description of the error
    pub description: &'static str,
    /// Help information and suggested solutions
    pub help: &'static str,
}

impl ErrorInfo {
    pub const fn new(
        code: u16,
        title: &'static str,
        description: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            code,
            title,
            description,
            help,
        }
    }
}

/// Central error registry containing all error definitions
pub struct ErrorRegistry;

impl ErrorRegistry {
    /// Get error information for a given error code
    pub fn get_error_info(&self, error_code: &ErrorCode) -> &'static ErrorInfo {
        match error_code.code {
            // Argument Errors (AO0001-AO0050)
            1 => &AO0001_INFO,
            2 => &AO0002_INFO,

            // Evaluation Errors (AO0051-AO0100)
            51 => &AO0051_INFO,
            52 => &AO0052_INFO,

            // Registry Errors (AO0101-AO0150)
            101 => &AO0101_INFO,
            102 => &AO0102_INFO,

            _ => &UNKNOWN_ERROR_INFO,
        }
    }
}

/// Global error registry instance
pub static ERROR_REGISTRY: ErrorRegistry = ErrorRegistry;

// ========== Error Code Definitions ==========

pub const AO0001: ErrorCode = ErrorCode::new(1); // Sequence is not iterable
pub const AO0002: ErrorCode = ErrorCode::new(2); // Predicate is not callable

pub const AO0051: ErrorCode = ErrorCode::new(51); // Predicate raised an error
pub const AO0052: ErrorCode = ErrorCode::new(52); // Predicate returned a non-boolean in strict mode

pub const AO0101: ErrorCode = ErrorCode::new(101); // Wrong number of arguments
pub const AO0102: ErrorCode = ErrorCode::new(102); // No such method in module

// ========== Error Information Definitions ==========

static AO0001_INFO: ErrorInfo = ErrorInfo::new(
    1,
    "Sequence is not iterable",
    "The collection argument does not support forward iteration.",
    "Pass a list, tuple, string or dict as the collection.",
);

static AO0002_INFO: ErrorInfo = ErrorInfo::new(
    2,
    "Predicate is not callable",
    "The unary_predicate argument cannot be invoked with an element.",
    "Pass a callable taking exactly one argument.",
);

static AO0051_INFO: ErrorInfo = ErrorInfo::new(
    51,
    "Predicate raised an error",
    "Invoking the predicate on an element failed. The original error is propagated unchanged and no partial result is produced.",
    "Inspect the wrapped host error; it is exactly what the predicate raised.",
);

static AO0052_INFO: ErrorInfo = ErrorInfo::new(
    52,
    "Predicate returned a non-boolean value",
    "Strict truthiness is enabled and the predicate returned something other than a boolean.",
    "Return a boolean from the predicate or switch to host truthiness.",
);

static AO0101_INFO: ErrorInfo = ErrorInfo::new(
    101,
    "Wrong number of arguments",
    "The method was called with a number of positional arguments outside its signature.",
    "Check the method signature; all_of_impl takes (collection, unary_predicate).",
);

static AO0102_INFO: ErrorInfo = ErrorInfo::new(
    102,
    "Unknown method",
    "The module does not register a method with this name.",
    "List the module's methods to see what is available.",
);

static UNKNOWN_ERROR_INFO: ErrorInfo = ErrorInfo::new(
    0,
    "Unknown error",
    "An error occurred that does not have a registered error code.",
    "",
);
