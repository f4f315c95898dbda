//! Evaluation configuration

use serde::{Deserialize, Serialize};

/// How predicate results are turned into booleans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruthinessMode {
    /// Host rules: `None`, `false`, zero, empty strings and empty containers are falsy
    #[default]
    Host,
    /// Only boolean results are accepted; anything else is an error
    Strict,
}

/// Evaluator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Interpretation of predicate results
    pub truthiness: TruthinessMode,
    /// Log every predicate invocation at trace level
    pub trace_invocations: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            truthiness: TruthinessMode::Host,
            trace_invocations: false,
        }
    }
}

impl EvaluationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_truthiness(mut self, truthiness: TruthinessMode) -> Self {
        self.truthiness = truthiness;
        self
    }

    pub fn with_trace_invocations(mut self, enabled: bool) -> Self {
        self.trace_invocations = enabled;
        self
    }

    /// Strict boolean results, no tracing
    pub fn strict() -> Self {
        Self::default().with_truthiness(TruthinessMode::Strict)
    }
}
