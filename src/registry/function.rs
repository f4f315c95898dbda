// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Module method trait and registry

use indexmap::IndexMap;
use std::sync::Arc;

use crate::config::EvaluationConfig;
use crate::core::{AlgorithmError, Result, Value};
use crate::registry::signature::FunctionSignature;

/// A method exposed by an extension module, called with positional arguments
pub trait ModuleFunction: Send + Sync {
    /// Get the method name
    fn name(&self) -> &str;

    /// Get the method signature
    fn signature(&self) -> &FunctionSignature;

    /// Evaluate the method; arguments have already passed [`validate_args`](Self::validate_args)
    fn evaluate(&self, args: &[Value], config: &EvaluationConfig) -> Result<Value>;

    /// Get method documentation
    fn documentation(&self) -> &str {
        ""
    }

    /// Check the positional argument count against the signature
    ///
    /// Argument types are left to [`evaluate`](Self::evaluate), which reports
    /// them with the method's own error taxonomy.
    fn validate_args(&self, args: &[Value]) -> Result<()> {
        let sig = self.signature();
        if !sig.accepts_arity(args.len()) {
            return Err(AlgorithmError::InvalidArity {
                name: self.name().to_string(),
                min: sig.min_arity,
                max: sig.max_arity,
                actual: args.len(),
            });
        }
        Ok(())
    }
}

/// Method table keyed by name, in registration order
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: IndexMap<String, Arc<dyn ModuleFunction>>,
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method, replacing any previous one with the same name
    pub fn register<F: ModuleFunction + 'static>(&mut self, function: F) {
        let name = function.name().to_string();
        self.functions.insert(name, Arc::new(function));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn ModuleFunction>> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered method names, in registration order
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Look up, validate and evaluate a method
    pub fn evaluate(&self, name: &str, args: &[Value], config: &EvaluationConfig) -> Result<Value> {
        let function = self
            .get(name)
            .ok_or_else(|| AlgorithmError::UnknownFunction {
                name: name.to_string(),
            })?;
        function.validate_args(args)?;
        function.evaluate(args, config)
    }
}
