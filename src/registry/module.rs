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

//! The `libstd` extension module
//!
//! Mirrors what the host sees after importing the native module: a name, a
//! docstring and a table of methods called with positional arguments.

use log::debug;

use crate::config::EvaluationConfig;
use crate::core::{Result, Value};
use crate::registry::function::{FunctionRegistry, ModuleFunction};
use crate::registry::functions::AllOfImplFunction;
use std::sync::Arc;

/// Name the module is imported under
pub const MODULE_NAME: &str = "libstd";

/// Module docstring
pub const MODULE_DOC: &str = "A python extension implementing the std::algorithm header";

/// An extension module: named method table plus the configuration used for dispatch
#[derive(Debug, Clone)]
pub struct ExtensionModule {
    name: String,
    doc: String,
    functions: FunctionRegistry,
    config: EvaluationConfig,
}

impl ExtensionModule {
    /// Create an empty module
    pub fn new(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            functions: FunctionRegistry::new(),
            config: EvaluationConfig::default(),
        }
    }

    /// The `libstd` module with `all_of_impl` registered
    pub fn libstd() -> Self {
        let mut module = Self::new(MODULE_NAME, MODULE_DOC);
        module.register(AllOfImplFunction);
        module
    }

    pub fn with_config(mut self, config: EvaluationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn register<F: ModuleFunction + 'static>(&mut self, function: F) {
        self.functions.register(function);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn ModuleFunction>> {
        self.functions.get(name)
    }

    /// Method names in registration order
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.functions.function_names()
    }

    /// Call a method by name with positional arguments
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        debug!("{}.{}: called with {} arguments", self.name, name, args.len());
        self.functions.evaluate(name, args, &self.config)
    }
}
