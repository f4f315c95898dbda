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

//! Native `std::algorithm`-style `all_of` for a host scripting environment
//!
//! The crate has two layers:
//!
//! - [`evaluator::all_of`] is the generic core: any `IntoIterator` plus any
//!   fallible `FnMut` predicate whose result is [`Truthy`]. It short-circuits
//!   on the first falsy result and returns the predicate's error unchanged.
//! - [`Value`] and [`ExtensionModule`] are the host adapter: dynamically typed
//!   values, run-time capability checks (`TypeMismatch`, `NotCallable`) and the
//!   `libstd` module exposing `all_of_impl(collection, unary_predicate)`.
//!
//! ```
//! use pyaoi::{Value, all_of};
//!
//! let is_even = Value::callable("is_even", |v| Ok(Value::Bool(v.as_int().unwrap_or(1) % 2 == 0)));
//! assert_eq!(all_of(&Value::list([2, 4, 6]), &is_even), Ok(true));
//! assert_eq!(all_of(&Value::list([2, 3, 6]), &is_even), Ok(false));
//! ```

pub mod config;
pub mod core;
pub mod evaluator;
pub mod registry;

// Re-export main types
pub use self::config::{EvaluationConfig, TruthinessMode};
pub use self::core::{AlgorithmError, Callable, ErrorCode, HostError, Result, TypeInfo, Value};
pub use self::evaluator::{AllOfEvaluator, Truthy};
pub use self::registry::{ExtensionModule, FunctionSignature, ModuleFunction};

/// Check whether `unary_predicate` returns a truthy value for every element of `collection`
///
/// Same semantics as `libstd.all_of_impl` with the default configuration.
pub fn all_of(collection: &Value, unary_predicate: &Value) -> Result<bool> {
    AllOfEvaluator::default().evaluate(collection, unary_predicate)
}
