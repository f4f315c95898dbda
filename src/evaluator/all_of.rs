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

//! all_of - true if the predicate holds for every element
//!
//! Elements are visited in iteration order and evaluation stops at the first
//! falsy result. An empty sequence is vacuously true and the predicate is
//! never invoked.

use log::{debug, trace};

use super::truthy::Truthy;
use crate::config::{EvaluationConfig, TruthinessMode};
use crate::core::{AlgorithmError, Result, Value};

/// Check whether `predicate` is truthy for every element of `sequence`
///
/// The predicate's error type is returned as-is on the first failure; no
/// further elements are visited.
pub fn all_of<I, P, R, E>(sequence: I, mut predicate: P) -> std::result::Result<bool, E>
where
    I: IntoIterator,
    P: FnMut(I::Item) -> std::result::Result<R, E>,
    R: Truthy,
{
    for element in sequence {
        if !predicate(element)?.is_truthy() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Evaluates `all_of` over host values
#[derive(Debug, Clone, Default)]
pub struct AllOfEvaluator {
    config: EvaluationConfig,
}

impl AllOfEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Validate the arguments, then run the short-circuiting check
    ///
    /// The collection is validated before the predicate.
    pub fn evaluate(&self, collection: &Value, unary_predicate: &Value) -> Result<bool> {
        let elements = collection
            .elements()
            .ok_or_else(|| AlgorithmError::type_mismatch("collection", collection.type_info()))?;
        let callable = unary_predicate.as_callable().ok_or_else(|| {
            AlgorithmError::not_callable("unary_predicate", unary_predicate.type_info())
        })?;

        let mut invocations = 0usize;
        let outcome = all_of(elements, |element| -> Result<bool> {
            let index = invocations;
            invocations += 1;
            if self.config.trace_invocations {
                trace!("all_of: calling '{}' on element {index}", callable.name());
            }
            let result = callable.call(&element)?;
            self.interpret(index, &result)
        });

        match &outcome {
            Ok(true) => debug!("all_of: exhausted after {invocations} invocations"),
            Ok(false) => debug!("all_of: short-circuited at element {}", invocations - 1),
            Err(err) => debug!("all_of: failed after {invocations} invocations: {err}"),
        }
        outcome
    }

    fn interpret(&self, index: usize, result: &Value) -> Result<bool> {
        match self.config.truthiness {
            TruthinessMode::Host => Ok(result.is_truthy()),
            TruthinessMode::Strict => result
                .as_bool()
                .ok_or_else(|| AlgorithmError::NonBooleanResult {
                    index,
                    actual: result.type_info(),
                }),
        }
    }
}

/// Run `all_of` over host values with the given configuration
pub fn all_of_values(
    collection: &Value,
    unary_predicate: &Value,
    config: &EvaluationConfig,
) -> Result<bool> {
    AllOfEvaluator::new(config.clone()).evaluate(collection, unary_predicate)
}
