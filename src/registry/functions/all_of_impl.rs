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

//! all_of_impl(collection, unary_predicate) - true if the predicate holds for every element

use std::sync::LazyLock;

use crate::config::EvaluationConfig;
use crate::core::{AlgorithmError, Result, TypeInfo, Value};
use crate::evaluator::AllOfEvaluator;
use crate::registry::function::ModuleFunction;
use crate::registry::signature::{FunctionSignature, ParameterInfo};

/// all_of_impl() method of the `libstd` module
pub struct AllOfImplFunction;

impl ModuleFunction for AllOfImplFunction {
    fn name(&self) -> &str {
        "all_of_impl"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "all_of_impl",
                vec![
                    ParameterInfo::required("collection", TypeInfo::Iterable),
                    ParameterInfo::required("unary_predicate", TypeInfo::Callable),
                ],
                TypeInfo::Bool,
            )
        });
        &SIG
    }

    fn documentation(&self) -> &str {
        "Returns `True` if `unary_predicate` returns a truthy value for every element of `collection`, \
         or if `collection` is empty. Stops at the first falsy result."
    }

    fn evaluate(&self, args: &[Value], config: &EvaluationConfig) -> Result<Value> {
        let [collection, unary_predicate] = args else {
            // validate_args guarantees two arguments
            return Err(AlgorithmError::InvalidArity {
                name: self.name().to_string(),
                min: 2,
                max: Some(2),
                actual: args.len(),
            });
        };

        AllOfEvaluator::new(config.clone())
            .evaluate(collection, unary_predicate)
            .map(Value::Bool)
    }
}
