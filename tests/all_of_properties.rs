//! Behavioral tests for all_of over host values
//!
//! Covers vacuous truth, short-circuiting, error propagation and the
//! capability checks on both arguments.

mod utils;

use pretty_assertions::assert_eq;
use pyaoi::evaluator::all_of as generic_all_of;
use pyaoi::{
    AlgorithmError, AllOfEvaluator, EvaluationConfig, HostError, TypeInfo, Value, all_of,
};
use rstest::rstest;
use serde_json::json;
use utils::{counting, identity, init_logging, is_even};

#[test]
fn test_all_even() {
    init_logging();
    let pred = counting("is_even", is_even);
    assert_eq!(all_of(&Value::list([2, 4, 6]), &pred.value), Ok(true));
    assert_eq!(pred.calls(), 3);
}

#[test]
fn test_stops_at_first_odd() {
    init_logging();
    let pred = counting("is_even", is_even);
    assert_eq!(all_of(&Value::list([2, 3, 6]), &pred.value), Ok(false));
    assert_eq!(pred.calls(), 2);
}

#[rstest]
#[case::list(Value::List(vec![]))]
#[case::tuple(Value::Tuple(vec![]))]
#[case::string(Value::from(""))]
#[case::dict(Value::from(json!({})))]
fn test_empty_is_vacuously_true(#[case] collection: Value) {
    init_logging();
    let pred = counting("never", |_| Err(HostError::value_error("must not be called")));
    assert_eq!(all_of(&collection, &pred.value), Ok(true));
    assert_eq!(pred.calls(), 0);
}

#[rstest]
#[case::first(vec![1, 2, 4], Some(0))]
#[case::middle(vec![2, 4, 5, 6, 7], Some(2))]
#[case::last(vec![2, 4, 6, 8, 9], Some(4))]
#[case::none(vec![0, 2, 4], None)]
fn test_invoked_exactly_k_plus_one_times(
    #[case] items: Vec<i64>,
    #[case] first_falsy: Option<usize>,
) {
    let pred = counting("is_even", is_even);
    let result = all_of(&Value::list(items.clone()), &pred.value);

    match first_falsy {
        Some(k) => {
            assert_eq!(result, Ok(false));
            assert_eq!(pred.calls(), k + 1);
        }
        None => {
            assert_eq!(result, Ok(true));
            assert_eq!(pred.calls(), items.len());
        }
    }
}

#[rstest]
#[case::none(Value::None, TypeInfo::NoneType)]
#[case::int(Value::Int(42), TypeInfo::Int)]
#[case::float(Value::Float(1.5), TypeInfo::Float)]
#[case::bool(Value::Bool(true), TypeInfo::Bool)]
fn test_non_iterable_collection(#[case] collection: Value, #[case] actual: TypeInfo) {
    let pred = counting("is_even", is_even);
    assert_eq!(
        all_of(&collection, &pred.value),
        Err(AlgorithmError::type_mismatch("collection", actual))
    );
    assert_eq!(pred.calls(), 0);
}

#[test]
fn test_callable_is_not_a_collection() {
    let pred = Value::callable("is_even", is_even);
    let err = all_of(&pred, &pred).unwrap_err();
    assert_eq!(err, AlgorithmError::type_mismatch("collection", TypeInfo::Callable));
}

#[rstest]
#[case::none(Value::None, TypeInfo::NoneType)]
#[case::string(Value::from("is_even"), TypeInfo::Str)]
#[case::list(Value::list([1]), TypeInfo::List)]
fn test_non_callable_predicate(#[case] predicate: Value, #[case] actual: TypeInfo) {
    let err = all_of(&Value::list([1, 2]), &predicate).unwrap_err();
    assert_eq!(err, AlgorithmError::not_callable("unary_predicate", actual));
    assert_eq!(err.error_code().code_str(), "AO0002");
}

#[test]
fn test_non_callable_predicate_with_empty_collection() {
    // Arguments are validated even when there is nothing to iterate
    let err = all_of(&Value::List(vec![]), &Value::Int(0)).unwrap_err();
    assert_eq!(err, AlgorithmError::not_callable("unary_predicate", TypeInfo::Int));
}

#[test]
fn test_predicate_error_propagates_unchanged() {
    init_logging();
    let pred = counting("is_even", is_even);
    let collection = Value::list([Value::Int(2), Value::from("x"), Value::Int(3)]);

    let err = all_of(&collection, &pred.value).unwrap_err();
    let expected = HostError::type_error("unsupported operand type(s) for %: 'str' and 'int'");
    assert_eq!(err, AlgorithmError::Predicate(expected.clone()));
    assert_eq!(err.to_string(), expected.to_string());
    assert_eq!(pred.calls(), 2);
}

#[test]
fn test_falsy_before_error_short_circuits() {
    let pred = counting("is_even", is_even);
    let collection = Value::list([Value::Int(1), Value::from("x")]);
    assert_eq!(all_of(&collection, &pred.value), Ok(false));
    assert_eq!(pred.calls(), 1);
}

#[rstest]
#[case::truthy_values(json!([1, "a", [0], {"k": null}, 0.5]), true)]
#[case::zero(json!([1, 0, 2]), false)]
#[case::empty_string(json!(["a", ""]), false)]
#[case::null(json!([true, null]), false)]
#[case::empty_list(json!([[1], []]), false)]
fn test_host_truthiness(#[case] items: serde_json::Value, #[case] expected: bool) {
    let pred = Value::callable("identity", identity);
    assert_eq!(all_of(&Value::from(items), &pred), Ok(expected));
}

#[test]
fn test_string_elements_are_characters() {
    let pred = counting("is_upper", |v| match v {
        Value::Str(s) => Ok(Value::Bool(s.chars().all(char::is_uppercase))),
        _ => Ok(Value::Bool(false)),
    });
    assert_eq!(all_of(&Value::from("ABC"), &pred.value), Ok(true));
    assert_eq!(pred.calls(), 3);
    assert_eq!(all_of(&Value::from("AbC"), &pred.value), Ok(false));
    assert_eq!(pred.calls(), 5);
}

#[test]
fn test_dict_elements_are_keys() {
    let pred = Value::callable("starts_with_k", |v| match v {
        Value::Str(s) => Ok(Value::Bool(s.starts_with('k'))),
        _ => Ok(Value::Bool(false)),
    });
    let dict = Value::from(json!({"k1": 0, "k2": false}));
    assert_eq!(all_of(&dict, &pred), Ok(true));
}

#[test]
fn test_strict_truthiness() {
    let evaluator = AllOfEvaluator::new(EvaluationConfig::strict().with_trace_invocations(true));
    let pred = Value::callable("identity", identity);

    assert_eq!(
        evaluator.evaluate(&Value::list([true, true]), &pred),
        Ok(true)
    );
    assert_eq!(
        evaluator.evaluate(&Value::list([Value::Bool(true), Value::Int(1)]), &pred),
        Err(AlgorithmError::NonBooleanResult {
            index: 1,
            actual: TypeInfo::Int,
        })
    );
}

#[test]
fn test_generic_core_with_plain_closures() {
    let words = ["apple", "avocado", "banana", "apricot"];
    let mut visited = Vec::new();
    let result = generic_all_of(words.iter(), |w| {
        visited.push(*w);
        Ok::<_, std::convert::Infallible>(w.starts_with('a'))
    });
    assert_eq!(result, Ok(false));
    assert_eq!(visited, vec!["apple", "avocado", "banana"]);
}

#[test]
fn test_generic_core_propagates_custom_errors() {
    #[derive(Debug, PartialEq)]
    struct Overflow(u32);

    let result = generic_all_of([10u32, 300, 5], |n| {
        n.checked_mul(20_000_000).map(|_| true).ok_or(Overflow(n))
    });
    assert_eq!(result, Err(Overflow(300)));
}
