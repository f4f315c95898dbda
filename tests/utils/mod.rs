//! Shared test utilities: host-style predicates that record how they were called

#![allow(dead_code)]

use pyaoi::{HostError, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Install a test logger once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A predicate value plus a shared counter of its invocations
pub struct CountingPredicate {
    pub value: Value,
    calls: Arc<AtomicUsize>,
}

impl CountingPredicate {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Wrap `f` so every invocation is counted
pub fn counting<F>(name: &str, f: F) -> CountingPredicate
where
    F: Fn(&Value) -> Result<Value, HostError> + Send + Sync + 'static,
{
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let value = Value::callable(name, move |v| {
        counter.fetch_add(1, Ordering::SeqCst);
        f(v)
    });
    CountingPredicate { value, calls }
}

/// `lambda n: n % 2 == 0`, raising `TypeError` on non-integers
pub fn is_even(v: &Value) -> Result<Value, HostError> {
    match v {
        Value::Int(n) => Ok(Value::Bool(n % 2 == 0)),
        other => Err(HostError::type_error(format!(
            "unsupported operand type(s) for %: '{}' and 'int'",
            other.type_info()
        ))),
    }
}

/// `lambda x: x`, so results are judged by host truthiness
pub fn identity(v: &Value) -> Result<Value, HostError> {
    Ok(v.clone())
}
