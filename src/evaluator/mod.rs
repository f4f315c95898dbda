//! Predicate evaluation

pub mod all_of;
pub mod truthy;

pub use all_of::{AllOfEvaluator, all_of, all_of_values};
pub use truthy::Truthy;
