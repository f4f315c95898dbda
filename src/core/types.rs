//! Coarse type tags for host values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type information for host values, named the way the host runtime names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeInfo {
    /// The host's null value
    NoneType,
    /// Boolean value (true/false)
    Bool,
    /// Integer numeric value
    Int,
    /// Floating point numeric value
    Float,
    /// String value, iterable by character
    Str,
    /// Ordered mutable sequence
    List,
    /// Ordered immutable sequence
    Tuple,
    /// Insertion-ordered mapping, iterable by key
    Dict,
    /// Anything invocable with one argument
    Callable,

    /// Any iterable value (used in signatures)
    Iterable,
    /// Any type (used in signatures)
    Any,
}

impl TypeInfo {
    /// Whether values of this type support forward iteration
    pub fn is_iterable(&self) -> bool {
        matches!(
            self,
            TypeInfo::Str | TypeInfo::List | TypeInfo::Tuple | TypeInfo::Dict | TypeInfo::Iterable
        )
    }

    /// Check whether a concrete value type satisfies this (possibly abstract) type
    pub fn accepts(&self, actual: &TypeInfo) -> bool {
        match self {
            TypeInfo::Any => true,
            TypeInfo::Iterable => actual.is_iterable(),
            expected => expected == actual,
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeInfo::NoneType => "NoneType",
            TypeInfo::Bool => "bool",
            TypeInfo::Int => "int",
            TypeInfo::Float => "float",
            TypeInfo::Str => "str",
            TypeInfo::List => "list",
            TypeInfo::Tuple => "tuple",
            TypeInfo::Dict => "dict",
            TypeInfo::Callable => "callable",
            TypeInfo::Iterable => "iterable",
            TypeInfo::Any => "any",
        };
        write!(f, "{name}")
    }
}
