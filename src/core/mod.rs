//! Core types: host values, type tags and errors

pub mod error;
pub mod error_code;
pub mod types;
pub mod value;

pub use error::*;
pub use error_code::*;
pub use types::*;
pub use value::*;
