//! Method registry and the extension module built on it

pub mod function;
pub mod functions;
pub mod module;
pub mod signature;

pub use function::{FunctionRegistry, ModuleFunction};
pub use functions::AllOfImplFunction;
pub use module::{ExtensionModule, MODULE_DOC, MODULE_NAME};
pub use signature::{FunctionSignature, ParameterInfo};
