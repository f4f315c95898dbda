//! Method implementations exposed by the extension module

pub mod all_of_impl;

pub use all_of_impl::AllOfImplFunction;
