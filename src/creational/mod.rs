//! Creational patterns: controlling how and when objects come into being.

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;
