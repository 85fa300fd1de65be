//! # Design Patterns Catalog
//!
//! The Gang-of-Four patterns as small, reusable Rust abstractions:
//!
//! ## Behavioral
//! - Chain of Responsibility, Command, Iterator, Memento
//! - Observer (trait objects, channels), Strategy (trait objects, closures)
//! - Template Method (sealed skeleton traits)
//!
//! ## Creational
//! - Abstract Factory, Factory Method (trait objects, enums)
//! - Builder (mutable builder + director)
//! - Prototype (deep copy, registry)
//! - Singleton (lazy, eager, synchronized, double-checked, holder, enum)
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade, Proxy
//!
//! Operations return what they produce instead of printing it, and report
//! misuse through [`PatternError`].

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod error;
pub mod structural;

pub use config::{CatalogConfig, ConfigError};
pub use error::{PatternError, Result};
