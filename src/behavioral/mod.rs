//! Behavioral patterns: how objects hand work to each other.

pub mod chain;
pub mod command;
pub mod iterator;
pub mod memento;
pub mod observer;
pub mod strategy;
pub mod template;
