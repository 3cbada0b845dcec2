//! Confquery Core - data model for the confquery document filter
//!
//! This crate provides the types shared across the confquery workspace:
//! - Value types for document data
//! - The condition tree (leaf conditions, groups, conjunctions)
//! - A parser for textual condition expressions
//! - Error types

pub mod condition;
pub mod error;
pub mod operator;
pub mod types;

// Re-export commonly used types
pub use condition::{Condition, ConditionGroup, ConditionItem, Conjunction};
pub use error::CoreError;
pub use operator::Operator;
pub use types::{Document, DocumentSet, Value};
