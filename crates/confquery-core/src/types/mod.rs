//! Shared data types

pub mod value;

pub use value::{Document, DocumentSet, Value};
