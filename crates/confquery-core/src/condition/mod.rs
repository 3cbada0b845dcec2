//! Condition tree module
//!
//! Conditions form a tree: leaf conditions (field / operator / value) are
//! combined by groups carrying an AND or OR conjunction, and groups nest to
//! arbitrary depth. Trees are built once, validated at construction, and
//! evaluated immutably by the engine crate.
//!
//! # Building trees
//!
//! ```
//! use confquery_core::{ConditionGroup, Operator, Value};
//!
//! let group = ConditionGroup::and()
//!     .condition("status", Value::from("open"), Operator::Eq)?
//!     .condition("prio", Value::from(2), Operator::Ge)?;
//! assert_eq!(group.items().len(), 2);
//! # Ok::<(), confquery_core::CoreError>(())
//! ```
//!
//! # Parsing expressions
//!
//! Textual expressions use `<field> <op> <value>` syntax:
//!
//! ```text
//! status = "open"
//! prio >= 2
//! tags IN ["a", "b"]
//! owner.email IS NOT NULL
//! ```

mod parser;
mod types;

pub use parser::{ConditionParser, ParseError};
pub use types::{Condition, ConditionGroup, ConditionItem, Conjunction};
