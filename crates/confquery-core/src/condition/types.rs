//! Condition tree types

use crate::error::{CoreError, Result};
use crate::operator::Operator;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AND/OR combinator for a condition group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    pub fn is_and(&self) -> bool {
        matches!(self, Conjunction::And)
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conjunction::And => f.write_str("AND"),
            Conjunction::Or => f.write_str("OR"),
        }
    }
}

impl FromStr for Conjunction {
    type Err = CoreError;

    // Case-insensitive: "AND" and "and" are equivalent.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "AND" => Ok(Conjunction::And),
            "OR" => Ok(Conjunction::Or),
            _ => Err(CoreError::InvalidValue(format!(
                "Unknown conjunction: {s:?}"
            ))),
        }
    }
}

/// A single field / operator / value comparison (leaf of the tree)
///
/// The field is a dotted path into a document; a `*` segment matches every
/// key at that level. Conditions are validated when constructed, so a built
/// tree always evaluates without errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Dotted field path (e.g. "owner.email" or "labels.*.name")
    pub field: String,
    /// Value to compare against; an array of scalars for IN / NOT IN,
    /// conventionally null for the null checks
    pub value: Value,
    /// Comparison operator
    pub operator: Operator,
    /// Optional language tag, carried for callers that key documents by
    /// language; the evaluator itself does not interpret it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub langcode: Option<String>,
}

impl Condition {
    /// Create a condition, validating the field path and the operator/value
    /// pairing.
    pub fn new(field: impl Into<String>, value: Value, operator: Operator) -> Result<Self> {
        let field = field.into();
        validate_field(&field)?;
        if operator.is_membership() && !value.is_array() {
            return Err(CoreError::InvalidValue(format!(
                "{operator} requires an array of scalars"
            )));
        }
        if value.is_array() && !operator.is_membership() {
            return Err(CoreError::InvalidValue(format!(
                "{operator} cannot compare against an array"
            )));
        }
        Ok(Self {
            field,
            value,
            operator,
            langcode: None,
        })
    }

    /// Create a condition with the operator inferred from the value shape:
    /// IN for arrays, = otherwise.
    pub fn with_default_operator(field: impl Into<String>, value: Value) -> Result<Self> {
        let operator = Operator::default_for(&value);
        Self::new(field, value, operator)
    }

    /// Condition matching documents where the field is present and non-null
    pub fn exists(field: impl Into<String>) -> Result<Self> {
        Self::new(field, Value::Null, Operator::IsNotNull)
    }

    /// Condition matching documents where the field is absent or null
    pub fn not_exists(field: impl Into<String>) -> Result<Self> {
        Self::new(field, Value::Null, Operator::IsNull)
    }

    /// Attach a language tag
    pub fn with_langcode(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = Some(langcode.into());
        self
    }

    /// The field path split into segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.field.split('.')
    }
}

fn validate_field(field: &str) -> Result<()> {
    if field.is_empty() || field.split('.').any(|segment| segment.is_empty()) {
        return Err(CoreError::MalformedField(field.to_string()));
    }
    Ok(())
}

/// One member of a condition group: a leaf or a nested group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionItem {
    /// Single condition
    Condition(Condition),
    /// Nested group
    Group(ConditionGroup),
}

/// An ordered group of conditions and nested groups under one conjunction
///
/// The conjunction is fixed at construction. Members are evaluated in the
/// order they were added; the engine's short-circuit semantics depend on
/// that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionGroup {
    conjunction: Conjunction,
    items: Vec<ConditionItem>,
}

impl ConditionGroup {
    pub fn new(conjunction: Conjunction) -> Self {
        Self {
            conjunction,
            items: Vec::new(),
        }
    }

    /// Shorthand for a new AND group
    pub fn and() -> Self {
        Self::new(Conjunction::And)
    }

    /// Shorthand for a new OR group
    pub fn or() -> Self {
        Self::new(Conjunction::Or)
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub fn items(&self) -> &[ConditionItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a leaf condition
    pub fn condition(
        self,
        field: impl Into<String>,
        value: Value,
        operator: Operator,
    ) -> Result<Self> {
        let condition = Condition::new(field, value, operator)?;
        Ok(self.with(condition))
    }

    /// Add a prebuilt leaf condition
    pub fn with(mut self, condition: Condition) -> Self {
        self.items.push(ConditionItem::Condition(condition));
        self
    }

    /// Add a nested group
    pub fn group(mut self, group: ConditionGroup) -> Self {
        self.items.push(ConditionItem::Group(group));
        self
    }

    /// Add an IS NOT NULL check on the field
    pub fn exists(self, field: impl Into<String>) -> Result<Self> {
        let condition = Condition::exists(field)?;
        Ok(self.with(condition))
    }

    /// Add an IS NULL check on the field
    pub fn not_exists(self, field: impl Into<String>) -> Result<Self> {
        let condition = Condition::not_exists(field)?;
        Ok(self.with(condition))
    }
}
