//! Condition operators

use crate::error::CoreError;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators for leaf conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Loose equality (=)
    #[serde(rename = "=")]
    Eq,
    /// Greater than (>)
    #[serde(rename = ">")]
    Gt,
    /// Less than (<)
    #[serde(rename = "<")]
    Lt,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    Ge,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    Le,
    /// Membership in an array of scalars
    #[serde(rename = "IN")]
    In,
    /// Non-membership
    #[serde(rename = "NOT IN")]
    NotIn,
    /// Text starts with
    #[serde(rename = "STARTS_WITH")]
    StartsWith,
    /// Text contains
    #[serde(rename = "CONTAINS")]
    Contains,
    /// Text ends with
    #[serde(rename = "ENDS_WITH")]
    EndsWith,
    /// Value is absent or null
    #[serde(rename = "IS NULL")]
    IsNull,
    /// Value is present and non-null
    #[serde(rename = "IS NOT NULL")]
    IsNotNull,
}

impl Operator {
    /// Default operator for a condition value: membership for arrays,
    /// equality for everything else.
    pub fn default_for(value: &Value) -> Operator {
        if value.is_array() {
            Operator::In
        } else {
            Operator::Eq
        }
    }

    /// Returns true if this is an ordering operator
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Operator::Gt | Operator::Lt | Operator::Ge | Operator::Le
        )
    }

    /// Returns true if this is a membership operator
    pub fn is_membership(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Returns true if this is a substring operator
    pub fn is_substring(&self) -> bool {
        matches!(
            self,
            Operator::StartsWith | Operator::Contains | Operator::EndsWith
        )
    }

    /// Returns true if this is a null check (takes no comparison value)
    pub fn is_null_check(&self) -> bool {
        matches!(self, Operator::IsNull | Operator::IsNotNull)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::StartsWith => "STARTS_WITH",
            Operator::Contains => "CONTAINS",
            Operator::EndsWith => "ENDS_WITH",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    /// Parses the symbolic / SQL-style spellings. Word operators are matched
    /// case-insensitively with internal whitespace collapsed, so "not  in"
    /// and "NOT IN" are equivalent. Unknown spellings fail fast.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();
        match normalized.as_str() {
            "=" => Ok(Operator::Eq),
            ">" => Ok(Operator::Gt),
            "<" => Ok(Operator::Lt),
            ">=" => Ok(Operator::Ge),
            "<=" => Ok(Operator::Le),
            "IN" => Ok(Operator::In),
            "NOT IN" => Ok(Operator::NotIn),
            "STARTS_WITH" => Ok(Operator::StartsWith),
            "CONTAINS" => Ok(Operator::Contains),
            "ENDS_WITH" => Ok(Operator::EndsWith),
            "IS NULL" => Ok(Operator::IsNull),
            "IS NOT NULL" => Ok(Operator::IsNotNull),
            _ => Err(CoreError::InvalidOperator(s.to_string())),
        }
    }
}
