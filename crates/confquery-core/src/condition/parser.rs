//! Condition expression parser
//!
//! Parses expressions like:
//! - `status = "open"`
//! - `prio >= 2`
//! - `tags IN ["a", "b"]`
//! - `owner.email IS NOT NULL`

use super::types::{Condition, ConditionGroup, Conjunction};
use crate::operator::Operator;
use crate::types::Value;
use thiserror::Error;

/// Parse error
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to parse {expression:?}: {message}")]
pub struct ParseError {
    pub message: String,
    pub expression: String,
}

impl ParseError {
    fn new(message: impl Into<String>, expression: &str) -> Self {
        Self {
            message: message.into(),
            expression: expression.to_string(),
        }
    }
}

/// Operator tokens recognized inside an expression. Word operators require
/// surrounding spaces; matching picks the leftmost token, longest on ties,
/// so `>=` beats `>` and `NOT IN` beats `IN`.
const OPERATOR_TOKENS: &[(&str, Operator)] = &[
    ("=", Operator::Eq),
    (">=", Operator::Ge),
    ("<=", Operator::Le),
    (">", Operator::Gt),
    ("<", Operator::Lt),
    (" NOT IN ", Operator::NotIn),
    (" IN ", Operator::In),
    (" STARTS_WITH ", Operator::StartsWith),
    (" CONTAINS ", Operator::Contains),
    (" ENDS_WITH ", Operator::EndsWith),
];

/// Parser for textual condition expressions
#[derive(Debug, Default)]
pub struct ConditionParser;

impl ConditionParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a single expression into a leaf condition
    pub fn parse_condition(&self, expression: &str) -> Result<Condition, ParseError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(ParseError::new("Empty expression", expression));
        }

        // ASCII uppercasing keeps byte offsets valid in the original.
        let upper = expression.to_ascii_uppercase();

        // Postfix null checks take no value.
        for (suffix, operator) in [
            (" IS NOT NULL", Operator::IsNotNull),
            (" IS NULL", Operator::IsNull),
        ] {
            if upper.ends_with(suffix) {
                let field = expression[..expression.len() - suffix.len()].trim();
                return Condition::new(field, Value::Null, operator)
                    .map_err(|e| ParseError::new(e.to_string(), expression));
            }
        }

        let mut found: Option<(usize, &str, Operator)> = None;
        for (token, operator) in OPERATOR_TOKENS {
            if let Some(pos) = upper.find(token) {
                let better = match found {
                    None => true,
                    Some((best_pos, best_token, _)) => {
                        pos < best_pos || (pos == best_pos && token.len() > best_token.len())
                    }
                };
                if better {
                    found = Some((pos, token, *operator));
                }
            }
        }

        let Some((pos, token, operator)) = found else {
            return Err(ParseError::new("No operator found", expression));
        };

        let field = expression[..pos].trim();
        if field.is_empty() {
            return Err(ParseError::new("Empty field name", expression));
        }
        let value = self.parse_value(&expression[pos + token.len()..])?;

        Condition::new(field, value, operator)
            .map_err(|e| ParseError::new(e.to_string(), expression))
    }

    /// Parse a value literal: quoted strings, numbers, booleans, `null`, or
    /// bracketed arrays. Unquoted barewords fall back to strings.
    pub fn parse_value(&self, raw: &str) -> Result<Value, ParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ParseError::new("Missing value", raw));
        }

        // Single-quoted strings are not JSON; strip the quotes directly.
        if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
            return Ok(Value::String(raw[1..raw.len() - 1].to_string()));
        }

        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return Ok(value);
        }

        if raw.starts_with('[') {
            return Err(ParseError::new("Malformed array literal", raw));
        }

        Ok(Value::String(raw.to_string()))
    }

    /// Parse a list of expressions into an AND group
    pub fn parse_all(&self, expressions: &[String]) -> Result<ConditionGroup, ParseError> {
        self.parse_group(Conjunction::And, expressions)
    }

    /// Parse a list of expressions into an OR group
    pub fn parse_any(&self, expressions: &[String]) -> Result<ConditionGroup, ParseError> {
        self.parse_group(Conjunction::Or, expressions)
    }

    fn parse_group(
        &self,
        conjunction: Conjunction,
        expressions: &[String],
    ) -> Result<ConditionGroup, ParseError> {
        let mut group = ConditionGroup::new(conjunction);
        for expression in expressions {
            group = group.with(self.parse_condition(expression)?);
        }
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_eq() {
        let parser = ConditionParser::new();
        let result = parser.parse_condition(r#"status = "open""#).unwrap();

        assert_eq!(result.field, "status");
        assert_eq!(result.operator, Operator::Eq);
        assert_eq!(result.value, Value::from("open"));
    }

    #[test]
    fn test_parse_numeric_ge() {
        let parser = ConditionParser::new();
        let result = parser.parse_condition("prio >= 2").unwrap();

        assert_eq!(result.field, "prio");
        assert_eq!(result.operator, Operator::Ge);
        assert_eq!(result.value, Value::Number(2.0));
    }

    #[test]
    fn test_parse_in_operator() {
        let parser = ConditionParser::new();
        let result = parser.parse_condition(r#"country IN ["US", "CA"]"#).unwrap();

        assert_eq!(result.field, "country");
        assert_eq!(result.operator, Operator::In);
        assert_eq!(
            result.value,
            Value::Array(vec![Value::from("US"), Value::from("CA")])
        );
    }

    #[test]
    fn test_parse_not_in_beats_in() {
        let parser = ConditionParser::new();
        let result = parser.parse_condition("prio not in [1, 2]").unwrap();

        assert_eq!(result.operator, Operator::NotIn);
        assert_eq!(
            result.value,
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
        );
    }

    #[test]
    fn test_parse_null_checks() {
        let parser = ConditionParser::new();

        let result = parser.parse_condition("owner.email IS NOT NULL").unwrap();
        assert_eq!(result.field, "owner.email");
        assert_eq!(result.operator, Operator::IsNotNull);
        assert_eq!(result.value, Value::Null);

        let result = parser.parse_condition("owner.email is null").unwrap();
        assert_eq!(result.operator, Operator::IsNull);
    }

    #[test]
    fn test_parse_substring_operators() {
        let parser = ConditionParser::new();

        let result = parser.parse_condition(r#"name STARTS_WITH "he""#).unwrap();
        assert_eq!(result.operator, Operator::StartsWith);

        let result = parser.parse_condition(r#"name contains "lo wo""#).unwrap();
        assert_eq!(result.operator, Operator::Contains);

        let result = parser.parse_condition(r#"name ENDS_WITH "world""#).unwrap();
        assert_eq!(result.operator, Operator::EndsWith);
    }

    #[test]
    fn test_parse_operator_inside_quoted_value() {
        // The leftmost token wins, so the "=" before the quoted value is the
        // operator even though the value contains " in ".
        let parser = ConditionParser::new();
        let result = parser.parse_condition(r#"title = "a in b""#).unwrap();

        assert_eq!(result.field, "title");
        assert_eq!(result.operator, Operator::Eq);
        assert_eq!(result.value, Value::from("a in b"));
    }

    #[test]
    fn test_parse_value_forms() {
        let parser = ConditionParser::new();

        assert_eq!(parser.parse_value("2").unwrap(), Value::Number(2.0));
        assert_eq!(parser.parse_value("true").unwrap(), Value::Bool(true));
        assert_eq!(parser.parse_value("null").unwrap(), Value::Null);
        assert_eq!(parser.parse_value("'open'").unwrap(), Value::from("open"));
        // Unquoted barewords fall back to strings.
        assert_eq!(parser.parse_value("open").unwrap(), Value::from("open"));
    }

    #[test]
    fn test_parse_malformed_array() {
        let parser = ConditionParser::new();
        assert!(parser.parse_value("[1, 2").is_err());
    }

    #[test]
    fn test_parse_error_no_operator() {
        let parser = ConditionParser::new();
        assert!(parser.parse_condition("invalid expression").is_err());
        assert!(parser.parse_condition("").is_err());
    }

    #[test]
    fn test_parse_error_bad_field() {
        let parser = ConditionParser::new();
        let err = parser.parse_condition("a..b = 1").unwrap_err();
        assert!(err.message.contains("Malformed field"));
    }

    #[test]
    fn test_parse_all_and_any() {
        let parser = ConditionParser::new();
        let expressions = vec![r#"status = "open""#.to_string(), "prio >= 2".to_string()];

        let group = parser.parse_all(&expressions).unwrap();
        assert!(group.conjunction().is_and());
        assert_eq!(group.items().len(), 2);

        let group = parser.parse_any(&expressions).unwrap();
        assert_eq!(group.conjunction(), Conjunction::Or);
    }
}
