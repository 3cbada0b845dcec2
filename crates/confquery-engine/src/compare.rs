//! Scalar operator application
//!
//! Applies one leaf condition's operator to one resolved document value.
//! Coercion rules are explicit: numbers and numeric strings compare
//! numerically, ordering falls back to lexical over the textual rendering,
//! and the substring operators render both sides as text.

use confquery_core::{Condition, Operator, Value};
use std::cmp::Ordering;

/// Apply the condition's operator to a resolved value.
///
/// A null value stands for "absent": only IS NULL matches it, every other
/// operator (including IS NOT NULL) fails.
pub fn match_value(condition: &Condition, value: &Value) -> bool {
    if value.is_null() {
        tracing::debug!(field = %condition.field, "null value, only IS NULL can match");
        return condition.operator == Operator::IsNull;
    }

    match condition.operator {
        Operator::Eq => loose_eq(value, &condition.value),
        Operator::Gt => ordering(value, &condition.value) == Some(Ordering::Greater),
        Operator::Lt => ordering(value, &condition.value) == Some(Ordering::Less),
        Operator::Ge => matches!(
            ordering(value, &condition.value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Operator::Le => matches!(
            ordering(value, &condition.value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Operator::In => in_list(value, &condition.value),
        Operator::NotIn => !in_list(value, &condition.value),
        Operator::StartsWith => text_match(value, &condition.value, |v, op| v.starts_with(op)),
        Operator::Contains => text_match(value, &condition.value, |v, op| v.contains(op)),
        Operator::EndsWith => text_match(value, &condition.value, |v, op| v.ends_with(op)),
        Operator::IsNotNull => true,
        Operator::IsNull => false,
    }
}

/// Loose equality: numbers and numeric strings compare numerically
/// ("10" equals 10), everything else requires the same variant with equal
/// contents.
fn loose_eq(left: &Value, right: &Value) -> bool {
    if let (Some(l), Some(r)) = (left.coerce_f64(), right.coerce_f64()) {
        return l == r;
    }
    left == right
}

fn in_list(value: &Value, list: &Value) -> bool {
    match list {
        Value::Array(items) => items.iter().any(|item| loose_eq(value, item)),
        // Construction validation keeps membership values as arrays.
        _ => false,
    }
}

/// Natural ordering: numeric when both sides coerce to numbers, else lexical
/// over the textual rendering. Values with no ordering never match.
fn ordering(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(l), Some(r)) = (left.coerce_f64(), right.coerce_f64()) {
        return l.partial_cmp(&r);
    }
    match (left.to_text(), right.to_text()) {
        (Some(l), Some(r)) => Some(l.cmp(&r)),
        _ => {
            tracing::debug!(?left, ?right, "values have no natural ordering");
            None
        }
    }
}

/// Substring operators render both the value and the operand as text; a side
/// with no textual form never matches.
fn text_match(value: &Value, operand: &Value, test: impl Fn(&str, &str) -> bool) -> bool {
    match (value.to_text(), operand.to_text()) {
        (Some(v), Some(op)) => test(&v, &op),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(operator: Operator, value: Value) -> Condition {
        Condition::new("field", value, operator).unwrap()
    }

    #[test]
    fn test_eq_loose() {
        assert!(match_value(&cond(Operator::Eq, Value::from("open")), &Value::from("open")));
        assert!(!match_value(&cond(Operator::Eq, Value::from("open")), &Value::from("closed")));
        // Numeric strings compare numerically.
        assert!(match_value(&cond(Operator::Eq, Value::Number(10.0)), &Value::from("10")));
        assert!(match_value(&cond(Operator::Eq, Value::from("10")), &Value::Number(10.0)));
        assert!(!match_value(&cond(Operator::Eq, Value::Number(10.0)), &Value::from("abc")));
        assert!(match_value(&cond(Operator::Eq, Value::Bool(true)), &Value::Bool(true)));
    }

    #[test]
    fn test_ordering_numeric() {
        assert!(match_value(&cond(Operator::Gt, Value::Number(2.0)), &Value::Number(3.0)));
        assert!(!match_value(&cond(Operator::Gt, Value::Number(2.0)), &Value::Number(2.0)));
        assert!(match_value(&cond(Operator::Ge, Value::Number(2.0)), &Value::Number(2.0)));
        assert!(match_value(&cond(Operator::Le, Value::Number(2.0)), &Value::Number(1.0)));
        assert!(match_value(&cond(Operator::Lt, Value::Number(2.0)), &Value::Number(1.5)));
        // Numeric string against number orders numerically, not lexically.
        assert!(match_value(&cond(Operator::Gt, Value::Number(9.0)), &Value::from("10")));
    }

    #[test]
    fn test_ordering_lexical_fallback() {
        assert!(match_value(&cond(Operator::Gt, Value::from("apple")), &Value::from("banana")));
        assert!(!match_value(&cond(Operator::Lt, Value::from("apple")), &Value::from("banana")));
    }

    #[test]
    fn test_ordering_incomparable_never_matches() {
        let list = Value::Array(vec![Value::Number(1.0)]);
        assert!(!match_value(&cond(Operator::Gt, Value::Number(1.0)), &list));
    }

    #[test]
    fn test_membership() {
        let list = Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ]);
        assert!(match_value(&cond(Operator::In, list.clone()), &Value::Number(2.0)));
        assert!(!match_value(&cond(Operator::In, list.clone()), &Value::Number(4.0)));
        assert!(!match_value(&cond(Operator::NotIn, list.clone()), &Value::Number(2.0)));
        assert!(match_value(&cond(Operator::NotIn, list), &Value::Number(4.0)));
    }

    #[test]
    fn test_substring_operators() {
        let value = Value::from("hello world");
        assert!(match_value(&cond(Operator::StartsWith, Value::from("hello")), &value));
        assert!(match_value(&cond(Operator::EndsWith, Value::from("world")), &value));
        assert!(match_value(&cond(Operator::Contains, Value::from("lo wo")), &value));
        assert!(!match_value(&cond(Operator::StartsWith, Value::from("world")), &value));
    }

    #[test]
    fn test_ends_with_numeric_operand_coerces_to_text() {
        // All three substring operators render the operand as text, so a
        // numeric operand works against string values uniformly.
        let value = Value::from("build-42");
        assert!(match_value(&cond(Operator::EndsWith, Value::Number(42.0)), &value));
        assert!(match_value(&cond(Operator::Contains, Value::Number(42.0)), &value));
    }

    #[test]
    fn test_null_semantics() {
        assert!(match_value(&cond(Operator::IsNull, Value::Null), &Value::Null));
        assert!(!match_value(&cond(Operator::IsNotNull, Value::Null), &Value::Null));
        assert!(!match_value(&cond(Operator::Eq, Value::Null), &Value::Null));

        assert!(match_value(&cond(Operator::IsNotNull, Value::Null), &Value::from("x")));
        assert!(!match_value(&cond(Operator::IsNull, Value::Null), &Value::from("x")));
    }
}
