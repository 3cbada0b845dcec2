//! Dotted-path traversal over nested documents
//!
//! A condition's field is a dot-separated path; the `*` segment expands to
//! every key at its level. A single satisfied branch is enough for the whole
//! condition, so traversal short-circuits on the first match.

use crate::compare::match_value;
use confquery_core::{Condition, Document, Value};

/// Match a condition against one document.
pub fn match_condition(condition: &Condition, document: &Document) -> bool {
    let segments: Vec<&str> = condition.segments().collect();
    match_path(condition, document, &segments)
}

/// Walk the remaining path segments through one document level.
///
/// When a branch cannot be continued — the key is absent, a wildcard finds
/// nothing, or a scalar appears with segments remaining — that branch
/// resolves to null, so IS NULL sees documents lacking the path and every
/// other operator fails there.
pub(crate) fn match_path(condition: &Condition, data: &Document, segments: &[&str]) -> bool {
    let Some((segment, rest)) = segments.split_first() else {
        return false;
    };

    let candidates: Vec<&Value> = if *segment == "*" {
        data.values().collect()
    } else {
        data.get(*segment).into_iter().collect()
    };

    if candidates.is_empty() {
        tracing::debug!(segment = %segment, field = %condition.field, "path stops here, branch resolves to null");
        return match_value(condition, &Value::Null);
    }

    for value in candidates {
        if rest.is_empty() {
            if match_value(condition, value) {
                return true;
            }
        } else {
            match value {
                Value::Object(nested) => {
                    if match_path(condition, nested, rest) {
                        return true;
                    }
                }
                // Scalar with segments remaining: dead end for this branch.
                _ => {
                    if match_value(condition, &Value::Null) {
                        return true;
                    }
                }
            }
        }
    }
    false
}
