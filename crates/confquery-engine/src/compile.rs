//! Condition tree compilation
//!
//! `compile` takes the full document collection and returns the matching
//! subset, borrowing names and documents from the input. Leaf conditions are
//! scanned per document with short-circuit evaluation; nested groups are
//! compiled independently against the original input and combined by set
//! intersection (AND) or union (OR).

use crate::lookup::match_condition;
use confquery_core::{Condition, ConditionGroup, ConditionItem, Document, DocumentSet};
use std::collections::HashMap;

/// The matching subset of a document collection, keyed by document name.
/// Values are the same documents the caller passed in.
pub type MatchSet<'a> = HashMap<&'a str, &'a Document>;

/// The single contract every condition tree node exposes. Leaves and groups
/// implement it identically, so trees compose at any nesting depth.
pub trait Compile {
    fn compile<'a>(&self, documents: &'a DocumentSet) -> MatchSet<'a>;
}

impl Compile for Condition {
    fn compile<'a>(&self, documents: &'a DocumentSet) -> MatchSet<'a> {
        documents
            .iter()
            .filter(|(_, document)| match_condition(self, document))
            .map(|(name, document)| (name.as_str(), document))
            .collect()
    }
}

impl Compile for ConditionItem {
    fn compile<'a>(&self, documents: &'a DocumentSet) -> MatchSet<'a> {
        match self {
            ConditionItem::Condition(condition) => condition.compile(documents),
            ConditionItem::Group(group) => group.compile(documents),
        }
    }
}

impl Compile for ConditionGroup {
    fn compile<'a>(&self, documents: &'a DocumentSet) -> MatchSet<'a> {
        let and = self.conjunction().is_and();
        let mut leaves = Vec::new();
        let mut groups = Vec::new();
        for item in self.items() {
            match item {
                ConditionItem::Condition(condition) => leaves.push(condition),
                ConditionItem::Group(group) => groups.push(group),
            }
        }

        let mut matches: MatchSet<'a>;
        if !leaves.is_empty() {
            matches = MatchSet::new();
            for (name, document) in documents {
                let mut matched = false;
                for condition in &leaves {
                    matched = match_condition(condition, document);
                    // AND stops on the first miss, OR on the first hit; the
                    // deciding leaf's verdict is the document's verdict.
                    if and != matched {
                        break;
                    }
                }
                if matched {
                    matches.insert(name.as_str(), document);
                }
            }
        } else if groups.is_empty() || and {
            // No leaves: AND narrows from the full set, OR grows from the
            // empty set, and a group with nothing at all passes everything.
            matches = documents
                .iter()
                .map(|(name, document)| (name.as_str(), document))
                .collect();
        } else {
            matches = MatchSet::new();
        }

        for group in groups {
            // Nested groups always see the original input, not the running
            // result.
            let group_matches = group.compile(documents);
            if and {
                matches.retain(|name, _| group_matches.contains_key(name));
            } else {
                for (name, document) in group_matches {
                    matches.entry(name).or_insert(document);
                }
            }
        }

        matches
    }
}
