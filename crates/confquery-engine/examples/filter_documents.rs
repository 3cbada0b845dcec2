//! Filter a small document collection with a nested condition tree.
//!
//! Run with: cargo run --example filter_documents

use confquery_core::condition::ConditionParser;
use confquery_core::{ConditionGroup, DocumentSet, Operator, Value};
use confquery_engine::Compile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let documents: DocumentSet = serde_json::from_value(serde_json::json!({
        "site.frontpage": {
            "status": "open",
            "prio": 1,
            "owner": {"email": "ops@example.com"}
        },
        "site.archive": {
            "status": "closed",
            "prio": 2
        },
        "site.search": {
            "status": "open",
            "prio": 3,
            "owner": {"email": "search@example.com"}
        }
    }))?;

    // Built programmatically: open AND prio >= 2.
    let group = ConditionGroup::and()
        .condition("status", Value::from("open"), Operator::Eq)?
        .condition("prio", Value::from(2), Operator::Ge)?;

    let matches = group.compile(&documents);
    println!("open with prio >= 2: {:?}", sorted(&matches));

    // Parsed from expressions: closed OR an owner email under example.com.
    let parser = ConditionParser::new();
    let group = parser.parse_any(&[
        r#"status = "closed""#.to_string(),
        r#"owner.email ENDS_WITH "@example.com""#.to_string(),
    ])?;

    let matches = group.compile(&documents);
    println!("closed or example.com owner: {:?}", sorted(&matches));

    // Documents lacking a path are matched by not_exists.
    let missing_owner = ConditionGroup::and().not_exists("owner.email")?;
    let matches = missing_owner.compile(&documents);
    println!("without an owner email: {:?}", sorted(&matches));

    Ok(())
}

fn sorted<'a>(matches: &'a confquery_engine::MatchSet<'a>) -> Vec<&'a str> {
    let mut names: Vec<&str> = matches.keys().copied().collect();
    names.sort_unstable();
    names
}
