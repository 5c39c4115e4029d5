use crate::derivation::Order;
use crate::engine::Outcome;
use crate::errors::{Error, Result};
use crate::parsers::Tree;
use serde::Serialize;

#[derive(Serialize)]
struct Success<'a> {
    input: &'a str,
    order: Order,
    steps: Vec<String>,
    full_tree: &'a Tree,
    ast_tree: &'a Tree,
}

#[derive(Serialize)]
struct Failure<'a> {
    input: &'a str,
    error: String,
}

/// Returns a JSON document describing the result of processing an
/// expression, for use by an external renderer. Failures are described by
/// the document rather than returned as errors.
pub fn render(input: &str, order: Order, result: &Result<Outcome>) -> Result<String> {
    let document = match result {
        Ok(outcome) => serde_json::to_string_pretty(&Success {
            input,
            order,
            steps: outcome.steps.iter().map(|s| s.to_string()).collect(),
            full_tree: &outcome.full_tree,
            ast_tree: &outcome.ast_tree,
        }),
        Err(e) => serde_json::to_string_pretty(&Failure {
            input,
            error: e.to_string(),
        }),
    };

    document.map_err(|e| Error::Unexpected(format!("failed to serialize output: {}", e)))
}
