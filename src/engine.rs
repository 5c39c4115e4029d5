use crate::ast;
use crate::derivation::{self, Order, Step};
use crate::errors::{Error, Result};
use crate::grammar::Grammar;
use crate::lexer;
use crate::parsers::{Parser, Tree};
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};

/// Per-request options for the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// The order in which derivation steps are listed
    pub order: Order,
    /// Split runs of letters or digits such as "ab" or "42" into one
    /// terminal per character before parsing. Without this, a run longer
    /// than one character is not covered by the grammar and cannot be
    /// derived.
    pub split_runs: bool,
}

impl Options {
    /// Returns options for the given order, leaving runs unsplit
    pub fn with_order(order: Order) -> Options {
        Options {
            order,
            ..Default::default()
        }
    }
}

/// The result of processing one expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub steps: Vec<Step>,
    pub full_tree: Tree,
    pub ast_tree: Tree,
}

/// Runs expressions through the whole pipeline: tokenizing, chart parsing,
/// derivation extraction and simplification. The engine holds nothing that
/// a request can change, so it may be reused for any number of requests.
pub struct Engine {
    parser: Parser<'static>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Returns a new engine for the arithmetic expression grammar
    pub fn new() -> Engine {
        Engine {
            parser: Parser::new(Grammar::arithmetic()),
        }
    }

    /// Processes an expression. Only the first parse tree found is used.
    /// A panic anywhere in the pipeline is reported as Error::Unexpected
    /// rather than propagated to the caller.
    pub fn process(&self, input: &str, options: &Options) -> Result<Outcome> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.run(input, options)))
            .unwrap_or_else(|payload| Err(Error::Unexpected(panic_message(&*payload))));

        match &result {
            Ok(outcome) => log::debug!(
                "derived {:?} in {} steps ({:?})",
                input,
                outcome.steps.len(),
                options.order
            ),
            Err(e) => log::debug!("failed to derive {:?}: {}", input, e),
        }

        result
    }

    fn run(&self, input: &str, options: &Options) -> Result<Outcome> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut tokens = lexer::tokenize(input);
        if options.split_runs {
            tokens = lexer::split_runs(tokens);
        }

        // Report failures against the input as typed, not the tokens
        let forest = self.parser.parse(&tokens).map_err(|e| match e {
            Error::NoDerivation { reason, .. } => Error::no_derivation(input, reason),
            e => e,
        })?;

        // The first tree wins, and the rest of the enumeration is abandoned
        let Some(full_tree) = forest.trees().next() else {
            return Err(Error::no_derivation(
                input,
                format!(
                    "not derivable from the start symbol '{}'",
                    Grammar::arithmetic().start()
                ),
            ));
        };

        let steps = derivation::derive(&full_tree, options.order);
        let ast_tree = ast::simplify(&full_tree);

        Ok(Outcome {
            steps,
            full_tree,
            ast_tree,
        })
    }
}

/// Processes an expression with a fresh engine, listing steps in the given
/// order
pub fn process(input: &str, order: Order) -> Result<Outcome> {
    Engine::new().process(input, &Options::with_order(order))
}

/// Extracts the message from a panic payload, if it has one
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("internal engine failure")
    }
}
