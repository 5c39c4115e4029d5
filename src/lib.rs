//! Derivations, parse trees and abstract syntax trees for arithmetic
//! expressions.
//!
//! Expressions are built from single lowercase letters, single digits, the
//! operators `+ - * /` and parentheses, following the grammar
//!
//! ```text
//! E → E '+' T | E '-' T | T
//! T → T '*' F | T '/' F | F
//! F → '(' E ')' | 'a' | ... | 'z' | '0' | ... | '9'
//! ```
//!
//! [`engine::Engine`] runs the whole pipeline for one expression: the
//! [`lexer`] splits it into tokens, the chart parser in [`parsers`] finds
//! its parse tree, [`derivation`] lists the productions applied and [`ast`]
//! simplifies the tree.

pub mod ast;
pub mod cli;
pub mod derivation;
pub mod engine;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod parsers;
pub mod position;
mod utils;

pub use engine::{process, Engine, Options, Outcome};
pub use errors::{Error, Result};
