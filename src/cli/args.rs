use crate::derivation::Order;
use crate::engine;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Shows derivations, parse trees and abstract syntax trees for arithmetic
/// expressions over single letters and digits
pub struct Options {
    /// Expression to derive. Expressions are read from standard input, one
    /// per line, if omitted.
    pub expression: Option<String>,

    /// Order in which to list derivation steps
    #[arg(short, long, value_enum, default_value_t = Order::Leftmost)]
    pub order: Order,

    /// Treat each letter or digit of a longer run as its own terminal
    #[arg(long)]
    pub split_runs: bool,

    /// Width of each level of indentation when drawing trees
    #[arg(long, default_value_t = 2)]
    pub indent: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Also show the sentential forms of the leftmost derivation
    #[arg(long)]
    pub forms: bool,

    /// Log debugging information to standard error
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
/// Output formats for the exprderive tool
pub enum Format {
    Text,
    Json,
}

impl Options {
    /// Returns the engine options selected on the command line
    pub fn engine_options(&self) -> engine::Options {
        engine::Options {
            order: self.order,
            split_runs: self.split_runs,
        }
    }
}
