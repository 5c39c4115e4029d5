pub mod chart;
pub mod parsetree;

pub use chart::{Forest, Parser, Trees};
pub use parsetree::Tree;
