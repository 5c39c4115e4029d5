use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum Error {
    #[error("empty input: please enter an expression")]
    EmptyInput,

    #[error("no derivation found for '{input}': {reason}")]
    NoDerivation { input: String, reason: String },

    #[error("grammar error: {0}")]
    Grammar(String),

    #[error("derivation step {step} rewrites '{head}' but the leftmost non-terminal is {found}")]
    StepMismatch {
        step: usize,
        head: String,
        found: String,
    },

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Builds a NoDerivation error for the given input
    pub fn no_derivation(input: &str, reason: impl Into<String>) -> Error {
        Error::NoDerivation {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
