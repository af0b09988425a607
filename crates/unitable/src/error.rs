//! Error types for unitable

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitableError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Malformed input: component `{component}` of `{term}` has no entry")]
    MalformedInput { term: String, component: String },

    #[error("Unknown term: {0}")]
    UnknownTerm(String),

    #[error("Index {index} out of range for table of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Term limit exceeded: more than {limit} distinct terms")]
    TermLimitExceeded { limit: usize },

    #[error("Step limit exceeded: more than {limit} unification steps")]
    StepLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, UnitableError>;
