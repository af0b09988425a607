//! Token records produced by the tokenizer

use super::TermKind;
use serde::{Deserialize, Serialize};

/// One term occurrence as seen by the table builder
///
/// Components refer to argument terms by their literal text. Every text listed
/// here must also appear as a token of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Literal text of the term, used as the table key
    pub term: String,
    /// Head symbol; equal to `term` for everything but functors
    pub functor: String,
    pub kind: TermKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
}

impl Token {
    /// Create an arity-0 token whose functor is its own text
    pub fn leaf(text: impl Into<String>, kind: TermKind) -> Self {
        let term = text.into();
        Token {
            functor: term.clone(),
            term,
            kind,
            components: Vec::new(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Token::leaf(name, TermKind::Variable)
    }

    pub fn atom(name: impl Into<String>) -> Self {
        Token::leaf(name, TermKind::Atom)
    }

    /// Create a functor token; its text is `name(c1,...,cn)`
    pub fn compound(name: impl Into<String>, components: Vec<String>) -> Self {
        let functor = name.into();
        let term = format!("{}({})", functor, components.join(","));
        Token {
            term,
            functor,
            kind: TermKind::Functor,
            components,
        }
    }
}
