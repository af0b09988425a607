//! Semantic type tags for terms

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a term, as assigned by the tokenizer
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    Variable = 0,
    Atom = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Void = 5,
    Functor = 6,
}

/// The two classes that drive every branch of unification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermClass {
    /// Constants and compound terms
    Str,
    /// Variables
    Var,
}

impl TermKind {
    pub fn is_var(self) -> bool {
        self == TermKind::Variable
    }

    pub fn is_str(self) -> bool {
        !self.is_var()
    }

    pub fn class(self) -> TermClass {
        if self.is_var() {
            TermClass::Var
        } else {
            TermClass::Str
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TermKind::Variable => "Variable",
            TermKind::Atom => "Atom",
            TermKind::Int => "Int",
            TermKind::Float => "Float",
            TermKind::String => "String",
            TermKind::Void => "Void",
            TermKind::Functor => "Functor",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
