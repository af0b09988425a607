//! The unification table: a flat, deduplicated registry of subterms
//!
//! Every distinct literal subterm of the two input terms occupies exactly one
//! [`Entry`]. Entries reference their arguments by index, and variable
//! bindings are kept in a separate [`Bindings`] store, so the entries
//! themselves never change after construction.

mod bindings;
mod builder;
mod render;

pub use bindings::Bindings;
pub use builder::TableBuilder;

use crate::error::{Result, UnitableError};
use crate::term::{TermKind, Token};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One distinct subterm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Literal text, unique within the table
    pub term: String,
    /// Head symbol; the literal value for non-functor kinds
    pub functor: String,
    pub kind: TermKind,
    /// Argument indices, empty unless `kind` is `Functor`
    pub components: Vec<usize>,
}

impl Entry {
    /// Arity of the term; 0 for variables and constants
    pub fn arity(&self) -> usize {
        if self.kind != TermKind::Functor {
            return 0;
        }
        self.components.len()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{kind: {}, functor: {}, components: {:?}}}",
            self.kind, self.functor, self.components
        )
    }
}

/// Unification table
#[derive(Debug, Clone)]
pub struct UnificationTable {
    /// Map from literal term text to entry index
    lookup: HashMap<String, usize>,
    entries: Vec<Entry>,
    pub(crate) bindings: Bindings,
}

impl UnificationTable {
    /// Build a table from a token sequence with default limits
    pub fn build(tokens: &[Token]) -> Result<Self> {
        TableBuilder::new().build(tokens)
    }

    pub(crate) fn from_parts(entries: Vec<Entry>, lookup: HashMap<String, usize>) -> Self {
        let bindings = Bindings::with_len(entries.len());
        UnificationTable {
            lookup,
            entries,
            bindings,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, idx: usize) -> Option<&Entry> {
        self.entries.get(idx)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the index of a term by its literal text
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.lookup.get(term).copied()
    }

    /// Like [`index_of`](Self::index_of), but an unknown term is an error
    pub fn index_of_checked(&self, term: &str) -> Result<usize> {
        self.index_of(term)
            .ok_or_else(|| UnitableError::UnknownTerm(term.to_string()))
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Forget all bindings so the table can be unified again
    pub fn reset_bindings(&mut self) {
        self.bindings.clear();
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(UnitableError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}
