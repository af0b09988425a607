//! Reading a most general unifier out of a unified table

use crate::config::UnifyConfig;
use crate::error::{Result, UnitableError};
use crate::parser::tokenize_term;
use crate::table::{TableBuilder, UnificationTable};
use crate::term::Token;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most general unifier as variable name -> term text
///
/// Variables appear in table order; only bound variables are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unifier {
    bindings: IndexMap<String, String>,
}

impl Unifier {
    /// Collect every binding of `table`, fully dereferenced
    pub fn from_table(table: &UnificationTable) -> Self {
        let bindings = table
            .bindings()
            .iter()
            .filter_map(|(var, target)| {
                let text = table.term_string(table.dereference(target))?;
                Some((table.entries()[var].term.clone(), text))
            })
            .collect();
        Unifier { bindings }
    }

    pub fn get(&self, var: &str) -> Option<&str> {
        self.bindings.get(var).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Unifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, term) in self.iter() {
            writeln!(f, "{} = {}", var, term)?;
        }
        Ok(())
    }
}

/// A pair of terms loaded into one table
#[derive(Debug, Clone)]
pub struct Problem {
    table: UnificationTable,
    left: usize,
    right: usize,
    config: UnifyConfig,
}

impl Problem {
    pub fn new(x: &str, y: &str) -> Result<Self> {
        Problem::with_config(x, y, UnifyConfig::default())
    }

    /// Tokenize both terms and build their shared table
    pub fn with_config(x: &str, y: &str, config: UnifyConfig) -> Result<Self> {
        let mut tokens = tokenize_term(x)?;
        let right_tokens = tokenize_term(y)?;
        let left_root = root_text(&tokens, x)?;
        let right_root = root_text(&right_tokens, y)?;
        tokens.extend(right_tokens);

        let table = TableBuilder::with_config(config).build(&tokens)?;
        let left = table.index_of_checked(&left_root)?;
        let right = table.index_of_checked(&right_root)?;

        Ok(Problem {
            table,
            left,
            right,
            config,
        })
    }

    pub fn table(&self) -> &UnificationTable {
        &self.table
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    /// Unify the two root terms
    pub fn unify(&mut self) -> Result<bool> {
        self.table.unify_with(self.left, self.right, &self.config)
    }

    pub fn unifier(&self) -> Unifier {
        Unifier::from_table(&self.table)
    }

    pub fn into_table(self) -> UnificationTable {
        self.table
    }
}

fn root_text(tokens: &[Token], source: &str) -> Result<String> {
    tokens
        .first()
        .map(|t| t.term.clone())
        .ok_or_else(|| UnitableError::ParseError(format!("no term in `{}`", source)))
}

/// Unify two term strings
///
/// Returns `Ok(None)` when no unifier exists; parse and construction problems
/// are errors.
pub fn unify_strings(x: &str, y: &str) -> Result<Option<Unifier>> {
    unify_strings_with(x, y, &UnifyConfig::default())
}

pub fn unify_strings_with(x: &str, y: &str, config: &UnifyConfig) -> Result<Option<Unifier>> {
    let mut problem = Problem::with_config(x, y, *config)?;
    if problem.unify()? {
        Ok(Some(problem.unifier()))
    } else {
        Ok(None)
    }
}
