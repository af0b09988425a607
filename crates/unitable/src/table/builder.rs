//! Builder for constructing unification tables from tokens

use super::{Entry, UnificationTable};
use crate::config::UnifyConfig;
use crate::error::{Result, UnitableError};
use crate::term::{TermKind, Token};
use log::debug;
use std::collections::HashMap;

/// Builder for unification tables
///
/// The tokenizer lists a compound term before its arguments, so tokens are
/// registered last-to-first: by the time a compound is reached, every
/// component already has an index.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    config: UnifyConfig,
}

impl TableBuilder {
    pub fn new() -> Self {
        TableBuilder::default()
    }

    pub fn with_config(config: UnifyConfig) -> Self {
        TableBuilder { config }
    }

    /// Build a table; fails without a partial table on malformed input
    pub fn build(&self, tokens: &[Token]) -> Result<UnificationTable> {
        let mut lookup: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<Entry> = Vec::new();

        for token in tokens.iter().rev() {
            // First registration wins
            if lookup.contains_key(&token.term) {
                continue;
            }

            if let Some(limit) = self.config.term_limit {
                if entries.len() >= limit {
                    return Err(UnitableError::TermLimitExceeded { limit });
                }
            }

            let components = if token.kind == TermKind::Functor {
                token
                    .components
                    .iter()
                    .map(|c| {
                        lookup
                            .get(c)
                            .copied()
                            .ok_or_else(|| UnitableError::MalformedInput {
                                term: token.term.clone(),
                                component: c.clone(),
                            })
                    })
                    .collect::<Result<Vec<usize>>>()?
            } else if let Some(component) = token.components.first() {
                // Only functors have arguments
                return Err(UnitableError::MalformedInput {
                    term: token.term.clone(),
                    component: component.clone(),
                });
            } else {
                Vec::new()
            };

            lookup.insert(token.term.clone(), entries.len());
            entries.push(Entry {
                term: token.term.clone(),
                functor: token.functor.clone(),
                kind: token.kind,
                components,
            });
        }

        debug!(
            "Built unification table: {} entries from {} tokens",
            entries.len(),
            tokens.len()
        );
        Ok(UnificationTable::from_parts(entries, lookup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;

    #[test]
    fn test_entry_layout() {
        let x = "p(Z,h(Z,W),f(W))";
        let y = "p(f(X),h(Y,f(a)),Y)";
        let table = TableBuilder::new().build(&tokenize(x, y).unwrap()).unwrap();

        assert_eq!(table.len(), 12);
        assert_eq!(table.index_of(x), Some(11));
        assert_eq!(table.index_of(y), Some(6));
        assert!(table.bindings().is_empty());
    }

    #[test]
    fn test_deduplication() {
        let x = "p(f(X),h(Y,f(a)),Y)";
        let y = "p(X,h(Z,Y),f(a))";
        let tokens = tokenize(x, y).unwrap();
        let table = TableBuilder::new().build(&tokens).unwrap();

        assert_eq!(tokens.len(), 15);
        assert_eq!(table.len(), 10);

        // f(a) is shared by both sides at different depths
        let fa = table.index_of("f(a)").unwrap();
        let hx = table.entry(table.index_of("h(Y,f(a))").unwrap()).unwrap();
        let py = table.entry(table.index_of(y).unwrap()).unwrap();
        assert_eq!(hx.components[1], fa);
        assert_eq!(py.components[2], fa);
    }

    #[test]
    fn test_components_point_at_arguments() {
        let table = TableBuilder::new()
            .build(&tokenize("g(a,X)", "b").unwrap())
            .unwrap();
        let g = table.entry(table.index_of("g(a,X)").unwrap()).unwrap();
        assert_eq!(
            g.components,
            vec![table.index_of("a").unwrap(), table.index_of("X").unwrap()]
        );
    }

    #[test]
    fn test_missing_component_is_malformed() {
        let tokens = vec![Token::compound("f", vec!["a".to_string()])];
        let err = TableBuilder::new().build(&tokens).unwrap_err();
        assert_eq!(
            err,
            UnitableError::MalformedInput {
                term: "f(a)".to_string(),
                component: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_components_registered_after_parent_are_malformed() {
        // Arguments listed before their compound are seen after it
        let tokens = vec![Token::atom("a"), Token::compound("f", vec!["a".to_string()])];
        assert!(matches!(
            TableBuilder::new().build(&tokens),
            Err(UnitableError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_constant_with_components_is_malformed() {
        let mut token = Token::atom("a");
        token.components.push("b".to_string());
        let tokens = vec![token, Token::atom("b")];
        assert_eq!(
            TableBuilder::new().build(&tokens).unwrap_err(),
            UnitableError::MalformedInput {
                term: "a".to_string(),
                component: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_term_limit() {
        let config = UnifyConfig::default().with_term_limit(3);
        let tokens = tokenize("f(a,b)", "c").unwrap();
        let err = TableBuilder::with_config(config).build(&tokens).unwrap_err();
        assert_eq!(err, UnitableError::TermLimitExceeded { limit: 3 });

        let tokens = tokenize("f(a)", "a").unwrap();
        assert!(TableBuilder::with_config(config).build(&tokens).is_ok());
    }
}
