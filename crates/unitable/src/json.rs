//! JSON serialization types for table dumps

use crate::table::UnificationTable;
use crate::term::TermKind;
use serde::{Deserialize, Serialize};

/// JSON representation of one table entry with its binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryJson {
    pub index: usize,
    pub term: String,
    pub functor: String,
    pub kind: TermKind,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub components: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bound_to: Option<usize>,
}

/// JSON representation of a whole table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableJson {
    pub entries: Vec<EntryJson>,
}

impl TableJson {
    pub fn from_table(table: &UnificationTable) -> Self {
        let entries = table
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryJson {
                index,
                term: entry.term.clone(),
                functor: entry.functor.clone(),
                kind: entry.kind,
                components: entry.components.clone(),
                bound_to: table.bindings().get(index),
            })
            .collect();
        TableJson { entries }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
