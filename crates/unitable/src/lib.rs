//! unitable: most general unifiers through a unification table
//!
//! Two first-order terms are flattened into a deduplicated table of subterms,
//! unified iteratively over integer handles, and read back by dereferencing
//! variable bindings on demand.
//!
//! ```
//! let mgu = unitable::unify_strings("f(X,g(Y))", "f(a,g(b))").unwrap().unwrap();
//! assert_eq!(mgu.get("X"), Some("a"));
//! assert_eq!(mgu.get("Y"), Some("b"));
//! ```

pub mod config;
pub mod error;
pub mod json;
pub mod parser;
pub mod table;
pub mod term;
pub mod unification;

pub use config::UnifyConfig;
pub use error::{Result, UnitableError};
pub use json::TableJson;
pub use parser::{tokenize, tokenize_term};
pub use table::{Bindings, Entry, TableBuilder, UnificationTable};
pub use term::{TermClass, TermKind, Token};
pub use unification::{unify_strings, unify_strings_with, Problem, Unifier};
