//! Term kinds and the token records the table is built from

mod kind;
mod token;

pub use kind::{TermClass, TermKind};
pub use token::Token;
