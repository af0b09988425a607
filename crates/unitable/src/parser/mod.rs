//! Tokenizer for Prolog-style term strings

mod tokenizer;

pub use tokenizer::{tokenize, tokenize_term};
