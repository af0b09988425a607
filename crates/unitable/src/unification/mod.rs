//! Unification over the table: the iterative engine and the unifier view

mod engine;
mod unifier;


pub use unifier::{unify_strings, unify_strings_with, Problem, Unifier};
