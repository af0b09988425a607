//! Table-based unification algorithm
//!
//! Implements the iterative procedure from "Yet Another Efficient Unification
//! Algorithm" (Suciu). Terms are compared pairwise from an explicit stack, so
//! nesting depth never grows the call stack. Bindings are recorded as
//! index-to-index edges and substitution is deferred to rendering.
//!
//! There is no occurs-check: binding `X` to `f(X)` is accepted.

use crate::config::UnifyConfig;
use crate::error::{Result, UnitableError};
use crate::table::UnificationTable;
use crate::term::TermClass;
use log::{debug, trace};

/// Stack frame for iterative unification
#[derive(Debug, Clone, Copy)]
struct UnifyFrame {
    term1: usize,
    term2: usize,
}

/// Outcome of a bind attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    /// A binding was recorded, or none was needed
    Done,
    /// Both sides were already resolved and must be compared instead
    Compare(usize, usize),
}

impl UnificationTable {
    /// Unify the terms at `ix` and `iy`, recording bindings in the table
    ///
    /// Returns whether a most general unifier exists. On failure, bindings made
    /// before the clash are kept; the table should then be discarded or reset.
    ///
    /// # Panics
    ///
    /// Panics if either index is not a table index.
    pub fn unify(&mut self, ix: usize, iy: usize) -> bool {
        // Without a step limit the run cannot fail
        self.run(ix, iy, None).unwrap_or(false)
    }

    /// Unify with checked indices and the limits from `config`
    pub fn unify_with(&mut self, ix: usize, iy: usize, config: &UnifyConfig) -> Result<bool> {
        self.check_index(ix)?;
        self.check_index(iy)?;
        self.run(ix, iy, config.step_limit)
    }

    /// Unify two terms addressed by their literal text
    ///
    /// Bindings from earlier calls on the same table stay in effect.
    pub fn unify_terms(&mut self, x: &str, y: &str) -> Result<bool> {
        let ix = self.index_of_checked(x)?;
        let iy = self.index_of_checked(y)?;
        Ok(self.unify(ix, iy))
    }

    fn run(&mut self, ix: usize, iy: usize, step_limit: Option<usize>) -> Result<bool> {
        let mut stack = vec![UnifyFrame {
            term1: ix,
            term2: iy,
        }];
        let mut steps = 0usize;

        while let Some(frame) = stack.pop() {
            steps += 1;
            if let Some(limit) = step_limit {
                if steps > limit {
                    debug!("Unification aborted after {} steps", limit);
                    return Err(UnitableError::StepLimitExceeded { limit });
                }
            }

            let (x, y) = (frame.term1, frame.term2);
            if x == y {
                continue;
            }

            let class_x = self.entries()[x].kind.class();
            let class_y = self.entries()[y].kind.class();
            trace!(
                "step {}: {} ~ {}",
                steps,
                self.entries()[x].term,
                self.entries()[y].term
            );

            match (class_x, class_y) {
                (TermClass::Str, TermClass::Str) => {
                    let (ex, ey) = (&self.entries()[x], &self.entries()[y]);
                    if ex.functor != ey.functor || ex.arity() != ey.arity() {
                        debug!(
                            "Unification failed: {}/{} clashes with {}/{}",
                            ex.functor,
                            ex.arity(),
                            ey.functor,
                            ey.arity()
                        );
                        return Ok(false);
                    }

                    stack.extend(
                        ex.components
                            .iter()
                            .zip(&ey.components)
                            .map(|(&term1, &term2)| UnifyFrame { term1, term2 }),
                    );
                }

                (TermClass::Str, TermClass::Var) => {
                    if let Binding::Compare(s, resolved) = self.bind_str(x, y) {
                        stack.push(UnifyFrame {
                            term1: s,
                            term2: resolved,
                        });
                    }
                }

                (TermClass::Var, TermClass::Str) => {
                    if let Binding::Compare(s, resolved) = self.bind_str(y, x) {
                        stack.push(UnifyFrame {
                            term1: resolved,
                            term2: s,
                        });
                    }
                }

                (TermClass::Var, TermClass::Var) => {
                    if let Binding::Compare(t1, t2) = self.bind_var(x, y) {
                        stack.push(UnifyFrame {
                            term1: t1,
                            term2: t2,
                        });
                    }
                }
            }
        }

        debug!(
            "Unification succeeded in {} steps with {} bindings",
            steps,
            self.bindings().len()
        );
        Ok(true)
    }

    /// Bind variable `var_idx` to structured term `str_idx`
    ///
    /// A bound variable is dereferenced first. If it resolves to a structured
    /// term, that term must be compared with `str_idx`. If it resolves to a
    /// free variable, that variable is bound instead.
    fn bind_str(&mut self, str_idx: usize, var_idx: usize) -> Binding {
        let Some(target) = self.bindings().get(var_idx) else {
            self.record_binding(var_idx, str_idx);
            return Binding::Done;
        };

        let resolved = self.dereference(target);
        if self.entries()[resolved].kind.is_str() {
            return Binding::Compare(str_idx, resolved);
        }

        self.record_binding(resolved, str_idx);
        Binding::Done
    }

    /// Bind two variables to each other
    ///
    /// If both are bound, their raw targets are returned for comparison.
    fn bind_var(&mut self, var1: usize, var2: usize) -> Binding {
        // Already in the same chain; binding again would close a cycle
        if self.dereference(var1) == self.dereference(var2) {
            return Binding::Done;
        }

        match (self.bindings().get(var1), self.bindings().get(var2)) {
            (None, _) => {
                self.record_binding(var1, var2);
                Binding::Done
            }
            (Some(_), None) => {
                self.record_binding(var2, var1);
                Binding::Done
            }
            (Some(t1), Some(t2)) => Binding::Compare(t1, t2),
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
