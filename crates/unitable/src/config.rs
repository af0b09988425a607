//! Unification configuration types.

/// Resource limits for building and unifying a table.
///
/// Both limits default to `None`, which reproduces the unbounded behaviour of
/// the algorithm. Without an occurs-check, comparing two variables bound to
/// self-referential structures can loop forever; a step limit turns that into
/// an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnifyConfig {
    /// Maximum number of term pairs the engine may pop
    pub step_limit: Option<usize>,
    /// Maximum number of distinct entries in a table
    pub term_limit: Option<usize>,
}

impl UnifyConfig {
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn with_term_limit(mut self, limit: usize) -> Self {
        self.term_limit = Some(limit);
        self
    }
}
