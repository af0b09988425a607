//! Variable bindings and dereferencing

use super::UnificationTable;
use log::trace;

/// Binding store mapping variable entries to the entry they are bound to
///
/// Indexed by entry, so iteration is in ascending variable index. Only
/// variable entries are ever bound; a missing binding means the variable is
/// free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    targets: Vec<Option<usize>>,
    count: usize,
}

impl Bindings {
    pub(crate) fn with_len(len: usize) -> Self {
        Bindings {
            targets: vec![None; len],
            count: 0,
        }
    }

    /// Look up the target a variable is bound to
    pub fn get(&self, var: usize) -> Option<usize> {
        self.targets.get(var).copied().flatten()
    }

    pub fn is_bound(&self, var: usize) -> bool {
        self.get(var).is_some()
    }

    /// Iterate over `(variable, target)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(var, target)| target.map(|t| (var, t)))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub(crate) fn bind(&mut self, var: usize, target: usize) {
        if let Some(slot) = self.targets.get_mut(var) {
            if slot.is_none() {
                self.count += 1;
            }
            *slot = Some(target);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.targets.iter_mut().for_each(|t| *t = None);
        self.count = 0;
    }
}

impl UnificationTable {
    /// Follow bindings from `idx` until an unbound entry is reached
    ///
    /// Terminates because the engine never binds a variable into a chain that
    /// leads back to it.
    pub fn dereference(&self, idx: usize) -> usize {
        let mut current = idx;
        while let Some(next) = self.bindings.get(current) {
            current = next;
        }
        current
    }

    /// Record a binding; `var` must be a variable entry
    pub(crate) fn record_binding(&mut self, var: usize, target: usize) {
        debug_assert!(self.entries()[var].kind.is_var());
        trace!(
            "bind {} -> {}",
            self.entries()[var].term,
            self.entries()[target].term
        );
        self.bindings.bind(var, target);
    }
}
