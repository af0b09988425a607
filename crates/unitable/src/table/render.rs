//! Rendering entries back into term text through the current bindings

use super::UnificationTable;
use crate::term::TermKind;
use std::collections::HashSet;

/// Pending work while rendering a term
enum Task {
    /// Render an entry as-is
    Entry(usize),
    /// Render an argument after dereferencing it
    Argument(usize),
    Text(&'static str),
    /// Leave the functor at the top of the path
    Close(usize),
}

impl UnificationTable {
    /// Render the term at `idx`, substituting bound variables lazily
    ///
    /// Arguments are dereferenced; a compound target is rendered in full,
    /// anything else as its functor literal. A compound target that is
    /// already being rendered further up (a cyclic binding) is printed as its
    /// functor only. Returns `None` if `idx` is not a table index.
    pub fn term_string(&self, idx: usize) -> Option<String> {
        self.entry(idx)?;

        let mut out = String::new();
        let mut on_path: HashSet<usize> = HashSet::new();
        let mut stack = vec![Task::Entry(idx)];

        while let Some(task) = stack.pop() {
            match task {
                Task::Entry(i) => {
                    let entry = &self.entries()[i];
                    out.push_str(&entry.functor);
                    if entry.kind != TermKind::Functor {
                        continue;
                    }

                    out.push('(');
                    on_path.insert(i);
                    stack.push(Task::Close(i));
                    stack.push(Task::Text(")"));
                    for (pos, &c) in entry.components.iter().enumerate().rev() {
                        stack.push(Task::Argument(c));
                        if pos > 0 {
                            stack.push(Task::Text(","));
                        }
                    }
                }
                Task::Argument(c) => {
                    let target = self.dereference(c);
                    let entry = &self.entries()[target];
                    if entry.kind == TermKind::Functor && !on_path.contains(&target) {
                        stack.push(Task::Entry(target));
                    } else {
                        out.push_str(&entry.functor);
                    }
                }
                Task::Text(text) => out.push_str(text),
                Task::Close(i) => {
                    on_path.remove(&i);
                }
            }
        }

        Some(out)
    }

    /// The most general unifier of a term, as text
    ///
    /// A free variable maps to itself. Returns `None` for a term the table
    /// has never seen.
    pub fn mgu(&self, term: &str) -> Option<String> {
        let idx = self.index_of(term)?;
        let start = self.bindings.get(idx).unwrap_or(idx);
        self.term_string(self.dereference(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;

    fn table(x: &str, y: &str) -> UnificationTable {
        UnificationTable::build(&tokenize(x, y).unwrap()).unwrap()
    }

    #[test]
    fn test_render_unbound() {
        let t = table("p(f(X),'a b',g(1,2.5,\"s\"))", "q");
        let idx = t.index_of("p(f(X),'a b',g(1,2.5,\"s\"))").unwrap();
        assert_eq!(
            t.term_string(idx).unwrap(),
            "p(f(X),'a b',g(1,2.5,\"s\"))"
        );
        assert_eq!(t.term_string(t.len()), None);
    }

    #[test]
    fn test_render_substitutes_bindings() {
        let mut t = table("f(X,Y)", "g(a)");
        let x = t.index_of("X").unwrap();
        let y = t.index_of("Y").unwrap();
        let ga = t.index_of("g(a)").unwrap();
        t.record_binding(x, y);
        t.record_binding(y, ga);

        let f = t.index_of("f(X,Y)").unwrap();
        assert_eq!(t.term_string(f).unwrap(), "f(g(a),g(a))");
        // The entry itself is rendered, not its binding
        assert_eq!(t.term_string(x).unwrap(), "X");
    }

    #[test]
    fn test_render_cyclic_binding() {
        let mut t = table("f(X)", "g(Y)");
        let x = t.index_of("X").unwrap();
        let y = t.index_of("Y").unwrap();
        let fx = t.index_of("f(X)").unwrap();
        let gy = t.index_of("g(Y)").unwrap();

        t.record_binding(x, fx);
        assert_eq!(t.term_string(fx).unwrap(), "f(f)");

        t.record_binding(x, gy);
        t.record_binding(y, fx);
        assert_eq!(t.term_string(fx).unwrap(), "f(g(f))");
    }

    #[test]
    fn test_render_repeated_argument() {
        // The same compound twice under one parent is not a cycle
        let mut t = table("f(X,X)", "g(Y)");
        let x = t.index_of("X").unwrap();
        let gy = t.index_of("g(Y)").unwrap();
        t.record_binding(x, gy);

        let f = t.index_of("f(X,X)").unwrap();
        assert_eq!(t.term_string(f).unwrap(), "f(g(Y),g(Y))");
    }

    #[test]
    fn test_mgu_queries() {
        let mut t = table("f(X,Y)", "a");
        let x = t.index_of("X").unwrap();
        let a = t.index_of("a").unwrap();
        t.record_binding(x, a);

        assert_eq!(t.mgu("X").as_deref(), Some("a"));
        assert_eq!(t.mgu("Y").as_deref(), Some("Y"));
        assert_eq!(t.mgu("f(X,Y)").as_deref(), Some("f(a,Y)"));
        assert_eq!(t.mgu("Nope"), None);
    }
}
