//! Resolution state for a single `solve` call.
//!
//! Created fresh for every top-level request and threaded through the
//! recursion by `&mut`, so independent requests never share anything.
use std::collections::HashSet;

use crate::equations::EquationStore;

pub struct Context<'a> {
    /// Equations being resolved against
    store: &'a EquationStore,

    /// Variable originally requested
    root: &'a str,

    /// Number of evaluations started so far; 0 until the root begins
    phase: usize,

    /// Variables currently being evaluated, outermost first
    path: Vec<&'a str>,

    /// Same names as `path`, for membership checks
    on_path: HashSet<&'a str>,
}

impl<'a> Context<'a> {
    pub fn new(store: &'a EquationStore, root: &'a str) -> Self {
        Self {
            store,
            root,
            phase: 0,
            path: Vec::new(),
            on_path: HashSet::new(),
        }
    }

    pub fn store(&self) -> &'a EquationStore {
        self.store
    }

    pub fn root(&self) -> &'a str {
        self.root
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn advance_phase(&mut self) {
        self.phase += 1;
    }

    /// Number of variables on the current evaluation path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_on_path(&self, name: &str) -> bool {
        self.on_path.contains(name)
    }

    /// Push `name` onto the path. Returns whether it was not already there,
    /// which must be handed back to [`Context::leave`].
    pub fn enter(&mut self, name: &'a str) -> bool {
        self.path.push(name);
        self.on_path.insert(name)
    }

    pub fn leave(&mut self, name: &'a str, first_entry: bool) {
        self.path.pop();
        if first_entry {
            self.on_path.remove(name);
        }
    }

    pub fn path(&self) -> &[&'a str] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_starts_at_phase_zero() {
        let store = EquationStore::parse("a = 1").unwrap();
        let ctx = Context::new(&store, "a");
        assert_eq!(ctx.phase(), 0);
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.root(), "a");
    }

    #[test]
    fn test_enter_and_leave_track_path() {
        let store = EquationStore::default();
        let mut ctx = Context::new(&store, "a");

        let a = ctx.enter("a");
        let b = ctx.enter("b");
        assert!(a && b);
        assert_eq!(ctx.path(), &["a", "b"]);
        assert!(ctx.is_on_path("b"));

        ctx.leave("b", b);
        assert!(!ctx.is_on_path("b"));
        assert!(ctx.is_on_path("a"));
        assert_eq!(ctx.depth(), 1);
    }

    #[test]
    fn test_repeated_entry_keeps_membership_until_outer_leave() {
        let store = EquationStore::default();
        let mut ctx = Context::new(&store, "a");

        let outer = ctx.enter("b");
        let inner = ctx.enter("b");
        assert!(outer);
        assert!(!inner);

        ctx.leave("b", inner);
        assert!(ctx.is_on_path("b"));
        ctx.leave("b", outer);
        assert!(!ctx.is_on_path("b"));
    }
}
