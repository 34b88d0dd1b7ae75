use generational_arena::Index;
use log::{debug, trace};

use crate::checker::Checker;
use crate::context::Context;
use crate::errors::*;
use crate::util::*;

impl Checker {
    /// Merges the equivalence classes of `m` and `n`.
    ///
    /// The union has a direction.  Type operators always end up as the
    /// representative over variables, and non-generic variables end up as the
    /// representative over generic ones.
    pub fn union(&mut self, m: Index, n: Index, ctx: &Context) {
        let m_root = find(&mut self.arena, m);
        let n_root = find(&mut self.arena, n);
        if m_root == n_root {
            return;
        }

        let m_is_var = self.arena[m_root].is_variable();
        let n_is_var = self.arena[n_root].is_variable();

        let (child, parent) = match (m_is_var, n_is_var) {
            (false, true) => (n_root, m_root),
            (true, false) => (m_root, n_root),
            (true, true) => {
                if self.is_generic(m_root, ctx) {
                    (m_root, n_root)
                } else {
                    (n_root, m_root)
                }
            }
            (false, false) => (m_root, n_root),
        };

        trace!("union: {child:?} -> {parent:?}");
        self.arena[child].set = Some(parent);
    }

    /// Unify the two types `m` and `n`.
    ///
    /// Makes the types `m` and `n` the same by merging their equivalence
    /// classes, recursing into the children of composite types.
    ///
    /// A variable unifies with anything, including a type that contains it.
    /// The resulting graph is cyclic and stands for a recursive type.
    ///
    /// Errors:
    ///     TypeMismatch: Raised if the types cannot be unified.
    pub fn unify(&mut self, m: Index, n: Index, ctx: &Context) -> Result<(), Errors> {
        let s = find(&mut self.arena, m);
        let t = find(&mut self.arena, n);

        if nodes_equal(&self.arena, s, t) {
            return Ok(());
        }

        let s_node = self.arena[s].clone();
        let t_node = self.arena[t].clone();

        if s_node.is_variable() || t_node.is_variable() {
            self.union(s, t, ctx);
            return Ok(());
        }

        if s_node.tag != t_node.tag {
            return Err(self.mismatch(s, t));
        }

        if s_node.is_basic_type() {
            return Ok(());
        }

        // Link the two classes before recursing so that constraints which
        // lead back to this pair stop at the `nodes_equal` check.
        self.union(s, t, ctx);

        match (s_node.children(), t_node.children()) {
            (Some((s_left, s_right)), Some((t_left, t_right))) => {
                self.unify(s_left, t_left, ctx)?;
                self.unify(s_right, t_right, ctx)
            }
            _ => Ok(()),
        }
    }

    fn mismatch(&mut self, s: Index, t: Index) -> Errors {
        debug!("type mismatch between {s:?} and {t:?}");
        let left = self.print_type(s);
        let right = self.print_type(t);
        Errors::TypeMismatch(left, right)
    }
}
