use generational_arena::{Arena, Index};
use std::collections::HashMap;

use crate::types::*;

/// Hands out display names for type variables in the order they're first
/// printed: `a`..`z`, then `a1`..`z1`, `a2`, etc.
#[derive(Debug, Default)]
pub struct Namer {
    pub next: usize,
    pub names: HashMap<usize, String>,
}

impl Namer {
    pub fn name_for(&mut self, var: &TypeVariable) -> String {
        if let Some(name) = self.names.get(&var.id) {
            return name.to_owned();
        }

        let letter = (b'a' + (self.next % 26) as u8) as char;
        let name = match self.next / 26 {
            0 => letter.to_string(),
            round => format!("{letter}{round}"),
        };
        self.next += 1;
        self.names.insert(var.id, name.clone());
        name
    }
}

/// One inference session.
///
/// Owns the type graph along with the counters used to identify and name
/// type variables.  Nothing is shared between two checkers.
#[derive(Debug, Default)]
pub struct Checker {
    pub arena: Arena<Node>,
    pub namer: Namer,
    next_var_id: usize,
}

impl Checker {
    pub fn new_var(&mut self) -> Index {
        let id = self.next_var_id;
        self.next_var_id += 1;
        self.arena
            .insert(Node::new(Tag::Variable(TypeVariable { id }), None, None))
    }

    pub fn new_basic(&mut self, op: TypeOperator) -> Index {
        self.arena.insert(Node::new(Tag::Operator(op), None, None))
    }

    pub fn new_operator(&mut self, op: TypeOperator, left: Index, right: Index) -> Index {
        self.arena
            .insert(Node::new(Tag::Operator(op), Some(left), Some(right)))
    }

    pub fn new_func_type(&mut self, arg: Index, ret: Index) -> Index {
        self.new_operator(TypeOperator::function(), arg, ret)
    }

    pub fn new_product_type(&mut self, left: Index, right: Index) -> Index {
        self.new_operator(TypeOperator::product(), left, right)
    }

    pub fn new_sum_type(&mut self, left: Index, right: Index) -> Index {
        self.new_operator(TypeOperator::sum(), left, right)
    }

    /// Renders the type rooted at `t`, e.g. `(a -> (a * int))`.
    ///
    /// Non-root nodes print as their current representative so the output
    /// always reflects what unification has learned so far.  A composite that
    /// contains itself prints `...` where it recurs, e.g. `(... -> a)` for
    /// `a = (a -> b)`.
    pub fn print_type(&mut self, t: Index) -> String {
        self.print_rec(t, &mut vec![])
    }

    // `active` holds the composite roots currently being rendered.
    fn print_rec(&mut self, t: Index, active: &mut Vec<Index>) -> String {
        let node = &self.arena[t];
        if let Some(rep) = node.set {
            return self.print_rec(rep, active);
        }

        match (node.tag.clone(), node.children()) {
            (Tag::Variable(var), _) => self.namer.name_for(&var),
            (Tag::Operator(op), None) => op.to_string(),
            (Tag::Operator(_), Some(_)) if active.contains(&t) => "...".to_string(),
            (Tag::Operator(op), Some((left, right))) => {
                active.push(t);
                let left = self.print_rec(left, active);
                let right = self.print_rec(right, active);
                active.pop();
                format!("({left} {op} {right})")
            }
        }
    }
}
