use generational_arena::Index;
use im::hashmap::HashMap;
use im::hashset::HashSet;
use std::collections::HashMap as Mappings;

use crate::checker::Checker;
use crate::errors::*;
use crate::literal::is_integer_literal;
use crate::types::*;
use crate::util::*;

/// The typing environment for one scope.
///
/// Both maps are persistent so extending a context for a nested scope is a
/// cheap copy and never disturbs the parent scope or sibling scopes.
#[derive(Clone, Debug, Default)]
pub struct Context {
    // Maps variables to their type schemes.
    pub values: HashMap<String, Index>,
    // A set of non-generic type variables, i.e. the types of lambda-bound
    // parameters in the current scope.
    pub non_generic: HashSet<Index>,
}

impl Context {
    /// Returns a copy of the context with `name` bound to `t`.
    pub fn bind(&self, name: &str, t: Index) -> Context {
        Context {
            values: self.values.update(name.to_string(), t),
            non_generic: self.non_generic.clone(),
        }
    }

    /// Returns a copy of the context with `name` bound to `t` and `t` marked
    /// as non-generic.
    pub fn bind_non_generic(&self, name: &str, t: Index) -> Context {
        Context {
            values: self.values.update(name.to_string(), t),
            non_generic: self.non_generic.update(t),
        }
    }
}

impl Checker {
    /// Get the type of identifier `name` from the context `ctx`.
    ///
    /// Bound names are instantiated with `fresh`.  Unbound names that spell
    /// an integer are given the type `int`.
    pub fn get_type(&mut self, name: &str, ctx: &Context) -> Result<Index, Errors> {
        if let Some(value) = ctx.values.get(name) {
            Ok(self.fresh(*value, ctx))
        } else if is_integer_literal(name) {
            Ok(self.new_basic(TypeOperator::integer()))
        } else {
            Err(Errors::UndefinedSymbol(name.to_string()))
        }
    }

    /// Makes a copy of a type expression.
    ///
    /// The generic variables are duplicated and the non-generic variables are
    /// shared.  Every occurrence of the same generic variable maps to the same
    /// new variable, and every occurrence of the same composite maps to the
    /// same copy, so cyclic types are copied as cyclic types.
    pub fn fresh(&mut self, t: Index, ctx: &Context) -> Index {
        // A mapping of generic variables and composites to their replacements
        let mut mappings: Mappings<Index, Index> = Mappings::default();
        self.freshrec(t, &mut mappings, ctx)
    }

    fn freshrec(
        &mut self,
        tp: Index,
        mappings: &mut Mappings<Index, Index>,
        ctx: &Context,
    ) -> Index {
        let p = find(&mut self.arena, tp);
        let node = self.arena[p].clone();

        if node.is_basic_type() {
            return p;
        }
        if let Some(copy) = mappings.get(&p) {
            return *copy;
        }

        let children = node.children();
        match (node.tag, children) {
            (Tag::Variable(_), _) => {
                if self.is_generic(p, ctx) {
                    let copy = self.new_var();
                    mappings.insert(p, copy);
                    copy
                } else {
                    p
                }
            }
            (Tag::Operator(op), Some((left, right))) => {
                // the copy is registered before its children are filled in
                let copy = self.arena.insert(Node::new(Tag::Operator(op), None, None));
                mappings.insert(p, copy);
                let left = self.freshrec(left, mappings, ctx);
                let right = self.freshrec(right, mappings, ctx);
                let node = &mut self.arena[copy];
                node.left = Some(left);
                node.right = Some(right);
                copy
            }
            // nullary operators other than the basic types
            (Tag::Operator(op), None) => self.new_basic(op),
        }
    }

    /// Checks whether the variable `v` is generic in `ctx`.
    ///
    /// Note that a non-generic variable may since have been unified with a
    /// type term, in which case the variables contained in that term are
    /// considered non-generic as well.
    pub fn is_generic(&mut self, v: Index, ctx: &Context) -> bool {
        let root = find(&mut self.arena, v);
        !ctx
            .non_generic
            .iter()
            .any(|ng| occurs_in_type(&mut self.arena, root, *ng))
    }
}
