use generational_arena::{Arena, Index};
use std::collections::HashSet;

use crate::types::*;

/// Returns the representative of the equivalence class containing `t`.
///
/// As a side effect every node visited along the way is relinked directly to
/// the representative so later lookups are a single hop.
pub fn find(arena: &mut Arena<Node>, t: Index) -> Index {
    let next = match arena[t].set {
        Some(next) => next,
        None => return t,
    };

    let root = find(arena, next);
    arena[t].set = Some(root);
    root
}

/// Node equality as used by `unify` to skip work on pairs that are already
/// the same type.
///
/// Two roots are equal if they have the same `(tag, left, right)` triple.
/// Two nodes that both have a representative are equal if they point at the
/// same representative.
pub fn nodes_equal(arena: &Arena<Node>, a: Index, b: Index) -> bool {
    match (arena[a].set, arena[b].set) {
        (None, None) => same_key(arena, a, b, &mut HashSet::new()),
        (Some(rep_a), Some(rep_b)) => rep_a == rep_b,
        _ => false,
    }
}

// Compares the unrepresentative triples, ignoring `set` links.  A pair that
// is already being compared further up is assumed equal, which is what lets
// the comparison finish on cyclic types.
fn same_key(
    arena: &Arena<Node>,
    a: Index,
    b: Index,
    assumed: &mut HashSet<(Index, Index)>,
) -> bool {
    if a == b || !assumed.insert((a, b)) {
        return true;
    }

    let (node_a, node_b) = (&arena[a], &arena[b]);
    if node_a.tag != node_b.tag {
        return false;
    }

    match (node_a.children(), node_b.children()) {
        (None, None) => true,
        (Some((left_a, right_a)), Some((left_b, right_b))) => {
            same_key(arena, left_a, left_b, assumed)
                && same_key(arena, right_a, right_b, assumed)
        }
        _ => false,
    }
}

/// Checks whether the class represented by `v` occurs anywhere inside the
/// type `t` (including `t` itself).
///
/// Types may be cyclic, so every class is visited at most once.
///
/// Note: `v` must be a root.
pub fn occurs_in_type(arena: &mut Arena<Node>, v: Index, t: Index) -> bool {
    occurs_rec(arena, v, t, &mut HashSet::new())
}

fn occurs_rec(arena: &mut Arena<Node>, v: Index, t: Index, seen: &mut HashSet<Index>) -> bool {
    let t = find(arena, t);
    if t == v {
        return true;
    }
    if !seen.insert(t) {
        return false;
    }

    match arena[t].children() {
        Some((left, right)) => {
            occurs_rec(arena, v, left, seen) || occurs_rec(arena, v, right, seen)
        }
        None => false,
    }
}
