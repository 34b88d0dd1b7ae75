// Type variables, type operators and the nodes of the type graph
use generational_arena::Index;
use std::fmt;

/// A type variable standing for an arbitrary type.
///
/// All type variables have a unique id, but names are only assigned lazily,
/// when required (see `Namer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeVariable {
    pub id: usize,
}

/// A named type constructor.  Two operators are the same operator iff their
/// names are the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeOperator {
    pub name: String,
}

impl TypeOperator {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn function() -> Self {
        Self::new(FUNCTION)
    }

    pub fn product() -> Self {
        Self::new(PRODUCT)
    }

    pub fn sum() -> Self {
        Self::new(SUM)
    }

    pub fn integer() -> Self {
        Self::new(INTEGER)
    }

    pub fn boolean() -> Self {
        Self::new(BOOLEAN)
    }

    pub fn unit() -> Self {
        Self::new(UNIT)
    }

    pub fn is_basic_type(&self) -> bool {
        matches!(self.name.as_str(), INTEGER | BOOLEAN | UNIT)
    }
}

impl fmt::Display for TypeOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub const FUNCTION: &str = "->";
pub const PRODUCT: &str = "*";
pub const SUM: &str = "+";

// Basic types are built with a nullary type operator.
pub const INTEGER: &str = "int";
pub const BOOLEAN: &str = "bool";
pub const UNIT: &str = "unit";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Variable(TypeVariable),
    Operator(TypeOperator),
}

/// A node in the type graph.
///
/// `left` and `right` are both present for the binary operators (function,
/// product, sum) and both absent for variables and basic types.  `set` is the
/// union-find link: `None` while the node is the representative of its own
/// equivalence class.
#[derive(Debug, Clone)]
pub struct Node {
    pub tag: Tag,
    pub left: Option<Index>,
    pub right: Option<Index>,
    pub set: Option<Index>,
}

impl Node {
    pub fn new(tag: Tag, left: Option<Index>, right: Option<Index>) -> Self {
        Self {
            tag,
            left,
            right,
            set: None,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.tag, Tag::Variable(_))
    }

    pub fn is_basic_type(&self) -> bool {
        match &self.tag {
            Tag::Operator(op) => op.is_basic_type(),
            Tag::Variable(_) => false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.set.is_none()
    }

    pub fn children(&self) -> Option<(Index, Index)> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }
}
