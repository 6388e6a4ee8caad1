use std::sync::Arc;

use num_bigint::BigInt;
use num_rational::BigRational;

/// Which operator produced a node, consulted by adjacency rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Num,
    Add,
    Sub,
    Mul,
    Div,
    Exp,
    Fac,
    Min,
    Sqrt,
}

/// An immutable, fully evaluated expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: Kind,
    value: BigRational,
    text: String,
    cost: usize,
}

/// A partially combined expression, left to right
pub type Sequence = Vec<Arc<Node>>;

impl Node {
    /// A literal leaf with no operators
    pub fn literal(n: BigInt) -> Self {
        Self {
            kind: Kind::Num,
            text: n.to_string(),
            value: BigRational::from_integer(n),
            cost: 0,
        }
    }

    pub(crate) fn unary(kind: Kind, value: BigRational, text: String, operand: &Node) -> Self {
        Self {
            kind,
            value,
            text,
            cost: operand.cost + 1,
        }
    }

    pub(crate) fn binary(
        kind: Kind,
        value: BigRational,
        text: String,
        left: &Node,
        right: &Node,
    ) -> Self {
        Self {
            kind,
            value,
            text,
            cost: left.cost + right.cost + 1,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn value(&self) -> &BigRational {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of operators used to build this node
    pub fn cost(&self) -> usize {
        self.cost
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::literal(BigInt::from(n))
    }
}
