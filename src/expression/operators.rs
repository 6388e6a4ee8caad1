use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::expression::node::{Kind, Node};
use crate::math::constants::{EXPONENT_LIMIT, FACTORIAL_LIMIT};
use crate::math::{exact_root, factorial, nth_root};

/// Operators applied to a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Fac,
    Min,
    Sqrt,
}

/// Operators applied to an adjacent pair of nodes, left operand first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl UnaryOp {
    /// Catalog order, which fixes the enumeration order of the search
    pub const ALL: [UnaryOp; 3] = [UnaryOp::Fac, UnaryOp::Min, UnaryOp::Sqrt];

    pub fn kind(self) -> Kind {
        match self {
            UnaryOp::Fac => Kind::Fac,
            UnaryOp::Min => Kind::Min,
            UnaryOp::Sqrt => Kind::Sqrt,
        }
    }

    pub fn is_valid(self, x: &Node) -> bool {
        let value = x.value();
        match self {
            UnaryOp::Fac => {
                value.is_integer()
                    && !value.is_negative()
                    && value.to_integer() < BigInt::from(FACTORIAL_LIMIT)
                    && !value.is_one()
            }
            UnaryOp::Min => x.kind() != Kind::Min,
            UnaryOp::Sqrt => {
                exact_root(value.numer(), &BigInt::from(2)).is_some()
                    && exact_root(value.denom(), &BigInt::from(2)).is_some()
            }
        }
    }

    /// Build the node for `self` applied to `x`, or `None` when not valid
    pub fn apply(self, x: &Node) -> Option<Node> {
        if !self.is_valid(x) {
            return None;
        }

        let value = x.value();
        let (value, text) = match self {
            UnaryOp::Fac => {
                let n = value.to_integer().to_usize()?;
                (factorial(n)?.clone(), format!("({})!", x.text()))
            }
            UnaryOp::Min => (-value, format!("−({})", x.text())),
            UnaryOp::Sqrt => {
                let numer = nth_root(value.numer(), 2)?;
                let denom = nth_root(value.denom(), 2)?;
                (BigRational::new(numer, denom), format!("√({})", x.text()))
            }
        };
        Some(Node::unary(self.kind(), value, text, x))
    }
}

impl BinaryOp {
    /// Catalog order, which fixes the enumeration order of the search
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Exp,
    ];

    pub fn kind(self) -> Kind {
        match self {
            BinaryOp::Add => Kind::Add,
            BinaryOp::Sub => Kind::Sub,
            BinaryOp::Mul => Kind::Mul,
            BinaryOp::Div => Kind::Div,
            BinaryOp::Exp => Kind::Exp,
        }
    }

    pub fn is_valid(self, x: &Node, y: &Node) -> bool {
        match self {
            // Prefer (a + b) + c and a − b over a + (b + c) and a + (−b)
            BinaryOp::Add | BinaryOp::Sub => {
                !matches!(y.kind(), Kind::Min | Kind::Add | Kind::Sub)
            }
            BinaryOp::Mul => !matches!(y.kind(), Kind::Min | Kind::Mul | Kind::Div),
            BinaryOp::Div => {
                !y.value().is_zero() && !matches!(y.kind(), Kind::Min | Kind::Mul | Kind::Div)
            }
            BinaryOp::Exp => exponent_is_valid(x, y),
        }
    }

    /// Build the node for `x <op> y`, or `None` when not valid
    pub fn apply(self, x: &Node, y: &Node) -> Option<Node> {
        if !self.is_valid(x, y) {
            return None;
        }

        let (a, b) = (x.value(), y.value());
        let (value, text) = match self {
            BinaryOp::Add => (a + b, format!("({}) + ({})", x.text(), y.text())),
            BinaryOp::Sub => (a - b, format!("({}) − ({})", x.text(), y.text())),
            BinaryOp::Mul => (a * b, format!("({}) × ({})", x.text(), y.text())),
            BinaryOp::Div => (a / b, format!("({}) / ({})", x.text(), y.text())),
            BinaryOp::Exp => (
                exact_power(a, b)?,
                format!("({})^({})", x.text(), y.text()),
            ),
        };
        Some(Node::binary(self.kind(), value, text, x, y))
    }
}

fn exponent_is_valid(x: &Node, y: &Node) -> bool {
    let (base, exponent) = (x.value(), y.value());

    if y.kind() == Kind::Exp {
        return false;
    }

    if base.is_zero() && exponent.is_negative() {
        return false;
    }

    let unit_base = base.is_integer() && base.numer().abs().is_one();
    if !unit_base && exponent.abs() >= BigRational::from_integer(BigInt::from(EXPONENT_LIMIT)) {
        return false;
    }

    exact_root(base.numer(), exponent.denom()).is_some()
        && exact_root(base.denom(), exponent.denom()).is_some()
}

/// `base^exponent` for an exponent whose denominator divides out exactly
fn exact_power(base: &BigRational, exponent: &BigRational) -> Option<BigRational> {
    let flip = exponent.is_negative();
    let exponent = exponent.abs();

    let numer = exact_root(base.numer(), exponent.denom())?;
    let denom = exact_root(base.denom(), exponent.denom())?;
    let numer = integer_power(&numer, exponent.numer())?;
    let denom = integer_power(&denom, exponent.numer())?;

    if flip {
        if numer.is_zero() {
            return None;
        }
        Some(BigRational::new(denom, numer))
    } else {
        Some(BigRational::new(numer, denom))
    }
}

/// `base^exp` for `exp >= 0`; only 0, 1 and -1 accept exponents beyond `u32`
fn integer_power(base: &BigInt, exp: &BigInt) -> Option<BigInt> {
    if let Some(exp) = exp.to_u32() {
        return Some(base.pow(exp));
    }

    if exp.is_negative() {
        None
    } else if base.is_zero() || base.is_one() {
        Some(base.clone())
    } else if *base == -BigInt::one() {
        Some(if exp.is_even() { BigInt::one() } else { base.clone() })
    } else {
        None
    }
}
