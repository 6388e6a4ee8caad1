//! Expression nodes and the operators that combine them

mod display;
mod node;
mod operators;

pub use node::{Kind, Node, Sequence};
pub use operators::{BinaryOp, UnaryOp};
