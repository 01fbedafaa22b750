//! Binary expression tree for the exan analyzer.
//!
//! A tree is built bottom-up from a postfix token sequence, so it is
//! acyclic and strictly owned: internal nodes always hold an operator
//! and exactly two children, leaves always hold a single operand
//! character. The tree can be re-rendered as prefix, postfix, or
//! canonical (fully parenthesized) infix notation, or drawn as a text
//! diagram.

pub mod ast;
pub mod display;

pub use ast::{BinaryNode, ExprNode};
pub use display::render_diagram;
