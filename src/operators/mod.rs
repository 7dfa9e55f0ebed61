//! Expression rendering
//!
//! An expression extracted from a model is held as a tree of nodes, each of
//! which knows how to represent itself as target-language source text. The
//! root node is rendered by recursively rendering its children, so any
//! subtree can be rendered on its own.
//!
//! Node kinds are independent types implementing [`Representable`]; adding a
//! new operator or function means adding a new type, not editing a central
//! dispatch.
//!
//! # Example
//!
//! ```
//! use cellml::operators::{add, call, constant, pow, render, var};
//!
//! let expr = add(pow(var("x"), constant(2.0)), call("sin", var("t")).unwrap());
//! assert_eq!(render(&expr), "pow(x, 2) + sin(t)");
//! ```

mod binary;
mod errors;
mod leaves;
mod profile;
mod unary;

use std::fmt;

pub use binary::{BinaryKind, BinaryOperator};
pub use errors::OperatorError;
pub use leaves::{Constant, VariableRef};
pub use profile::GeneratorProfile;
pub use unary::{FunctionCall, MathFunction};

/// Anything that can be represented in generated code
pub trait Representable: fmt::Debug {
    /// Produce the source text for this node and its subtree
    fn repr(&self) -> String;
}

/// An owned node of an expression tree
pub type Node = Box<dyn Representable>;

impl<T: Representable + ?Sized> Representable for Box<T> {
    fn repr(&self) -> String {
        (**self).repr()
    }
}

impl fmt::Display for dyn Representable + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

/// Render an expression tree to source text
///
/// Rendering never mutates the tree and is defined for every node kind.
/// It recurses once per tree level, as does dropping a tree, so extremely
/// deep trees (long left-leaning chains of tens of thousands of terms) can
/// exhaust the stack; balance large generated sums before rendering.
pub fn render(node: &dyn Representable) -> String {
    node.repr()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builders
// ═══════════════════════════════════════════════════════════════════════════════

/// Leaf referencing a variable by name
pub fn var(name: impl Into<String>) -> Node {
    Box::new(VariableRef::new(name))
}

/// Numeric literal leaf
pub fn constant(value: f64) -> Node {
    Box::new(Constant::new(value))
}

/// `lhs + rhs`
pub fn add(lhs: Node, rhs: Node) -> Node {
    Box::new(BinaryOperator::new(BinaryKind::Add, lhs, rhs))
}

/// `lhs - rhs`
pub fn sub(lhs: Node, rhs: Node) -> Node {
    Box::new(BinaryOperator::new(BinaryKind::Sub, lhs, rhs))
}

/// `lhs * rhs`
pub fn mul(lhs: Node, rhs: Node) -> Node {
    Box::new(BinaryOperator::new(BinaryKind::Mul, lhs, rhs))
}

/// `lhs / rhs`
pub fn div(lhs: Node, rhs: Node) -> Node {
    Box::new(BinaryOperator::new(BinaryKind::Div, lhs, rhs))
}

/// `pow(base, exponent)`
pub fn pow(base: Node, exponent: Node) -> Node {
    Box::new(BinaryOperator::new(BinaryKind::Pow, base, exponent))
}

/// Call of a recognized function, looked up by name
pub fn call(name: &str, arg: Node) -> Result<Node, OperatorError> {
    Ok(Box::new(FunctionCall::named(name, arg)?))
}
