//! Binary operators: arithmetic and power

use std::fmt;
use std::str::FromStr;

use crate::operators::errors::OperatorError;
use crate::operators::{Node, Representable};

/// The kind of a binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    Add,
    Sub,
    Mul,
    Div,
    /// Rendered as a `pow(base, exponent)` call, not an infix operator
    Pow,
}

impl BinaryKind {
    /// Infix symbol for arithmetic kinds, `None` for [`BinaryKind::Pow`]
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Sub => Some("-"),
            Self::Mul => Some("*"),
            Self::Div => Some("/"),
            Self::Pow => None,
        }
    }
}

impl fmt::Display for BinaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "pow"),
        }
    }
}

/// Accepts both infix symbols and MathML operator element names
impl FromStr for BinaryKind {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "plus" => Ok(Self::Add),
            "-" | "minus" => Ok(Self::Sub),
            "*" | "times" => Ok(Self::Mul),
            "/" | "divide" => Ok(Self::Div),
            "^" | "pow" | "power" => Ok(Self::Pow),
            other => Err(OperatorError::unknown_operator(other)),
        }
    }
}

/// An operator with two exclusively owned operands
#[derive(Debug)]
pub struct BinaryOperator {
    kind: BinaryKind,
    lhs: Node,
    rhs: Node,
}

impl BinaryOperator {
    pub fn new(kind: BinaryKind, lhs: Node, rhs: Node) -> Self {
        Self { kind, lhs, rhs }
    }

    pub fn kind(&self) -> BinaryKind {
        self.kind
    }

    pub fn lhs(&self) -> &dyn Representable {
        self.lhs.as_ref()
    }

    pub fn rhs(&self) -> &dyn Representable {
        self.rhs.as_ref()
    }

    /// Replace the left operand, returning the previous subtree
    pub fn set_lhs(&mut self, lhs: Node) -> Node {
        std::mem::replace(&mut self.lhs, lhs)
    }

    /// Replace the right operand, returning the previous subtree
    pub fn set_rhs(&mut self, rhs: Node) -> Node {
        std::mem::replace(&mut self.rhs, rhs)
    }
}

impl Representable for BinaryOperator {
    fn repr(&self) -> String {
        match self.kind.symbol() {
            Some(symbol) => format!("{} {} {}", self.lhs.repr(), symbol, self.rhs.repr()),
            None => format!("pow({}, {})", self.lhs.repr(), self.rhs.repr()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::{constant, var};

    #[test]
    fn test_arithmetic_layout() {
        for (kind, expected) in [
            (BinaryKind::Add, "x + y"),
            (BinaryKind::Sub, "x - y"),
            (BinaryKind::Mul, "x * y"),
            (BinaryKind::Div, "x / y"),
        ] {
            let op = BinaryOperator::new(kind, var("x"), var("y"));
            assert_eq!(op.repr(), expected);
        }
    }

    #[test]
    fn test_power_is_a_call() {
        let op = BinaryOperator::new(BinaryKind::Pow, var("x"), constant(2.0));
        assert_eq!(op.repr(), "pow(x, 2)");
    }

    #[test]
    fn test_power_with_fractional_and_negative_exponents() {
        let root = BinaryOperator::new(BinaryKind::Pow, var("V"), constant(0.75));
        assert_eq!(root.repr(), "pow(V, 0.75)");
        let inverse = BinaryOperator::new(BinaryKind::Pow, var("V"), constant(-1.0));
        assert_eq!(inverse.repr(), "pow(V, -1)");
    }

    #[test]
    fn test_replace_operand() {
        let mut op = BinaryOperator::new(BinaryKind::Mul, var("k"), var("old"));
        let previous = op.set_rhs(constant(3.0));
        assert_eq!(previous.repr(), "old");
        assert_eq!(op.repr(), "k * 3");

        op.set_lhs(var("ke"));
        assert_eq!(op.lhs().repr(), "ke");
        assert_eq!(op.repr(), "ke * 3");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("times".parse::<BinaryKind>().unwrap(), BinaryKind::Mul);
        assert_eq!("^".parse::<BinaryKind>().unwrap(), BinaryKind::Pow);
        assert_eq!(
            "%".parse::<BinaryKind>().unwrap_err(),
            OperatorError::unknown_operator("%")
        );
    }
}
