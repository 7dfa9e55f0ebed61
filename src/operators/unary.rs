//! Calls of recognized mathematical functions

use std::fmt;
use std::str::FromStr;

use crate::operators::errors::OperatorError;
use crate::operators::{Node, Representable};

/// Functions the renderer knows how to call
///
/// The rendered name carries no namespace; qualifying it for a target
/// environment is up to the template that embeds the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFunction {
    Abs,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Log,
    Log10,
    Sqrt,
    Floor,
    Ceil,
}

impl MathFunction {
    pub const ALL: [MathFunction; 16] = [
        Self::Abs,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Exp,
        Self::Log,
        Self::Log10,
        Self::Sqrt,
        Self::Floor,
        Self::Ceil,
    ];

    /// Identifier used in generated code
    pub fn name(&self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
        }
    }
}

impl fmt::Display for MathFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MathFunction {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|function| function.name() == s)
            .ok_or_else(|| OperatorError::unknown_function(s))
    }
}

/// A function applied to a single, exclusively owned argument
#[derive(Debug)]
pub struct FunctionCall {
    function: MathFunction,
    arg: Node,
}

impl FunctionCall {
    pub fn new(function: MathFunction, arg: Node) -> Self {
        Self { function, arg }
    }

    /// Build a call from a function name, rejecting unrecognized names
    pub fn named(name: &str, arg: Node) -> Result<Self, OperatorError> {
        Ok(Self::new(name.parse()?, arg))
    }

    pub fn function(&self) -> MathFunction {
        self.function
    }

    pub fn arg(&self) -> &dyn Representable {
        self.arg.as_ref()
    }

    /// Replace the argument, returning the previous subtree
    pub fn set_arg(&mut self, arg: Node) -> Node {
        std::mem::replace(&mut self.arg, arg)
    }
}

impl Representable for FunctionCall {
    fn repr(&self) -> String {
        format!("{}({})", self.function.name(), self.arg.repr())
    }
}
