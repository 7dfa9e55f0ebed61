pub mod error;
pub mod operators;
pub mod units;
pub mod variable;

pub use crate::operators::{render, GeneratorProfile, Node, Representable};
pub use crate::units::{Units, UnitsPtr};
pub use crate::variable::{InterfaceType, Variable, VariablePtr};
pub use error::CellmlError;

pub mod prelude {
    pub mod operators {
        pub use crate::operators::{
            add, call, constant, div, mul, pow, sub, var, BinaryKind, BinaryOperator, Constant,
            FunctionCall, MathFunction, VariableRef,
        };
    }
    pub mod variable {
        pub use crate::variable::{
            Format, InitialValue, InterfaceType, Variable, VariableDescription, VariablePtr,
        };
    }

    pub use crate::operators::{render, GeneratorProfile, Node, Representable};
    pub use crate::units::{Units, UnitsPtr};
    pub use crate::CellmlError;
}
