//! Units referenced by variables
//!
//! Unit definitions and their consistency checks live with the model
//! assembly layer; a variable only needs to know which units it refers to.

use std::rc::Rc;

/// Shared handle to a units definition
pub type UnitsPtr = Rc<Units>;

/// A named units definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Units {
    name: String,
}

impl Units {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
