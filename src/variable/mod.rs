//! Model variables and the equivalence network between them
//!
//! A [`Variable`] is owned by the model-assembly layer through a shared
//! [`VariablePtr`]. Equivalences recorded with [`Variable::add_equivalence`]
//! are weak: they never keep a variable alive, and a link whose target has
//! been dropped reads as absent.
//!
//! ```
//! use cellml::variable::Variable;
//!
//! let a = Variable::shared("V");
//! let b = Variable::shared("V_membrane");
//! Variable::add_equivalence(&a, &b);
//! assert!(a.has_equivalent_variable(&b));
//!
//! drop(b);
//! assert_eq!(a.equivalent_variable_count(), 0);
//! ```

mod equivalence;
mod errors;
mod initial_value;
mod interface;
mod serialise;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::units::UnitsPtr;

pub use errors::VariableError;
pub use initial_value::InitialValue;
pub use interface::InterfaceType;
pub use serialise::{Format, VariableDescription};

/// Shared handle to a variable
pub type VariablePtr = Rc<Variable>;

/// A named quantity in a model
///
/// Attributes use interior mutability so a variable can be updated through
/// any of its shared handles. Access is single-threaded; a host sharing
/// variables across threads must serialize access itself.
#[derive(Debug, Default)]
pub struct Variable {
    name: RefCell<String>,
    units: RefCell<Option<UnitsPtr>>,
    initial_value: RefCell<Option<InitialValue>>,
    interface_type: Cell<InterfaceType>,
    equivalent_variables: RefCell<Vec<Weak<Variable>>>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: RefCell::new(name.into()),
            ..Default::default()
        }
    }

    /// Create a variable behind a shared handle
    pub fn shared(name: impl Into<String>) -> VariablePtr {
        Rc::new(Self::new(name))
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = name.into();
    }

    pub fn units(&self) -> Option<UnitsPtr> {
        self.units.borrow().clone()
    }

    pub fn set_units(&self, units: Option<UnitsPtr>) {
        *self.units.borrow_mut() = units;
    }

    pub fn initial_value(&self) -> Option<InitialValue> {
        self.initial_value.borrow().clone()
    }

    /// Set the initial value from a literal, another variable, or document text
    pub fn set_initial_value(&self, value: impl Into<InitialValue>) {
        *self.initial_value.borrow_mut() = Some(value.into());
    }

    pub fn clear_initial_value(&self) {
        *self.initial_value.borrow_mut() = None;
    }

    pub fn interface_type(&self) -> InterfaceType {
        self.interface_type.get()
    }

    pub fn set_interface_type(&self, interface_type: InterfaceType) {
        self.interface_type.set(interface_type);
    }
}

/// Copies the attributes only; the copy starts without equivalences, since
/// links are only ever created in pairs by [`Variable::add_equivalence`].
impl Clone for Variable {
    fn clone(&self) -> Self {
        Self {
            name: RefCell::new(self.name()),
            units: RefCell::new(self.units()),
            initial_value: RefCell::new(self.initial_value()),
            interface_type: Cell::new(self.interface_type()),
            equivalent_variables: RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Units;

    #[test]
    fn test_attributes() {
        let v = Variable::new("Na_i");
        v.set_units(Some(Rc::new(Units::new("millimolar"))));
        v.set_initial_value(10.0);
        v.set_interface_type(InterfaceType::Public);

        assert_eq!(v.name(), "Na_i");
        assert_eq!(v.units().unwrap().name(), "millimolar");
        assert_eq!(v.initial_value(), Some(InitialValue::Literal("10".to_string())));
        assert_eq!(v.initial_value().and_then(|i| i.value()), Some(10.0));
        assert_eq!(v.interface_type(), InterfaceType::Public);

        v.clear_initial_value();
        assert_eq!(v.initial_value(), None);
    }

    #[test]
    fn test_initial_value_from_variable() {
        let source = Variable::new("V_rest");
        let v = Variable::new("V");
        v.set_initial_value(&source);
        assert_eq!(
            v.initial_value(),
            Some(InitialValue::Variable("V_rest".to_string()))
        );
    }

    #[test]
    fn test_defaults() {
        let v = Variable::new("t");
        assert!(v.units().is_none());
        assert!(v.initial_value().is_none());
        assert_eq!(v.interface_type(), InterfaceType::None);
        assert_eq!(v.equivalent_variable_count(), 0);
    }

    #[test]
    fn test_clone_copies_attributes_but_not_links() {
        let a = Variable::shared("a");
        let b = Variable::shared("b");
        a.set_interface_type(InterfaceType::Private);
        a.set_initial_value("b");
        Variable::add_equivalence(&a, &b);

        let copy = Rc::new((*a).clone());
        assert_eq!(copy.name(), "a");
        assert_eq!(copy.interface_type(), InterfaceType::Private);
        assert_eq!(copy.initial_value(), a.initial_value());
        assert_eq!(copy.equivalent_variable_count(), 0);
        assert!(!b.has_equivalent_variable(&copy));
    }
}
