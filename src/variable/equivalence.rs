//! Weak, symmetric equivalence links between variables

use std::rc::Rc;

use crate::variable::errors::VariableError;
use crate::variable::{Variable, VariablePtr};

impl Variable {
    /// Declare two variables equivalent
    ///
    /// Records a weak link in both directions. Declaring an existing
    /// equivalence again leaves both link lists unchanged, and links to
    /// variables that have since been dropped are discarded. This is the only
    /// operation that adds links, so the network is always symmetric.
    pub fn add_equivalence(variable1: &VariablePtr, variable2: &VariablePtr) {
        variable1.set_equivalent_to(variable2);
        variable2.set_equivalent_to(variable1);
    }

    fn set_equivalent_to(&self, equivalent: &VariablePtr) {
        self.prune_decayed_links();
        if self.has_equivalent_variable(equivalent) {
            tracing::trace!(
                variable = %self.name(),
                equivalent = %equivalent.name(),
                "equivalence already recorded"
            );
            return;
        }
        self.equivalent_variables
            .borrow_mut()
            .push(Rc::downgrade(equivalent));
        tracing::trace!(
            variable = %self.name(),
            equivalent = %equivalent.name(),
            "recorded equivalence"
        );
    }

    /// Whether `candidate` is currently linked to this variable
    pub fn has_equivalent_variable(&self, candidate: &VariablePtr) -> bool {
        self.equivalent_variables
            .borrow()
            .iter()
            .any(|link| link.upgrade().is_some_and(|v| Rc::ptr_eq(&v, candidate)))
    }

    /// Number of equivalences whose target is still alive
    pub fn equivalent_variable_count(&self) -> usize {
        self.prune_decayed_links();
        self.equivalent_variables.borrow().len()
    }

    /// Equivalent variable at `index` among the live equivalences
    ///
    /// Indices run over `0..equivalent_variable_count()`; anything past
    /// that is an [`VariableError::IndexOutOfRange`].
    pub fn equivalent_variable(&self, index: usize) -> Result<Option<VariablePtr>, VariableError> {
        self.prune_decayed_links();
        let links = self.equivalent_variables.borrow();
        let link = links.get(index).ok_or(VariableError::IndexOutOfRange {
            index,
            count: links.len(),
        })?;
        Ok(link.upgrade())
    }

    /// All live equivalent variables, in declaration order
    pub fn equivalent_variables(&self) -> Vec<VariablePtr> {
        self.equivalent_variables
            .borrow()
            .iter()
            .filter_map(|link| link.upgrade())
            .collect()
    }

    /// Drop links whose target no longer exists
    fn prune_decayed_links(&self) {
        let mut links = self.equivalent_variables.borrow_mut();
        let before = links.len();
        links.retain(|link| link.strong_count() > 0);
        let pruned = before - links.len();
        if pruned > 0 {
            tracing::debug!(
                variable = %self.name(),
                pruned,
                "dropped decayed equivalence links"
            );
        }
    }
}
