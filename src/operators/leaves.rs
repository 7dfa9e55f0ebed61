//! Leaf nodes: variable references and numeric constants

use crate::operators::errors::OperatorError;
use crate::operators::Representable;

/// A reference to a variable by its textual identifier
///
/// Only the name is kept; the node does not link to the variable entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRef {
    name: String,
}

impl VariableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Representable for VariableRef {
    fn repr(&self) -> String {
        self.name.clone()
    }
}

/// A numeric literal
///
/// Infinite and NaN values render as `inf` and `NaN`, which most C-like
/// targets do not accept as literals. Use [`Constant::finite`] when the
/// value comes from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Build a constant, rejecting infinite and NaN values
    pub fn finite(value: f64) -> Result<Self, OperatorError> {
        if value.is_finite() {
            Ok(Self::new(value))
        } else {
            Err(OperatorError::NonFiniteConstant {
                value: value.to_string(),
            })
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Representable for Constant {
    /// Shortest text that parses back to the same `f64`
    fn repr(&self) -> String {
        self.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_name_is_verbatim() {
        assert_eq!(VariableRef::new("V_max_2").repr(), "V_max_2");
        assert_eq!(VariableRef::new("Ca_i").repr(), "Ca_i");
    }

    #[test]
    fn test_constant_integral_value() {
        assert_eq!(Constant::new(2.0).repr(), "2");
        assert_eq!(Constant::new(-15.0).repr(), "-15");
    }

    #[test]
    fn test_finite_constructor() {
        assert_eq!(Constant::finite(1.5).unwrap().repr(), "1.5");
        assert_eq!(
            Constant::finite(f64::INFINITY).unwrap_err(),
            OperatorError::NonFiniteConstant {
                value: "inf".to_string()
            }
        );
        assert!(Constant::finite(f64::NAN).is_err());
        // Unchecked construction keeps the host's text for non-finite values
        assert_eq!(Constant::new(f64::NEG_INFINITY).repr(), "-inf");
    }

    #[test]
    fn test_constant_round_trips() {
        for value in [
            0.1,
            1.0 / 3.0,
            6.02214076e23,
            -1.602176634e-19,
            f64::MAX,
            f64::MIN_POSITIVE,
            f64::EPSILON,
            123456789.123456789,
        ] {
            let text = Constant::new(value).repr();
            let parsed: f64 = text.parse().unwrap();
            assert_eq!(parsed.to_bits(), value.to_bits(), "{} -> {}", value, text);
        }
    }
}
