//! Settings for embedding rendered expressions into generated code

use serde::{Deserialize, Serialize};

use crate::error::CellmlError;
use crate::operators::{render, MathFunction, Representable};

/// How a rendered expression is embedded into a statement
///
/// The renderer itself never qualifies function names or emits
/// statements; a profile is what a code template uses to do so.
///
/// # Example
///
/// ```
/// use cellml::operators::{mul, var, GeneratorProfile};
///
/// let profile = GeneratorProfile::from_json(r#"{ "terminator": "" }"#).unwrap();
/// assert_eq!(profile.statement("y", &mul(var("k"), var("x"))), "y = k * x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorProfile {
    /// Text placed between the assigned name and the expression
    pub assignment: String,
    /// Text closing every statement
    pub terminator: String,
    /// Namespace prepended by [`GeneratorProfile::qualify`]
    pub function_prefix: String,
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        Self {
            assignment: " = ".to_string(),
            terminator: ";".to_string(),
            function_prefix: String::new(),
        }
    }
}

impl GeneratorProfile {
    /// Parse a profile from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, CellmlError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Emit `target = <expression>;` using this profile's punctuation
    pub fn statement(&self, target: &str, node: &dyn Representable) -> String {
        let statement = format!(
            "{}{}{}{}",
            target,
            self.assignment,
            render(node),
            self.terminator
        );
        tracing::trace!(assigned = target, "rendered statement");
        statement
    }

    /// Function identifier qualified for the target environment
    pub fn qualify(&self, function: MathFunction) -> String {
        format!("{}{}", self.function_prefix, function.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::{call, pow, var};

    #[test]
    fn test_default_statement() {
        let profile = GeneratorProfile::default();
        let expr = pow(var("x"), call("exp", var("t")).unwrap());
        assert_eq!(profile.statement("y", &expr), "y = pow(x, exp(t));");
    }

    #[test]
    fn test_from_json_partial() {
        let profile = GeneratorProfile::from_json(r#"{ "function_prefix": "std::" }"#).unwrap();
        assert_eq!(profile.assignment, " = ");
        assert_eq!(profile.terminator, ";");
        assert_eq!(profile.qualify(MathFunction::Sin), "std::sin");
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let result = GeneratorProfile::from_json(r#"{ "indent": 4 }"#);
        assert!(matches!(result, Err(CellmlError::Json(_))));
    }

    #[test]
    fn test_qualify_does_not_touch_render() {
        let profile = GeneratorProfile {
            function_prefix: "Math.".to_string(),
            ..Default::default()
        };
        let expr = call("cos", var("t")).unwrap();
        assert_eq!(profile.statement("c", &expr), "c = cos(t);");
        assert_eq!(profile.qualify(MathFunction::Cos), "Math.cos");
    }
}
