use std::fmt;

use crate::variable::Variable;

/// Initial value of a variable: a numeric literal, or the name of another variable
///
/// Literals keep the exact text they were given, so a value read from a
/// document is written back unchanged (`1.50` stays `1.50`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InitialValue {
    Literal(String),
    Variable(String),
}

impl InitialValue {
    /// Interpret text the way it appears in a model document
    ///
    /// Text that starts like a number and parses as one is a literal;
    /// anything else names a variable.
    pub fn parse(text: &str) -> Self {
        if is_numeric_literal(text) {
            Self::Literal(text.to_string())
        } else {
            Self::Variable(text.to_string())
        }
    }

    /// Numeric value of a literal, `None` for a variable reference
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Literal(text) => text.parse().ok(),
            Self::Variable(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) | Self::Variable(text) => text,
        }
    }
}

fn is_numeric_literal(text: &str) -> bool {
    let numeric_start = text
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'));
    numeric_start && text.parse::<f64>().is_ok()
}

/// Text for a literal that [`InitialValue::parse`] reads back as a literal.
/// Non-finite values carry an explicit sign, since a bare `inf` or `NaN`
/// is a valid variable name.
fn literal_text(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else if value.is_nan() {
        "+NaN".to_string()
    } else if value.is_sign_positive() {
        "+inf".to_string()
    } else {
        "-inf".to_string()
    }
}

impl fmt::Display for InitialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<f64> for InitialValue {
    fn from(value: f64) -> Self {
        Self::Literal(literal_text(value))
    }
}

impl From<&Variable> for InitialValue {
    fn from(variable: &Variable) -> Self {
        Self::Variable(variable.name())
    }
}

impl From<&str> for InitialValue {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for InitialValue {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}
