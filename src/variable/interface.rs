use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::variable::errors::VariableError;

/// How a variable may be connected across component boundaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceType {
    #[default]
    None,
    Private,
    Public,
    PublicAndPrivate,
}

impl InterfaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Private => "private",
            Self::Public => "public",
            Self::PublicAndPrivate => "public_and_private",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterfaceType {
    type Err = VariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "private" => Ok(Self::Private),
            "public" => Ok(Self::Public),
            "public_and_private" => Ok(Self::PublicAndPrivate),
            other => Err(VariableError::UnknownInterfaceType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_forms() {
        assert_eq!(InterfaceType::None.to_string(), "none");
        assert_eq!(InterfaceType::Private.to_string(), "private");
        assert_eq!(InterfaceType::Public.to_string(), "public");
        assert_eq!(
            InterfaceType::PublicAndPrivate.to_string(),
            "public_and_private"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "public_and_private".parse::<InterfaceType>().unwrap(),
            InterfaceType::PublicAndPrivate
        );
        assert_eq!(
            "both".parse::<InterfaceType>().unwrap_err(),
            VariableError::UnknownInterfaceType("both".to_string())
        );
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&InterfaceType::PublicAndPrivate).unwrap();
        assert_eq!(json, "\"public_and_private\"");
        let back: InterfaceType = serde_json::from_str("\"private\"").unwrap();
        assert_eq!(back, InterfaceType::Private);
    }
}
