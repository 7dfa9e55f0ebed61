//! Single-entity textual forms of a variable

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::CellmlError;
use crate::units::Units;
use crate::variable::{InitialValue, InterfaceType, Variable};

/// Textual form to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `<variable name=".." units=".." initial_value=".." interface=".."/>`
    Xml,
    /// [`VariableDescription`] as JSON
    Json,
}

/// Snapshot of a variable's own attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableDescription {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,

    #[serde(default, skip_serializing_if = "InterfaceType::is_none")]
    pub interface: InterfaceType,
}

impl Variable {
    /// Capture the attributes of this variable
    pub fn describe(&self) -> VariableDescription {
        VariableDescription {
            name: self.name(),
            units: self.units().map(|u| u.name().to_string()),
            initial_value: self.initial_value().map(|v| v.to_string()),
            interface: self.interface_type(),
        }
    }

    /// Build a fresh variable, without equivalences, from a description
    pub fn from_description(description: &VariableDescription) -> Self {
        let variable = Variable::new(description.name.clone());
        if let Some(units) = &description.units {
            variable.set_units(Some(Rc::new(Units::new(units.clone()))));
        }
        if let Some(text) = &description.initial_value {
            variable.set_initial_value(InitialValue::parse(text));
        }
        variable.set_interface_type(description.interface);
        variable
    }

    /// Parse a variable from its JSON description
    pub fn from_json(json: &str) -> Result<Self, CellmlError> {
        let description: VariableDescription = serde_json::from_str(json)?;
        Ok(Self::from_description(&description))
    }

    /// Produce the textual form of this variable's attributes
    pub fn serialise(&self, format: Format) -> Result<String, CellmlError> {
        match format {
            Format::Xml => Ok(self.to_xml()),
            Format::Json => Ok(serde_json::to_string(&self.describe())?),
        }
    }

    fn to_xml(&self) -> String {
        let description = self.describe();
        let mut repr = String::from("<variable");
        if !description.name.is_empty() {
            push_attribute(&mut repr, "name", &description.name);
        }
        if let Some(units) = &description.units {
            push_attribute(&mut repr, "units", units);
        }
        if let Some(initial_value) = description.initial_value.as_deref() {
            if !initial_value.is_empty() {
                push_attribute(&mut repr, "initial_value", initial_value);
            }
        }
        if !description.interface.is_none() {
            push_attribute(&mut repr, "interface", description.interface.as_str());
        }
        repr.push_str("/>");
        repr
    }
}

fn push_attribute(repr: &mut String, key: &str, value: &str) {
    repr.push(' ');
    repr.push_str(key);
    repr.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => repr.push_str("&amp;"),
            '<' => repr.push_str("&lt;"),
            '>' => repr.push_str("&gt;"),
            '"' => repr.push_str("&quot;"),
            c => repr.push(c),
        }
    }
    repr.push('"');
}
