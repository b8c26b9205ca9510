use crate::{Value, ValueKind};
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

/// Binding of one positional placeholder to the logical property it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterMapping {
    /// Logical property name.
    pub property: String,
}

impl ParameterMapping {
    /// New mapping.
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }
}

/// SQL text with positional placeholders plus binding metadata, ready to be
/// executed by the statement execution layer.
#[derive(Clone, Debug, Default)]
pub struct BoundStatement {
    /// Executable SQL with `?` placeholders.
    pub sql: String,
    /// Placeholder metadata in positional order.
    pub parameters: Vec<ParameterMapping>,
    /// Runtime kind of the payload the statement was bound against.
    pub reference: ValueKind,
    /// Pass through additional context from the templating engine.
    pub extra: BTreeMap<String, Value>,
}

impl BoundStatement {
    /// Logical property names in placeholder order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|v| v.property.as_str())
    }
}

impl Display for BoundStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::truncate_long!(self.sql))
    }
}
