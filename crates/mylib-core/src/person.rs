//! `Person`: a data holder with a single mutable name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConversionError;

/// A named person. The name is any valid string, possibly empty.
///
/// `Default` gives the empty name. Every operation is total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    name: String,
}

impl Person {
    /// Create a person with the given initial name. No validation.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Overwrite the stored name. Last write wins.
    pub fn set_name(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
        tracing::trace!(name = %self.name, "person renamed");
    }

    /// The current name.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Consume the person, returning the owned name.
    pub fn into_name(self) -> String {
        self.name
    }

    /// Serialize to the `{ "name": ... }` JSON shape.
    pub fn to_json(&self) -> Result<serde_json::Value, ConversionError> {
        serde_json::to_value(self).map_err(|e| ConversionError::Serialize {
            type_name: "Person",
            message: e.to_string(),
        })
    }

    /// Deserialize from the `{ "name": ... }` JSON shape.
    /// A missing `name` gives the empty name; unknown keys are ignored.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConversionError> {
        serde_json::from_value(value).map_err(|e| ConversionError::Deserialize {
            type_name: "Person",
            message: e.to_string(),
        })
    }
}

impl From<String> for Person {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person({:?})", self.name)
    }
}
