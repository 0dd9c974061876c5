//! # Carrier Identifiers
//!
//! Motor-carrier (MC) numbers identify a trucking company in the FMCSA
//! registry. The broker treats them as opaque strings; the only rule is
//! that one must be present.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated, whitespace-trimmed MC number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct McNumber(String);

impl McNumber {
    /// Create an MC number, rejecting empty or blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyMcNumber);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the MC number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for McNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<McNumber> for String {
    fn from(value: McNumber) -> Self {
        value.0
    }
}

impl std::fmt::Display for McNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
