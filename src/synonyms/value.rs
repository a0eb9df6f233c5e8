// Veil - Synonym generators for data anonymization
// Copyright (c) 2026 Veil Contributors
// Licensed under the MIT License

//! Boundary value model
//!
//! Hosts hand generators values of unknown provenance. [`FieldValue`]
//! resolves the type question once, at the call boundary, so generator
//! logic matches on a closed set of cases instead of inspecting types
//! ad hoc.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A field value as received from the host, classified at the boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// No value present (NULL column, missing key)
    Absent,
    /// A textual value, the only kind most generators can substitute
    Text(String),
    /// A present but non-textual value; only its kind is retained
    Other(ValueKind),
}

impl FieldValue {
    /// Check whether a value is present at all
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Borrow the textual content, if this is a textual value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(text) => Self::Text(text),
            Value::Bool(_) => Self::Other(ValueKind::Boolean),
            Value::Number(n) if n.is_f64() => Self::Other(ValueKind::Float),
            Value::Number(_) => Self::Other(ValueKind::Integer),
            Value::Array(_) => Self::Other(ValueKind::Array),
            Value::Object(_) => Self::Other(ValueKind::Object),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Type tag for present, non-textual values
///
/// Carried in diagnostics so the operator can see what kind of field was
/// mis-mapped to a text-only generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueKind {
    /// Boolean values
    Boolean,
    /// Whole-number values
    Integer,
    /// Floating-point values
    Float,
    /// Sequence values
    Array,
    /// Structured/nested values
    Object,
}

impl ValueKind {
    /// Get a stable label for the kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Array => "ARRAY",
            Self::Object => "OBJECT",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
