// Veil - Synonym generators for data anonymization
// Copyright (c) 2026 Veil Contributors
// Licensed under the MIT License

//! Substitution results

use serde::{Deserialize, Serialize};

use super::FieldValue;

/// One anonymization outcome
///
/// Created fresh on every generator invocation, fully populated before being
/// returned, and owned thereafter by the caller. An absent `original` always
/// pairs with an absent `replacement`; `kind` is populated either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synonym {
    /// Tag of the generator that produced this synonym
    pub kind: String,
    /// The input value as received
    pub original: FieldValue,
    /// The substitute value, absent when the input was absent
    pub replacement: Option<String>,
}

impl Synonym {
    /// Create the synonym for an absent input: no replacement, kind still set
    pub fn absent(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            original: FieldValue::Absent,
            replacement: None,
        }
    }

    /// Create a populated synonym for a present input
    pub fn replaced(
        kind: impl Into<String>,
        original: FieldValue,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            original,
            replacement: Some(replacement.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_synonym() {
        let synonym = Synonym::absent("DOMAIN");
        assert_eq!(synonym.kind, "DOMAIN");
        assert_eq!(synonym.original, FieldValue::Absent);
        assert_eq!(synonym.replacement, None);
    }

    #[test]
    fn test_replaced_synonym() {
        let synonym = Synonym::replaced(
            "DOMAIN",
            FieldValue::Text("foo.com".to_string()),
            "abc123.example.com",
        );
        assert_eq!(synonym.kind, "DOMAIN");
        assert_eq!(synonym.original.as_text(), Some("foo.com"));
        assert_eq!(
            synonym.replacement.as_deref(),
            Some("abc123.example.com")
        );
    }

    #[test]
    fn test_synonym_serializes() {
        let synonym = Synonym::replaced(
            "DOMAIN",
            FieldValue::Text("foo.com".to_string()),
            "abc123.example.com",
        );
        let json = serde_json::to_value(&synonym).unwrap();
        assert_eq!(json["kind"], "DOMAIN");
        assert_eq!(json["replacement"], "abc123.example.com");
    }
}
