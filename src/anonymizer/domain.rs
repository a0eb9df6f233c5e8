// Veil - Synonym generators for data anonymization
// Copyright (c) 2026 Veil Contributors
// Licensed under the MIT License

//! Domain synonym generator
//!
//! Replaces textual domain-name fields with a random lowercase-hex label
//! under the RFC 2606 reserved `.example.com` suffix.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::Anonymizer;
use crate::errors::GeneratorError;
use crate::synonyms::{FieldValue, Synonym};

/// Suffix appended to every generated value. Reserved per RFC 2606, so
/// replacements can never collide with a routable domain.
const ANON_DOMAIN: &str = ".example.com";

/// Routing tag for this generator
const KIND: &str = "DOMAIN";

/// Domain generator - replaces text with `<hex>.example.com`
///
/// The hex label comes from the bit pattern of a uniform draw in `[0, 1)`,
/// rendered without leading zeros, so output length varies (at most 16 hex
/// digits, 28 characters total). The output is not cryptographically strong
/// and is not meant to be: it only has to look domain-shaped and be unlikely
/// to repeat.
pub struct DomainAnonymizer<R = StdRng> {
    /// Injected random source (seeded in tests, OS entropy in production)
    rng: R,
}

impl DomainAnonymizer<StdRng> {
    /// Create a generator drawing from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> DomainAnonymizer<R> {
    /// Create a generator backed by the given random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for DomainAnonymizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send + Sync> Anonymizer for DomainAnonymizer<R> {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn anonymize(
        &mut self,
        original: FieldValue,
        max_length: usize,
    ) -> Result<Synonym, GeneratorError> {
        match original {
            FieldValue::Absent => Ok(Synonym::absent(KIND)),
            FieldValue::Text(text) => {
                let unit: f64 = self.rng.gen();
                let mut replacement = format!("{:x}", unit.to_bits());
                replacement.push_str(ANON_DOMAIN);

                // Never truncate: a shortened value could collide or come
                // out malformed. The caller must supply a larger bound.
                if replacement.len() > max_length {
                    return Err(GeneratorError::UnsupportedConstraint {
                        requested: max_length,
                    });
                }

                trace!(length = replacement.len(), "generated domain synonym");
                Ok(Synonym::replaced(KIND, FieldValue::Text(text), replacement))
            }
            FieldValue::Other(kind) => {
                Err(GeneratorError::UnsupportedInputType { actual: kind })
            }
        }
    }
}
