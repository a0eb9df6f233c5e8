// Veil - Synonym generators for data anonymization
// Copyright (c) 2026 Veil Contributors
// Licensed under the MIT License

//! Synonym generator module
//!
//! Provides the generator trait the host dispatches through, and the
//! concrete generators shipped with the crate.

pub mod domain;

pub use domain::DomainAnonymizer;

use crate::errors::GeneratorError;
use crate::synonyms::{FieldValue, Synonym};

/// Trait for synonym generator implementations
///
/// The host routes each field occurrence to a generator by its [`kind`] tag
/// and calls [`anonymize`] once per occurrence. Calls are independent:
/// generators keep no per-value state and never see the same field twice
/// knowingly.
///
/// [`kind`]: Anonymizer::kind
/// [`anonymize`]: Anonymizer::anonymize
pub trait Anonymizer: Send + Sync {
    /// Stable tag identifying this generator to the host's dispatch
    fn kind(&self) -> &'static str;

    /// Produce a substitute for one field value
    ///
    /// `max_length` is the upper bound on the replacement's length, derived
    /// by the host from the target column it is writing to.
    fn anonymize(
        &mut self,
        original: FieldValue,
        max_length: usize,
    ) -> Result<Synonym, GeneratorError>;
}
