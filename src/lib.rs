// Veil - Synonym generators for data anonymization
// Copyright (c) 2026 Veil Contributors
// Licensed under the MIT License

//! # Veil - Field-Level Synonym Generation
//!
//! Veil provides pluggable *synonym generators*: small, stateless components
//! that replace a sensitive field value with a synthetic substitute. A host
//! anonymization pipeline extracts values from records, routes each one to a
//! generator by its `kind` tag, and writes the returned synonym back into the
//! output record.
//!
//! ## Architecture
//!
//! - [`anonymizer`] - The generator trait and concrete generators
//! - [`synonyms`] - The boundary value model and substitution results
//! - [`errors`] - Generator failure taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use veil::anonymizer::{Anonymizer, DomainAnonymizer};
//! use veil::synonyms::FieldValue;
//!
//! # fn main() -> Result<(), veil::errors::GeneratorError> {
//! let mut generator = DomainAnonymizer::new();
//!
//! let synonym = generator.anonymize(FieldValue::Text("intranet.corp".into()), 64)?;
//! assert_eq!(synonym.kind, "DOMAIN");
//! assert!(synonym.replacement.unwrap().ends_with(".example.com"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Generators fail with [`errors::GeneratorError`], which distinguishes a
//! too-small length bound from a value of the wrong type so the host can
//! report a configuration problem differently from a mis-mapped field:
//!
//! ```rust
//! use veil::anonymizer::{Anonymizer, DomainAnonymizer};
//! use veil::errors::GeneratorError;
//! use veil::synonyms::FieldValue;
//!
//! let mut generator = DomainAnonymizer::new();
//! let err = generator
//!     .anonymize(FieldValue::Text("intranet.corp".into()), 5)
//!     .unwrap_err();
//! assert_eq!(err, GeneratorError::UnsupportedConstraint { requested: 5 });
//! ```
//!
//! Absent input is not an error: the generator returns a synonym with an
//! absent replacement, leaving "nothing to anonymize" distinguishable from
//! "cannot anonymize".

pub mod anonymizer;
pub mod errors;
pub mod synonyms;
