// Veil - Synonym generators for data anonymization
// Copyright (c) 2026 Veil Contributors
// Licensed under the MIT License

//! Synonym data models
//!
//! The boundary value model handed to generators and the substitution
//! result handed back to the host.

pub mod synonym;
pub mod value;

pub use synonym::Synonym;
pub use value::{FieldValue, ValueKind};
