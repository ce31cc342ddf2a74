//! Instance validation against a loaded schema.
//!
//! # Responsibility
//! - Check node payloads for requiredness, conditional pairings and value kinds.
//! - Check edge payloads against relation endpoints, honoring `SubConceptOf`.
//!
//! # Invariants
//! - Validation never mutates the schema or the instance.
//! - Rejection logs carry schema names only, never attribute values.

use serde::Deserialize;

pub mod instance_validator;

/// Tunables for `InstanceValidator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Reject attributes the concept does not declare. When `false` they are ignored.
    pub reject_unknown_attributes: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            reject_unknown_attributes: true,
        }
    }
}
