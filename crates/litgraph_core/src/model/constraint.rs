//! Cross-concept constraints.

use crate::model::ConceptId;
use serde::Serialize;

/// Declared rule between two concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// `(sub, super)`: instances of `sub` are valid wherever `super` is expected.
    SubConceptOf(ConceptId, ConceptId),
}

impl Constraint {
    /// Returns `(sub, super)` for subtype declarations.
    pub fn as_sub_concept_of(self) -> Option<(ConceptId, ConceptId)> {
        match self {
            Self::SubConceptOf(sub, sup) => Some((sub, sup)),
        }
    }
}
