//! Concept (node type) records.
//!
//! # Invariants
//! - `attribute_ids` only holds registered attributes, each at most once.
//! - Every conditional attribute has exactly one entry in `pairings`, whose
//!   anchor is the attribute declared immediately before it.

use crate::model::attribute::Requirement;
use crate::model::{AttributeId, ConceptId};
use serde::Serialize;

/// Explicit link between a conditional attribute and the attribute gating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionalPairing {
    /// Attribute whose presence is conditional.
    pub dependent: AttributeId,
    /// Attribute declared immediately before `dependent` in the concept.
    pub anchor: AttributeId,
    /// Either `ConditionalOnChild` or `ConditionalOnSibling`.
    pub policy: Requirement,
}

/// One node type of the knowledge graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concept {
    pub id: ConceptId,
    /// Stable tag used for persistence and display, e.g. `evoAlgo`.
    pub type_name: String,
    pub attribute_ids: Vec<AttributeId>,
    pub pairings: Vec<ConditionalPairing>,
}

impl Concept {
    pub fn has_attribute(&self, attribute_id: AttributeId) -> bool {
        self.attribute_ids.contains(&attribute_id)
    }

    /// Returns the pairing that gates `attribute_id`, if it is conditional here.
    pub fn pairing_for(&self, attribute_id: AttributeId) -> Option<&ConditionalPairing> {
        self.pairings
            .iter()
            .find(|pairing| pairing.dependent == attribute_id)
    }
}
