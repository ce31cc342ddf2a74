//! Read-only resolver payloads handed to persistence, UI and search layers.

use crate::model::attribute::Requirement;
use crate::model::concept::ConditionalPairing;
use crate::model::primitive::PrimitiveKind;
use crate::model::{AttributeId, ConceptId, PrimitiveTypeId, RelationId};
use serde::Serialize;

/// Resolved attribute definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeView {
    pub id: AttributeId,
    pub name: String,
    pub requirement: Requirement,
    pub value_type: PrimitiveTypeId,
    /// Kind behind `value_type`, so callers need no second lookup.
    pub value_kind: PrimitiveKind,
}

/// Resolved concept with its attributes in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptView {
    pub id: ConceptId,
    pub type_name: String,
    pub attributes: Vec<AttributeView>,
    pub pairings: Vec<ConditionalPairing>,
}

/// Resolved relation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationView {
    pub id: RelationId,
    pub name: String,
    pub source: ConceptId,
    pub target: ConceptId,
}

/// Table sizes of a loaded schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaSummary {
    pub primitives: usize,
    pub attributes: usize,
    pub concepts: usize,
    pub relations: usize,
    pub constraints: usize,
}
