//! Instance relation (edge type) records.

use crate::model::{ConceptId, RelationId};
use serde::Serialize;

/// Edge type connecting a source concept to a target concept.
///
/// Endpoints also accept any sub-concept declared through `SubConceptOf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceRelation {
    pub id: RelationId,
    pub name: String,
    pub source: ConceptId,
    pub target: ConceptId,
}

impl InstanceRelation {
    pub fn is_self_relation(&self) -> bool {
        self.source == self.target
    }
}
