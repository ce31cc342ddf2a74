//! Frozen schema context shared with external collaborators.
//!
//! # Responsibility
//! - Resolve schema identities into read-only views.
//! - Answer subtype and relation-endpoint questions.
//!
//! # Invariants
//! - Immutable after construction; safe to share across threads.
//! - Unknown ids resolve to `None` (or `UNKNOWN_LABEL`), never a panic.

use crate::domain::{builtin_modules, load_schema};
use crate::model::attribute::Attribute;
use crate::model::concept::{Concept, ConditionalPairing};
use crate::model::constraint::Constraint;
use crate::model::primitive::PrimitiveType;
use crate::model::relation::InstanceRelation;
use crate::model::{AttributeId, ConceptId, PrimitiveTypeId, RelationId};
use crate::registry::attribute_registry::AttributeRegistry;
use crate::registry::concept_registry::ConceptRegistry;
use crate::registry::constraint_registry::ConstraintRegistry;
use crate::registry::primitive_registry::PrimitiveTypeRegistry;
use crate::registry::relation_registry::InstanceRelRegistry;
use crate::registry::view::{AttributeView, ConceptView, RelationView, SchemaSummary};
use crate::registry::SchemaResult;
use once_cell::sync::OnceCell;

/// Label rendered for ids that do not resolve.
pub const UNKNOWN_LABEL: &str = "Unknown";

static SHARED_SCHEMA: OnceCell<SchemaRegistry> = OnceCell::new();

/// Read-only schema built once at startup.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    primitives: PrimitiveTypeRegistry,
    attributes: AttributeRegistry,
    concepts: ConceptRegistry,
    relations: InstanceRelRegistry,
    constraints: ConstraintRegistry,
}

impl SchemaRegistry {
    pub(crate) fn from_parts(
        primitives: PrimitiveTypeRegistry,
        attributes: AttributeRegistry,
        concepts: ConceptRegistry,
        relations: InstanceRelRegistry,
        constraints: ConstraintRegistry,
    ) -> Self {
        Self {
            primitives,
            attributes,
            concepts,
            relations,
            constraints,
        }
    }

    /// Loads the literature, signature, subject and evolution modules.
    pub fn load_builtin() -> SchemaResult<Self> {
        load_schema(&builtin_modules())
    }

    /// Returns the process-wide builtin schema, loading it on first use.
    ///
    /// A failed load is not cached; the next call retries and fails the same way.
    pub fn shared() -> SchemaResult<&'static SchemaRegistry> {
        SHARED_SCHEMA.get_or_try_init(Self::load_builtin)
    }

    pub fn resolve_concept(&self, id: ConceptId) -> Option<ConceptView> {
        let concept = self.concepts.get(id)?;
        Some(ConceptView {
            id: concept.id,
            type_name: concept.type_name.clone(),
            attributes: concept
                .attribute_ids
                .iter()
                .filter_map(|attribute_id| self.resolve_attribute(*attribute_id))
                .collect(),
            pairings: concept.pairings.clone(),
        })
    }

    pub fn resolve_attribute(&self, id: AttributeId) -> Option<AttributeView> {
        let attribute = self.attributes.get(id)?;
        let primitive = self.primitives.resolve(attribute.value_type)?;
        Some(AttributeView {
            id: attribute.id,
            name: attribute.name.clone(),
            requirement: attribute.requirement,
            value_type: attribute.value_type,
            value_kind: primitive.kind,
        })
    }

    pub fn resolve_relation(&self, id: RelationId) -> Option<RelationView> {
        let relation = self.relations.get(id)?;
        Some(RelationView {
            id: relation.id,
            name: relation.name.clone(),
            source: relation.source,
            target: relation.target,
        })
    }

    pub fn resolve_primitive(&self, id: PrimitiveTypeId) -> Option<&PrimitiveType> {
        self.primitives.resolve(id)
    }

    /// Reflexive-transitive subtype check; `false` when either id is unknown.
    pub fn is_sub_concept_of(&self, a: ConceptId, b: ConceptId) -> bool {
        self.concepts.contains(a)
            && self.concepts.contains(b)
            && self.constraints.is_sub_concept_of(a, b)
    }

    /// Looks a concept up by its stable `type_name`.
    pub fn concept_by_type_name(&self, type_name: &str) -> Option<&Concept> {
        self.concepts.by_type_name(type_name)
    }

    pub fn attribute_by_name(&self, name: &str) -> Option<&Attribute> {
        self.attributes.by_name(name)
    }

    pub fn relation_by_name(&self, name: &str) -> Option<&InstanceRelation> {
        self.relations.by_name(name)
    }

    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.get(id)
    }

    pub fn attribute(&self, id: AttributeId) -> Option<&Attribute> {
        self.attributes.get(id)
    }

    pub fn relation(&self, id: RelationId) -> Option<&InstanceRelation> {
        self.relations.get(id)
    }

    pub fn attributes_of(&self, id: ConceptId) -> Option<Vec<&Attribute>> {
        self.concepts.attributes_of(id, &self.attributes)
    }

    pub fn pairings_of(&self, id: ConceptId) -> Option<&[ConditionalPairing]> {
        self.concepts
            .get(id)
            .map(|concept| concept.pairings.as_slice())
    }

    /// Display label for a concept id, `UNKNOWN_LABEL` for stale ids.
    pub fn concept_label(&self, id: ConceptId) -> &str {
        self.concepts
            .get(id)
            .map_or(UNKNOWN_LABEL, |concept| concept.type_name.as_str())
    }

    /// Returns whether an edge of `relation` may connect the two concepts.
    pub fn relation_accepts(
        &self,
        relation: RelationId,
        source: ConceptId,
        target: ConceptId,
    ) -> bool {
        self.relations.get(relation).is_some_and(|rel| {
            self.is_sub_concept_of(source, rel.source) && self.is_sub_concept_of(target, rel.target)
        })
    }

    /// Edge types whose source accepts `concept`, including inherited ones.
    pub fn relations_from(&self, concept: ConceptId) -> Vec<&InstanceRelation> {
        self.relations
            .iter()
            .filter(|rel| self.is_sub_concept_of(concept, rel.source))
            .collect()
    }

    /// Edge types whose target accepts `concept`, including inherited ones.
    pub fn relations_to(&self, concept: ConceptId) -> Vec<&InstanceRelation> {
        self.relations
            .iter()
            .filter(|rel| self.is_sub_concept_of(concept, rel.target))
            .collect()
    }

    pub fn super_concepts_of(&self, id: ConceptId) -> Vec<ConceptId> {
        self.constraints.super_concepts_of(id)
    }

    pub fn sub_concepts_of(&self, id: ConceptId) -> Vec<ConceptId> {
        self.constraints.sub_concepts_of(id)
    }

    pub fn concepts(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn relations(&self) -> impl Iterator<Item = &InstanceRelation> {
        self.relations.iter()
    }

    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            primitives: self.primitives.len(),
            attributes: self.attributes.len(),
            concepts: self.concepts.len(),
            relations: self.relations.len(),
            constraints: self.constraints.len(),
        }
    }
}
