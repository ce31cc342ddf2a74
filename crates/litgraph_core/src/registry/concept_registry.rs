//! Concept (node type) registry.
//!
//! # Invariants
//! - `type_name` is unique across the schema.
//! - Conditional attributes are paired with the attribute declared right
//!   before them; the pairing table is fixed at definition time.

use crate::model::attribute::Attribute;
use crate::model::concept::{Concept, ConditionalPairing};
use crate::model::{AttributeId, ConceptId};
use crate::registry::attribute_registry::AttributeRegistry;
use crate::registry::naming::validate_name;
use crate::registry::{SchemaError, SchemaResult};
use std::collections::{BTreeMap, BTreeSet};

/// Append-only table of concepts.
#[derive(Debug, Default, Clone)]
pub struct ConceptRegistry {
    concepts: Vec<Concept>,
    by_type_name: BTreeMap<String, ConceptId>,
}

impl ConceptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines one concept from an ordered attribute list.
    ///
    /// # Errors
    /// - `InvalidName` / `DuplicateConcept` for a bad or reused `type_name`.
    /// - `DanglingAttribute` when an id is not registered in `attributes`.
    /// - `DuplicateConceptAttribute` when an id is listed twice.
    /// - `UnanchoredConditional` when the first attribute is conditional.
    pub fn define(
        &mut self,
        attribute_ids: &[AttributeId],
        type_name: &str,
        attributes: &AttributeRegistry,
    ) -> SchemaResult<ConceptId> {
        validate_name("concept", type_name)?;
        if self.by_type_name.contains_key(type_name) {
            return Err(SchemaError::DuplicateConcept(type_name.to_string()));
        }

        let mut seen = BTreeSet::new();
        let mut pairings = Vec::new();
        let mut previous: Option<&Attribute> = None;
        for attribute_id in attribute_ids {
            let attribute = attributes
                .get(*attribute_id)
                .ok_or_else(|| SchemaError::DanglingAttribute(attribute_id.to_string()))?;
            if !seen.insert(*attribute_id) {
                return Err(SchemaError::DuplicateConceptAttribute {
                    concept: type_name.to_string(),
                    attribute: attribute.name.clone(),
                });
            }
            if attribute.requirement.is_conditional() {
                let anchor = previous.ok_or_else(|| SchemaError::UnanchoredConditional {
                    concept: type_name.to_string(),
                    attribute: attribute.name.clone(),
                })?;
                pairings.push(ConditionalPairing {
                    dependent: attribute.id,
                    anchor: anchor.id,
                    policy: attribute.requirement,
                });
            }
            previous = Some(attribute);
        }

        let id = ConceptId::from_index(self.concepts.len());
        self.concepts.push(Concept {
            id,
            type_name: type_name.to_string(),
            attribute_ids: attribute_ids.to_vec(),
            pairings,
        });
        self.by_type_name.insert(type_name.to_string(), id);
        Ok(id)
    }

    pub fn get(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.get(id.index())
    }

    pub fn by_type_name(&self, type_name: &str) -> Option<&Concept> {
        self.by_type_name
            .get(type_name)
            .and_then(|id| self.get(*id))
    }

    /// Returns the concept's attributes in declaration order.
    pub fn attributes_of<'a>(
        &self,
        id: ConceptId,
        attributes: &'a AttributeRegistry,
    ) -> Option<Vec<&'a Attribute>> {
        let concept = self.get(id)?;
        Some(
            concept
                .attribute_ids
                .iter()
                .filter_map(|attribute_id| attributes.get(*attribute_id))
                .collect(),
        )
    }

    pub fn contains(&self, id: ConceptId) -> bool {
        id.index() < self.concepts.len()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ConceptRegistry;
    use crate::model::attribute::Requirement;
    use crate::model::primitive::PrimitiveKind;
    use crate::model::AttributeId;
    use crate::registry::attribute_registry::AttributeRegistry;
    use crate::registry::primitive_registry::PrimitiveTypeRegistry;
    use crate::registry::SchemaError;

    fn setup(defs: &[(Requirement, &str, PrimitiveKind)]) -> (AttributeRegistry, Vec<AttributeId>) {
        let primitives = PrimitiveTypeRegistry::with_builtin_kinds().expect("builtin kinds");
        let mut attributes = AttributeRegistry::new();
        let ids = defs
            .iter()
            .map(|(requirement, name, kind)| {
                let value_type = primitives.id_of(*kind).expect("kind registered");
                attributes
                    .define(*requirement, name, value_type, &primitives)
                    .expect("attribute should define")
            })
            .collect();
        (attributes, ids)
    }

    #[test]
    fn keeps_attribute_order_and_pairs_conditionals_with_predecessor() {
        let (attributes, ids) = setup(&[
            (Requirement::Required, "evoName", PrimitiveKind::Text),
            (Requirement::Optional, "evoMetric", PrimitiveKind::Text),
            (Requirement::ConditionalOnChild, "evoMetricResultString", PrimitiveKind::Text),
            (Requirement::ConditionalOnSibling, "evoMetricResultNumber", PrimitiveKind::Number),
        ]);
        let mut concepts = ConceptRegistry::new();
        let id = concepts
            .define(&ids, "evoImprovement", &attributes)
            .expect("concept should define");

        let listed: Vec<&str> = concepts
            .attributes_of(id, &attributes)
            .expect("concept registered")
            .iter()
            .map(|attribute| attribute.name.as_str())
            .collect();
        assert_eq!(
            listed,
            ["evoName", "evoMetric", "evoMetricResultString", "evoMetricResultNumber"]
        );

        let concept = concepts.get(id).expect("concept registered");
        assert_eq!(concept.pairings.len(), 2);
        let child = concept.pairing_for(ids[2]).expect("child pairing");
        assert_eq!(child.anchor, ids[1]);
        assert_eq!(child.policy, Requirement::ConditionalOnChild);
        let sibling = concept.pairing_for(ids[3]).expect("sibling pairing");
        assert_eq!(sibling.anchor, ids[2]);
        assert_eq!(sibling.policy, Requirement::ConditionalOnSibling);
    }

    #[test]
    fn accepts_empty_attribute_list() {
        let (attributes, _) = setup(&[]);
        let mut concepts = ConceptRegistry::new();
        let id = concepts
            .define(&[], "evoEntity", &attributes)
            .expect("abstract root should define");
        assert_eq!(
            concepts.attributes_of(id, &attributes).map(|list| list.len()),
            Some(0)
        );
    }

    #[test]
    fn rejects_dangling_and_repeated_attributes() {
        let (attributes, ids) = setup(&[(Requirement::Required, "sigName", PrimitiveKind::Text)]);
        let mut concepts = ConceptRegistry::new();

        let dangling = concepts
            .define(&[AttributeId::from_index(7)], "author", &attributes)
            .expect_err("dangling attribute must fail");
        assert!(matches!(dangling, SchemaError::DanglingAttribute(_)));

        let repeated = concepts
            .define(&[ids[0], ids[0]], "author", &attributes)
            .expect_err("repeated attribute must fail");
        assert!(matches!(
            repeated,
            SchemaError::DuplicateConceptAttribute { .. }
        ));
        assert!(concepts.is_empty());
    }

    #[test]
    fn rejects_duplicate_type_name() {
        let (attributes, ids) = setup(&[(Requirement::Required, "sigName", PrimitiveKind::Text)]);
        let mut concepts = ConceptRegistry::new();
        concepts
            .define(&ids, "author", &attributes)
            .expect("first definition");
        let err = concepts
            .define(&ids, "author", &attributes)
            .expect_err("duplicate type name must fail");
        assert_eq!(err, SchemaError::DuplicateConcept("author".to_string()));
    }

    #[test]
    fn rejects_conditional_attribute_without_anchor() {
        let (attributes, ids) = setup(&[(
            Requirement::ConditionalOnChild,
            "evoMetricResultString",
            PrimitiveKind::Text,
        )]);
        let mut concepts = ConceptRegistry::new();
        let err = concepts
            .define(&ids, "evoImprovement", &attributes)
            .expect_err("unanchored conditional must fail");
        assert!(matches!(err, SchemaError::UnanchoredConditional { .. }));
    }
}
