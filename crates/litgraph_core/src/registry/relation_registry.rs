//! Instance relation (edge type) registry.

use crate::model::relation::InstanceRelation;
use crate::model::{ConceptId, RelationId};
use crate::registry::concept_registry::ConceptRegistry;
use crate::registry::naming::validate_name;
use crate::registry::{SchemaError, SchemaResult};
use std::collections::BTreeMap;

/// Append-only table of edge types.
///
/// Self-relations are allowed; instance-level cycles are a data-layer concern.
#[derive(Debug, Default, Clone)]
pub struct InstanceRelRegistry {
    relations: Vec<InstanceRelation>,
    by_name: BTreeMap<String, RelationId>,
}

impl InstanceRelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines one edge type between two registered concepts.
    ///
    /// # Errors
    /// - `InvalidName` / `DuplicateRelation` for a bad or reused `name`.
    /// - `DanglingConcept` when an endpoint is not registered in `concepts`.
    pub fn define(
        &mut self,
        name: &str,
        source: ConceptId,
        target: ConceptId,
        concepts: &ConceptRegistry,
    ) -> SchemaResult<RelationId> {
        validate_name("relation", name)?;
        if self.by_name.contains_key(name) {
            return Err(SchemaError::DuplicateRelation(name.to_string()));
        }
        for endpoint in [source, target] {
            if !concepts.contains(endpoint) {
                return Err(SchemaError::DanglingConcept(endpoint.to_string()));
            }
        }

        let id = RelationId::from_index(self.relations.len());
        self.relations.push(InstanceRelation {
            id,
            name: name.to_string(),
            source,
            target,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn get(&self, id: RelationId) -> Option<&InstanceRelation> {
        self.relations.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&InstanceRelation> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstanceRelation> {
        self.relations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceRelRegistry;
    use crate::model::ConceptId;
    use crate::registry::attribute_registry::AttributeRegistry;
    use crate::registry::concept_registry::ConceptRegistry;
    use crate::registry::SchemaError;

    fn concepts(type_names: &[&str]) -> (ConceptRegistry, Vec<ConceptId>) {
        let attributes = AttributeRegistry::new();
        let mut registry = ConceptRegistry::new();
        let ids = type_names
            .iter()
            .map(|name| {
                registry
                    .define(&[], name, &attributes)
                    .expect("concept should define")
            })
            .collect();
        (registry, ids)
    }

    #[test]
    fn defines_relation_and_round_trips_endpoints() {
        let (concepts, ids) = concepts(&["article", "reference"]);
        let mut relations = InstanceRelRegistry::new();
        let id = relations
            .define("articleRefEntry", ids[0], ids[1], &concepts)
            .expect("relation should define");

        let relation = relations.get(id).expect("relation registered");
        assert_eq!(relation.source, ids[0]);
        assert_eq!(relation.target, ids[1]);
        assert!(!relation.is_self_relation());
        assert_eq!(
            relations.by_name("articleRefEntry").map(|rel| rel.id),
            Some(id)
        );
    }

    #[test]
    fn allows_self_relations() {
        let (concepts, ids) = concepts(&["evoEntity"]);
        let mut relations = InstanceRelRegistry::new();
        for name in ["entityParent", "entityAlias", "entityRelation"] {
            let id = relations
                .define(name, ids[0], ids[0], &concepts)
                .expect("self relation should define");
            assert!(relations.get(id).expect("registered").is_self_relation());
        }
    }

    #[test]
    fn rejects_dangling_endpoint_and_duplicate_name() {
        let (concepts, ids) = concepts(&["article"]);
        let mut relations = InstanceRelRegistry::new();

        let dangling = relations
            .define("articleRefEntry", ids[0], ConceptId::from_index(5), &concepts)
            .expect_err("dangling target must fail");
        assert!(matches!(dangling, SchemaError::DanglingConcept(_)));

        relations
            .define("refArticle", ids[0], ids[0], &concepts)
            .expect("first definition");
        let duplicate = relations
            .define("refArticle", ids[0], ids[0], &concepts)
            .expect_err("duplicate name must fail");
        assert_eq!(duplicate, SchemaError::DuplicateRelation("refArticle".to_string()));
    }
}
