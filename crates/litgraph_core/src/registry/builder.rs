//! Name-addressed schema construction used by domain modules.
//!
//! # Responsibility
//! - Let domain modules declare schema elements by stable names.
//! - Resolve cross-module names against everything declared so far.
//! - Freeze the result into an immutable `SchemaRegistry`.

use crate::model::attribute::Requirement;
use crate::model::constraint::Constraint;
use crate::model::primitive::PrimitiveKind;
use crate::model::{AttributeId, ConceptId, RelationId};
use crate::registry::attribute_registry::AttributeRegistry;
use crate::registry::concept_registry::ConceptRegistry;
use crate::registry::constraint_registry::ConstraintRegistry;
use crate::registry::primitive_registry::PrimitiveTypeRegistry;
use crate::registry::relation_registry::InstanceRelRegistry;
use crate::registry::schema::SchemaRegistry;
use crate::registry::{SchemaError, SchemaResult};

/// Mutable registry set, alive only while modules load.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    primitives: PrimitiveTypeRegistry,
    attributes: AttributeRegistry,
    concepts: ConceptRegistry,
    relations: InstanceRelRegistry,
    constraints: ConstraintRegistry,
}

impl SchemaBuilder {
    /// Creates a builder with the builtin primitive kinds registered.
    pub fn new() -> SchemaResult<Self> {
        Ok(Self::with_primitives(
            PrimitiveTypeRegistry::with_builtin_kinds()?,
        ))
    }

    pub fn with_primitives(primitives: PrimitiveTypeRegistry) -> Self {
        Self {
            primitives,
            attributes: AttributeRegistry::new(),
            concepts: ConceptRegistry::new(),
            relations: InstanceRelRegistry::new(),
            constraints: ConstraintRegistry::new(),
        }
    }

    pub fn define_attribute(
        &mut self,
        requirement: Requirement,
        name: &str,
        kind: PrimitiveKind,
    ) -> SchemaResult<AttributeId> {
        let value_type = self
            .primitives
            .id_of(kind)
            .ok_or(SchemaError::UnknownPrimitive(kind.as_str()))?;
        self.attributes
            .define(requirement, name, value_type, &self.primitives)
    }

    /// Defines a concept from attribute names; order sets conditional pairings.
    pub fn define_concept(
        &mut self,
        type_name: &str,
        attribute_names: &[&str],
    ) -> SchemaResult<ConceptId> {
        let attribute_ids = attribute_names
            .iter()
            .map(|name| self.attribute_id(name))
            .collect::<SchemaResult<Vec<_>>>()?;
        self.concepts
            .define(&attribute_ids, type_name, &self.attributes)
    }

    pub fn define_relation(
        &mut self,
        name: &str,
        source_type: &str,
        target_type: &str,
    ) -> SchemaResult<RelationId> {
        let source = self.concept_id(source_type)?;
        let target = self.concept_id(target_type)?;
        self.relations.define(name, source, target, &self.concepts)
    }

    pub fn declare_sub_concept_of(
        &mut self,
        sub_type: &str,
        super_type: &str,
    ) -> SchemaResult<Constraint> {
        let sub = self.concept_id(sub_type)?;
        let sup = self.concept_id(super_type)?;
        self.constraints
            .declare_sub_concept_of(sub, sup, &self.concepts)
    }

    pub fn attribute_id(&self, name: &str) -> SchemaResult<AttributeId> {
        self.attributes
            .by_name(name)
            .map(|attribute| attribute.id)
            .ok_or_else(|| SchemaError::DanglingAttribute(name.to_string()))
    }

    pub fn concept_id(&self, type_name: &str) -> SchemaResult<ConceptId> {
        self.concepts
            .by_type_name(type_name)
            .map(|concept| concept.id)
            .ok_or_else(|| SchemaError::DanglingConcept(type_name.to_string()))
    }

    /// Ends the registration phase.
    pub fn freeze(self) -> SchemaRegistry {
        SchemaRegistry::from_parts(
            self.primitives,
            self.attributes,
            self.concepts,
            self.relations,
            self.constraints,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SchemaBuilder;
    use crate::model::attribute::Requirement;
    use crate::model::primitive::PrimitiveKind;
    use crate::registry::SchemaError;

    #[test]
    fn resolves_names_declared_earlier() {
        let mut builder = SchemaBuilder::new().expect("builder");
        builder
            .define_attribute(Requirement::Required, "sigName", PrimitiveKind::Text)
            .expect("attribute");
        let author = builder
            .define_concept("author", &["sigName"])
            .expect("concept");
        assert_eq!(builder.concept_id("author"), Ok(author));
    }

    #[test]
    fn reports_dangling_names() {
        let mut builder = SchemaBuilder::new().expect("builder");
        let attribute = builder
            .define_concept("author", &["sigName"])
            .expect_err("unknown attribute must fail");
        assert_eq!(attribute, SchemaError::DanglingAttribute("sigName".to_string()));

        let relation = builder
            .define_relation("refAuthor", "reference", "author")
            .expect_err("unknown concept must fail");
        assert_eq!(relation, SchemaError::DanglingConcept("reference".to_string()));
    }

    #[test]
    fn reports_unregistered_primitive_kind() {
        let mut builder = SchemaBuilder::with_primitives(Default::default());
        let err = builder
            .define_attribute(Requirement::Optional, "refYear", PrimitiveKind::Number)
            .expect_err("kind must be registered first");
        assert_eq!(err, SchemaError::UnknownPrimitive("number"));
    }
}
