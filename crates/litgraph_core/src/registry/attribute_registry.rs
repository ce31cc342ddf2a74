//! Attribute definition registry.
//!
//! # Invariants
//! - Attribute names are unique across the whole schema.
//! - One attribute id may be attached to any number of concepts.

use crate::model::attribute::{Attribute, Requirement};
use crate::model::{AttributeId, PrimitiveTypeId};
use crate::registry::naming::validate_name;
use crate::registry::primitive_registry::PrimitiveTypeRegistry;
use crate::registry::{SchemaError, SchemaResult};
use std::collections::BTreeMap;

/// Append-only table of attribute definitions.
#[derive(Debug, Default, Clone)]
pub struct AttributeRegistry {
    attributes: Vec<Attribute>,
    by_name: BTreeMap<String, AttributeId>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines one attribute and returns its new identity.
    ///
    /// # Errors
    /// - `InvalidName` when `name` is not camelCase.
    /// - `DuplicateAttribute` when `name` is already defined.
    /// - `DanglingPrimitive` when `value_type` is not registered in `primitives`.
    pub fn define(
        &mut self,
        requirement: Requirement,
        name: &str,
        value_type: PrimitiveTypeId,
        primitives: &PrimitiveTypeRegistry,
    ) -> SchemaResult<AttributeId> {
        validate_name("attribute", name)?;
        if self.by_name.contains_key(name) {
            return Err(SchemaError::DuplicateAttribute(name.to_string()));
        }
        if !primitives.contains(value_type) {
            return Err(SchemaError::DanglingPrimitive(value_type.to_string()));
        }

        let id = AttributeId::from_index(self.attributes.len());
        self.attributes.push(Attribute {
            id,
            name: name.to_string(),
            requirement,
            value_type,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn get(&self, id: AttributeId) -> Option<&Attribute> {
        self.attributes.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&Attribute> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    pub fn contains(&self, id: AttributeId) -> bool {
        id.index() < self.attributes.len()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeRegistry;
    use crate::model::attribute::Requirement;
    use crate::model::primitive::PrimitiveKind;
    use crate::model::PrimitiveTypeId;
    use crate::registry::primitive_registry::PrimitiveTypeRegistry;
    use crate::registry::SchemaError;

    fn primitives() -> PrimitiveTypeRegistry {
        PrimitiveTypeRegistry::with_builtin_kinds().expect("builtin kinds")
    }

    #[test]
    fn each_definition_gets_a_new_identity() {
        let primitives = primitives();
        let text = primitives.id_of(PrimitiveKind::Text).expect("text");
        let mut registry = AttributeRegistry::new();

        let title = registry
            .define(Requirement::Required, "articleTitle", text, &primitives)
            .expect("title should define");
        let venue = registry
            .define(Requirement::Optional, "articleVenue", text, &primitives)
            .expect("venue should define");

        assert_ne!(title, venue);
        let resolved = registry.by_name("articleTitle").expect("lookup by name");
        assert_eq!(resolved.id, title);
        assert_eq!(resolved.requirement, Requirement::Required);
        assert_eq!(resolved.value_type, text);
    }

    #[test]
    fn rejects_second_definition_with_same_name() {
        let primitives = primitives();
        let text = primitives.id_of(PrimitiveKind::Text).expect("text");
        let mut registry = AttributeRegistry::new();
        registry
            .define(Requirement::Required, "articleTitle", text, &primitives)
            .expect("first definition");

        let err = registry
            .define(Requirement::Optional, "articleTitle", text, &primitives)
            .expect_err("redefinition must fail");
        assert_eq!(err, SchemaError::DuplicateAttribute("articleTitle".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rejects_unregistered_value_type() {
        let primitives = primitives();
        let mut registry = AttributeRegistry::new();
        let err = registry
            .define(
                Requirement::Optional,
                "evoMetric",
                PrimitiveTypeId::from_index(9),
                &primitives,
            )
            .expect_err("dangling value type must fail");
        assert!(matches!(err, SchemaError::DanglingPrimitive(_)));
    }

    #[test]
    fn rejects_invalid_name() {
        let primitives = primitives();
        let text = primitives.id_of(PrimitiveKind::Text).expect("text");
        let mut registry = AttributeRegistry::new();
        let err = registry
            .define(Requirement::Optional, "Article Title", text, &primitives)
            .expect_err("invalid name must fail");
        assert!(matches!(err, SchemaError::InvalidName { .. }));
    }
}
