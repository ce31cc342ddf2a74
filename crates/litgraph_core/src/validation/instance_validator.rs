//! Node and edge validation.

use crate::model::attribute::Requirement;
use crate::model::concept::Concept;
use crate::model::instance::{
    AttributeValue, EdgeEnd, EdgeInstance, InstanceId, InstanceValidationError, NodeInstance,
};
use crate::model::relation::InstanceRelation;
use crate::registry::schema::SchemaRegistry;
use crate::validation::ValidationOptions;
use log::debug;

type ValidationResult = Result<(), InstanceValidationError>;

/// Validates instances against one frozen schema.
#[derive(Debug, Clone, Copy)]
pub struct InstanceValidator<'s> {
    schema: &'s SchemaRegistry,
    options: ValidationOptions,
}

impl<'s> InstanceValidator<'s> {
    pub fn new(schema: &'s SchemaRegistry) -> Self {
        Self::with_options(schema, ValidationOptions::default())
    }

    pub fn with_options(schema: &'s SchemaRegistry, options: ValidationOptions) -> Self {
        Self { schema, options }
    }

    /// Validates one node.
    ///
    /// # Errors
    /// Returns the first violation found, checking in this order: identity,
    /// concept, per-value definition and kind, required attributes, then
    /// conditional pairings in declaration order.
    pub fn validate_node(&self, node: &NodeInstance) -> ValidationResult {
        let result = self.check_node(node);
        if let Err(err) = &result {
            debug!(
                "event=instance_validate module=instance status=rejected kind=node type={} error={}",
                node.concept, err
            );
        }
        result
    }

    /// Validates one edge against the nodes it connects.
    ///
    /// Endpoint nodes are validated separately; only their identity and
    /// concept are consulted here.
    pub fn validate_edge(
        &self,
        edge: &EdgeInstance,
        source: &NodeInstance,
        target: &NodeInstance,
    ) -> ValidationResult {
        let result = self.check_edge(edge, source, target);
        if let Err(err) = &result {
            debug!(
                "event=instance_validate module=instance status=rejected kind=edge relation={} error={}",
                edge.relation, err
            );
        }
        result
    }

    fn check_node(&self, node: &NodeInstance) -> ValidationResult {
        if node.uuid.is_nil() {
            return Err(InstanceValidationError::NilUuid);
        }
        let concept = self.concept(&node.concept)?;

        for (name, value) in &node.values {
            self.check_value(concept, name, value)?;
        }

        for attribute_id in &concept.attribute_ids {
            let Some(attribute) = self.schema.attribute(*attribute_id) else {
                continue;
            };
            if attribute.requirement == Requirement::Required && !node.has(&attribute.name) {
                return Err(InstanceValidationError::MissingRequired {
                    concept: concept.type_name.clone(),
                    attribute: attribute.name.clone(),
                });
            }
        }

        for pairing in &concept.pairings {
            let (Some(dependent), Some(anchor)) = (
                self.schema.attribute(pairing.dependent),
                self.schema.attribute(pairing.anchor),
            ) else {
                continue;
            };
            let dependent_set = node.has(&dependent.name);
            let anchor_set = node.has(&anchor.name);
            match pairing.policy {
                Requirement::ConditionalOnChild if dependent_set && !anchor_set => {
                    return Err(InstanceValidationError::MissingAnchor {
                        concept: concept.type_name.clone(),
                        attribute: dependent.name.clone(),
                        anchor: anchor.name.clone(),
                    });
                }
                Requirement::ConditionalOnSibling if dependent_set != anchor_set => {
                    return Err(InstanceValidationError::UnpairedSibling {
                        concept: concept.type_name.clone(),
                        attribute: dependent.name.clone(),
                        sibling: anchor.name.clone(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn check_value(&self, concept: &Concept, name: &str, value: &AttributeValue) -> ValidationResult {
        let attribute = match self.schema.attribute_by_name(name) {
            Some(attribute) if concept.has_attribute(attribute.id) => attribute,
            _ if self.options.reject_unknown_attributes => {
                return Err(InstanceValidationError::UnknownAttribute {
                    concept: concept.type_name.clone(),
                    attribute: name.to_string(),
                });
            }
            _ => return Ok(()),
        };

        if let Some(primitive) = self.schema.resolve_primitive(attribute.value_type) {
            if primitive.kind != value.kind() {
                return Err(InstanceValidationError::ValueKindMismatch {
                    attribute: attribute.name.clone(),
                    expected: primitive.kind,
                    actual: value.kind(),
                });
            }
        }
        if let AttributeValue::Number(number) = value {
            if !number.is_finite() {
                return Err(InstanceValidationError::NonFiniteNumber {
                    attribute: attribute.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn check_edge(
        &self,
        edge: &EdgeInstance,
        source: &NodeInstance,
        target: &NodeInstance,
    ) -> ValidationResult {
        if edge.uuid.is_nil() {
            return Err(InstanceValidationError::NilUuid);
        }
        let relation = self
            .schema
            .relation_by_name(&edge.relation)
            .ok_or_else(|| InstanceValidationError::UnknownRelation(edge.relation.clone()))?;

        self.check_endpoint(relation, EdgeEnd::Source, edge.source, source)?;
        self.check_endpoint(relation, EdgeEnd::Target, edge.target, target)
    }

    fn check_endpoint(
        &self,
        relation: &InstanceRelation,
        end: EdgeEnd,
        expected_uuid: InstanceId,
        node: &NodeInstance,
    ) -> ValidationResult {
        if node.uuid != expected_uuid {
            return Err(InstanceValidationError::EndpointMismatch {
                relation: relation.name.clone(),
                end,
                expected: expected_uuid,
                actual: node.uuid,
            });
        }

        let concept = self.concept(&node.concept)?;
        let endpoint = match end {
            EdgeEnd::Source => relation.source,
            EdgeEnd::Target => relation.target,
        };
        if !self.schema.is_sub_concept_of(concept.id, endpoint) {
            return Err(InstanceValidationError::EndpointConcept {
                relation: relation.name.clone(),
                end,
                expected: self.schema.concept_label(endpoint).to_string(),
                actual: concept.type_name.clone(),
            });
        }
        Ok(())
    }

    fn concept(&self, type_name: &str) -> Result<&'s Concept, InstanceValidationError> {
        self.schema
            .concept_by_type_name(type_name)
            .ok_or_else(|| InstanceValidationError::UnknownConcept(type_name.to_string()))
    }
}
