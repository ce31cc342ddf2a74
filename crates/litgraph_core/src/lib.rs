//! Schema core for the research-literature knowledge graph.
//! This crate is the single source of truth for node/edge type definitions
//! and the rules instances must satisfy.

pub mod domain;
pub mod logging;
pub mod model;
pub mod registry;
pub mod validation;

pub use domain::{builtin_modules, load_order, load_schema, SchemaModule};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::attribute::{Attribute, Requirement};
pub use model::concept::{Concept, ConditionalPairing};
pub use model::constraint::Constraint;
pub use model::instance::{
    AttributeValue, EdgeEnd, EdgeInstance, InstanceId, InstanceValidationError, NodeInstance,
};
pub use model::primitive::{PrimitiveKind, PrimitiveType};
pub use model::relation::InstanceRelation;
pub use model::{AttributeId, ConceptId, PrimitiveTypeId, RelationId};
pub use registry::attribute_registry::AttributeRegistry;
pub use registry::builder::SchemaBuilder;
pub use registry::concept_registry::ConceptRegistry;
pub use registry::constraint_registry::ConstraintRegistry;
pub use registry::primitive_registry::PrimitiveTypeRegistry;
pub use registry::relation_registry::InstanceRelRegistry;
pub use registry::schema::{SchemaRegistry, UNKNOWN_LABEL};
pub use registry::view::{AttributeView, ConceptView, RelationView, SchemaSummary};
pub use registry::{SchemaError, SchemaResult};
pub use validation::instance_validator::InstanceValidator;
pub use validation::ValidationOptions;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
