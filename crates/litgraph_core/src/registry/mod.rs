//! Schema registries and the frozen schema context.
//!
//! # Responsibility
//! - Own the append-only tables for primitives, attributes, concepts,
//!   relations and constraints.
//! - Reject duplicate and dangling declarations at load time.
//! - Hand collaborators an immutable `SchemaRegistry` after loading.
//!
//! # Invariants
//! - Registration is write-once: a second declaration of the same name fails.
//! - Every stored reference points at a record registered before it.
//! - After `SchemaBuilder::freeze` nothing can mutate the schema.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod attribute_registry;
pub mod builder;
pub mod concept_registry;
pub mod constraint_registry;
mod naming;
pub mod primitive_registry;
pub mod relation_registry;
pub mod schema;
pub mod view;

pub type SchemaResult<T> = Result<T, SchemaError>;

/// Fatal schema configuration errors raised while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    DuplicatePrimitive(&'static str),
    UnknownPrimitive(&'static str),
    DanglingPrimitive(String),
    InvalidName {
        kind: &'static str,
        name: String,
    },
    DuplicateAttribute(String),
    DanglingAttribute(String),
    DuplicateConcept(String),
    DuplicateConceptAttribute {
        concept: String,
        attribute: String,
    },
    /// A conditional attribute is declared first, so it has no anchor.
    UnanchoredConditional {
        concept: String,
        attribute: String,
    },
    DanglingConcept(String),
    DuplicateRelation(String),
    DuplicateConstraint {
        sub: String,
        sup: String,
    },
    SubConceptCycle {
        sub: String,
        sup: String,
    },
    DuplicateModule(&'static str),
    UnknownModuleDependency {
        module: &'static str,
        dependency: &'static str,
    },
    ModuleDependencyCycle(Vec<&'static str>),
}

impl SchemaError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicatePrimitive(_) => "duplicate_primitive",
            Self::UnknownPrimitive(_) => "unknown_primitive",
            Self::DanglingPrimitive(_) => "dangling_primitive",
            Self::InvalidName { .. } => "invalid_name",
            Self::DuplicateAttribute(_) => "duplicate_attribute",
            Self::DanglingAttribute(_) => "dangling_attribute",
            Self::DuplicateConcept(_) => "duplicate_concept",
            Self::DuplicateConceptAttribute { .. } => "duplicate_concept_attribute",
            Self::UnanchoredConditional { .. } => "unanchored_conditional",
            Self::DanglingConcept(_) => "dangling_concept",
            Self::DuplicateRelation(_) => "duplicate_relation",
            Self::DuplicateConstraint { .. } => "duplicate_constraint",
            Self::SubConceptCycle { .. } => "sub_concept_cycle",
            Self::DuplicateModule(_) => "duplicate_module",
            Self::UnknownModuleDependency { .. } => "unknown_module_dependency",
            Self::ModuleDependencyCycle(_) => "module_dependency_cycle",
        }
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePrimitive(kind) => write!(f, "primitive kind already registered: {kind}"),
            Self::UnknownPrimitive(kind) => write!(f, "primitive kind not registered: {kind}"),
            Self::DanglingPrimitive(id) => write!(f, "primitive type not registered: {id}"),
            Self::InvalidName { kind, name } => {
                write!(f, "{kind} name is invalid: `{name}` (expected camelCase)")
            }
            Self::DuplicateAttribute(name) => write!(f, "attribute already defined: {name}"),
            Self::DanglingAttribute(name) => write!(f, "attribute not defined: {name}"),
            Self::DuplicateConcept(name) => write!(f, "concept already defined: {name}"),
            Self::DuplicateConceptAttribute { concept, attribute } => {
                write!(f, "concept `{concept}` lists attribute `{attribute}` twice")
            }
            Self::UnanchoredConditional { concept, attribute } => write!(
                f,
                "concept `{concept}` declares conditional attribute `{attribute}` without a preceding anchor"
            ),
            Self::DanglingConcept(name) => write!(f, "concept not defined: {name}"),
            Self::DuplicateRelation(name) => write!(f, "relation already defined: {name}"),
            Self::DuplicateConstraint { sub, sup } => {
                write!(f, "constraint already declared: {sub} SubConceptOf {sup}")
            }
            Self::SubConceptCycle { sub, sup } => {
                write!(f, "{sub} SubConceptOf {sup} would create a subtype cycle")
            }
            Self::DuplicateModule(name) => write!(f, "schema module listed twice: {name}"),
            Self::UnknownModuleDependency { module, dependency } => write!(
                f,
                "schema module `{module}` depends on unknown module `{dependency}`"
            ),
            Self::ModuleDependencyCycle(modules) => write!(
                f,
                "schema module dependencies form a cycle: {}",
                modules.join(", ")
            ),
        }
    }
}

impl Error for SchemaError {}
