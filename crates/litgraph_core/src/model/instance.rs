//! Knowledge-graph instance records checked against the schema.
//!
//! # Responsibility
//! - Define the node/edge payload shape exchanged with persistence and UI.
//! - Define the error taxonomy returned by instance validation.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another instance.
//! - Nodes reference concepts by `type_name`, edges reference relations by
//!   `name`; numeric schema ids never leave the process.

use crate::model::primitive::PrimitiveKind;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one node or edge instance.
pub type InstanceId = Uuid;

/// Value held by one attribute on an instance.
///
/// Serialized untagged so payloads read `{"articleYear": 2021}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Whole numbers are written back as JSON integers.
    Number(#[serde(serialize_with = "serialize_number")] f64),
    Text(String),
}

const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(value) {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl AttributeValue {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Text(_) => PrimitiveKind::Text,
            Self::Number(_) => PrimitiveKind::Number,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// One node of the knowledge graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInstance {
    pub uuid: InstanceId,
    /// Concept `type_name`, serialized as `type`.
    #[serde(rename = "type")]
    pub concept: String,
    /// Present attributes keyed by attribute name. Absent keys mean absent values.
    #[serde(default)]
    pub values: BTreeMap<String, AttributeValue>,
}

impl NodeInstance {
    /// Creates an empty node with a generated stable ID.
    pub fn new(concept: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            concept: concept.into(),
            values: BTreeMap::new(),
        }
    }

    /// Creates an empty node with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Errors
    /// - Returns `InstanceValidationError::NilUuid` for the nil UUID.
    pub fn with_id(
        uuid: InstanceId,
        concept: impl Into<String>,
    ) -> Result<Self, InstanceValidationError> {
        if uuid.is_nil() {
            return Err(InstanceValidationError::NilUuid);
        }
        Ok(Self {
            uuid,
            concept: concept.into(),
            values: BTreeMap::new(),
        })
    }

    /// Sets one attribute value, returning `self` for chained construction.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Removes one attribute value, returning the previous value.
    pub fn clear(&mut self, name: &str) -> Option<AttributeValue> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

/// One edge of the knowledge graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeInstance {
    pub uuid: InstanceId,
    /// Relation `name`.
    pub relation: String,
    pub source: InstanceId,
    pub target: InstanceId,
}

impl EdgeInstance {
    /// Creates an edge between two existing nodes with a generated stable ID.
    pub fn new(relation: impl Into<String>, source: &NodeInstance, target: &NodeInstance) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            relation: relation.into(),
            source: source.uuid,
            target: target.uuid,
        }
    }
}

/// Edge endpoint selector used in endpoint errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Target,
}

impl EdgeEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

/// Instance-level schema violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceValidationError {
    NilUuid,
    UnknownConcept(String),
    UnknownRelation(String),
    UnknownAttribute {
        concept: String,
        attribute: String,
    },
    MissingRequired {
        concept: String,
        attribute: String,
    },
    ValueKindMismatch {
        attribute: String,
        expected: PrimitiveKind,
        actual: PrimitiveKind,
    },
    NonFiniteNumber {
        attribute: String,
    },
    /// A `ConditionalOnChild` attribute is set while its anchor is absent.
    MissingAnchor {
        concept: String,
        attribute: String,
        anchor: String,
    },
    /// A `ConditionalOnSibling` attribute and its anchor disagree on presence.
    UnpairedSibling {
        concept: String,
        attribute: String,
        sibling: String,
    },
    /// Edge endpoint UUID does not match the node handed in for that end.
    EndpointMismatch {
        relation: String,
        end: EdgeEnd,
        expected: InstanceId,
        actual: InstanceId,
    },
    /// Endpoint node concept is not a sub-concept of the relation endpoint.
    EndpointConcept {
        relation: String,
        end: EdgeEnd,
        expected: String,
        actual: String,
    },
}

impl Display for InstanceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "instance uuid must not be nil"),
            Self::UnknownConcept(name) => write!(f, "unknown concept type: {name}"),
            Self::UnknownRelation(name) => write!(f, "unknown relation: {name}"),
            Self::UnknownAttribute { concept, attribute } => {
                write!(f, "attribute `{attribute}` is not defined on `{concept}`")
            }
            Self::MissingRequired { concept, attribute } => {
                write!(f, "`{concept}` requires attribute `{attribute}`")
            }
            Self::ValueKindMismatch {
                attribute,
                expected,
                actual,
            } => write!(
                f,
                "attribute `{attribute}` expects {} value, got {}",
                expected.as_str(),
                actual.as_str()
            ),
            Self::NonFiniteNumber { attribute } => {
                write!(f, "attribute `{attribute}` must be a finite number")
            }
            Self::MissingAnchor {
                concept,
                attribute,
                anchor,
            } => write!(
                f,
                "`{concept}` attribute `{attribute}` requires `{anchor}` to be set"
            ),
            Self::UnpairedSibling {
                concept,
                attribute,
                sibling,
            } => write!(
                f,
                "`{concept}` attributes `{attribute}` and `{sibling}` must be set together"
            ),
            Self::EndpointMismatch {
                relation,
                end,
                expected,
                actual,
            } => write!(
                f,
                "relation `{relation}` {} is {expected}, got node {actual}",
                end.as_str()
            ),
            Self::EndpointConcept {
                relation,
                end,
                expected,
                actual,
            } => write!(
                f,
                "relation `{relation}` {} must be `{expected}` or a sub-concept, got `{actual}`",
                end.as_str()
            ),
        }
    }
}

impl Error for InstanceValidationError {}
