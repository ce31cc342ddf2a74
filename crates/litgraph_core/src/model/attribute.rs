//! Attribute definitions and requirement policies.
//!
//! # Invariants
//! - One `Attribute` record exists per definition; concepts share it by id.
//! - Conditional policies are resolved against an anchor attribute chosen by
//!   the owning concept, see `model::concept::ConditionalPairing`.

use crate::model::{AttributeId, PrimitiveTypeId};
use serde::{Deserialize, Serialize};

/// Whether an attribute must, may, or conditionally must appear on an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Present on every instance of the owning concept.
    Required,
    /// May be absent.
    Optional,
    /// Present only when the anchor attribute is present.
    ConditionalOnChild,
    /// Present exactly when the anchor attribute is present.
    ///
    /// Setting only one side of the pair is rejected with
    /// `InstanceValidationError::UnpairedSibling`; on `evoImprovement` a metric
    /// result therefore carries both its string and number encodings.
    ConditionalOnSibling,
}

impl Requirement {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::ConditionalOnChild => "conditional_on_child",
            Self::ConditionalOnSibling => "conditional_on_sibling",
        }
    }

    /// Returns whether this policy needs an anchor attribute.
    pub fn is_conditional(self) -> bool {
        matches!(self, Self::ConditionalOnChild | Self::ConditionalOnSibling)
    }
}

/// One named, typed field definable on concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub id: AttributeId,
    /// camelCase key used by instance payloads, e.g. `articleTitle`.
    pub name: String,
    pub requirement: Requirement,
    pub value_type: PrimitiveTypeId,
}
