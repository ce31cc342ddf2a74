//! Atomic value kinds an attribute may hold.

use crate::model::PrimitiveTypeId;
use serde::{Deserialize, Serialize};

/// Closed set of primitive value kinds.
///
/// New kinds are appended at the end; registration order defines identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Text,
    Number,
}

impl PrimitiveKind {
    /// Stable string id used by persistence and UI layers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
        }
    }

    /// Kinds registered by a fresh schema, in registration order.
    pub fn builtin() -> &'static [PrimitiveKind] {
        &[Self::Text, Self::Number]
    }
}

/// One registered primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimitiveType {
    pub id: PrimitiveTypeId,
    pub kind: PrimitiveKind,
}
