//! Schema metamodel records for the literature knowledge graph.
//!
//! # Responsibility
//! - Define the flat records that make up the schema: primitive kinds,
//!   attributes, concepts, instance relations and constraints.
//! - Define the typed identities every collaborator uses to refer to them.
//! - Define node/edge instance records validated against the schema.
//!
//! # Invariants
//! - Every schema record is identified by a typed id issued by its registry.
//! - Ids are indexes into append-only tables; they are never reused.
//! - Ids are stable for one process only; `type_name`/`name` are the durable keys.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub mod attribute;
pub mod concept;
pub mod constraint;
pub mod instance;
pub mod primitive;
pub mod relation;

macro_rules! schema_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub(crate) fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            /// Position of this record in its registry table.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

schema_id!(
    /// Identity of one registered primitive value kind.
    PrimitiveTypeId,
    "primitive"
);
schema_id!(
    /// Identity of one attribute definition.
    AttributeId,
    "attribute"
);
schema_id!(
    /// Identity of one concept (node type).
    ConceptId,
    "concept"
);
schema_id!(
    /// Identity of one instance relation (edge type).
    RelationId,
    "relation"
);
