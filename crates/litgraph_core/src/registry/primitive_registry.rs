//! Primitive value kind registry.

use crate::model::primitive::{PrimitiveKind, PrimitiveType};
use crate::model::PrimitiveTypeId;
use crate::registry::{SchemaError, SchemaResult};
use std::collections::BTreeMap;

/// Append-only table of primitive kinds.
#[derive(Debug, Default, Clone)]
pub struct PrimitiveTypeRegistry {
    types: Vec<PrimitiveType>,
    by_kind: BTreeMap<PrimitiveKind, PrimitiveTypeId>,
}

impl PrimitiveTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every `PrimitiveKind::builtin()` kind.
    pub fn with_builtin_kinds() -> SchemaResult<Self> {
        let mut registry = Self::new();
        for kind in PrimitiveKind::builtin() {
            registry.register(*kind)?;
        }
        Ok(registry)
    }

    /// Registers one kind and returns its identity.
    ///
    /// # Errors
    /// - `DuplicatePrimitive` when the kind is already registered.
    pub fn register(&mut self, kind: PrimitiveKind) -> SchemaResult<PrimitiveTypeId> {
        if self.by_kind.contains_key(&kind) {
            return Err(SchemaError::DuplicatePrimitive(kind.as_str()));
        }
        let id = PrimitiveTypeId::from_index(self.types.len());
        self.types.push(PrimitiveType { id, kind });
        self.by_kind.insert(kind, id);
        Ok(id)
    }

    pub fn resolve(&self, id: PrimitiveTypeId) -> Option<&PrimitiveType> {
        self.types.get(id.index())
    }

    pub fn id_of(&self, kind: PrimitiveKind) -> Option<PrimitiveTypeId> {
        self.by_kind.get(&kind).copied()
    }

    pub fn contains(&self, id: PrimitiveTypeId) -> bool {
        id.index() < self.types.len()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveType> {
        self.types.iter()
    }
}
