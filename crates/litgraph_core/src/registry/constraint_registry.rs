//! Cross-concept constraint registry and subtype closure.
//!
//! # Invariants
//! - The subtype graph is acyclic; a declaration closing a cycle is rejected.
//! - `ancestors` always holds the full transitive closure of declared edges.

use crate::model::constraint::Constraint;
use crate::model::ConceptId;
use crate::registry::concept_registry::ConceptRegistry;
use crate::registry::{SchemaError, SchemaResult};
use std::collections::{BTreeMap, BTreeSet};

/// Declared constraints plus the eagerly maintained subtype closure.
#[derive(Debug, Default, Clone)]
pub struct ConstraintRegistry {
    constraints: Vec<Constraint>,
    ancestors: BTreeMap<ConceptId, BTreeSet<ConceptId>>,
}

impl ConstraintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `sub SubConceptOf sup` and extends the closure.
    ///
    /// # Errors
    /// - `DanglingConcept` when either id is not registered in `concepts`.
    /// - `DuplicateConstraint` when the same pair was already declared.
    /// - `SubConceptCycle` when `sup` is already `sub` or one of its sub-concepts.
    pub fn declare_sub_concept_of(
        &mut self,
        sub: ConceptId,
        sup: ConceptId,
        concepts: &ConceptRegistry,
    ) -> SchemaResult<Constraint> {
        let sub_name = concept_name(concepts, sub)?;
        let sup_name = concept_name(concepts, sup)?;

        let constraint = Constraint::SubConceptOf(sub, sup);
        if self.constraints.contains(&constraint) {
            return Err(SchemaError::DuplicateConstraint {
                sub: sub_name,
                sup: sup_name,
            });
        }
        if sub == sup || self.is_sub_concept_of(sup, sub) {
            return Err(SchemaError::SubConceptCycle {
                sub: sub_name,
                sup: sup_name,
            });
        }

        let mut lifted = self.ancestors.get(&sup).cloned().unwrap_or_default();
        lifted.insert(sup);
        let affected: Vec<ConceptId> = self
            .ancestors
            .iter()
            .filter(|(_, up)| up.contains(&sub))
            .map(|(id, _)| *id)
            .chain(std::iter::once(sub))
            .collect();
        for id in affected {
            self.ancestors
                .entry(id)
                .or_default()
                .extend(lifted.iter().copied());
        }

        self.constraints.push(constraint);
        Ok(constraint)
    }

    /// Reflexive-transitive subtype check over declared edges.
    ///
    /// Does not know which concepts exist; `SchemaRegistry::is_sub_concept_of`
    /// adds the registration check.
    pub fn is_sub_concept_of(&self, a: ConceptId, b: ConceptId) -> bool {
        a == b
            || self
                .ancestors
                .get(&a)
                .is_some_and(|up| up.contains(&b))
    }

    /// Strict super-concepts of `id`, in id order.
    pub fn super_concepts_of(&self, id: ConceptId) -> Vec<ConceptId> {
        self.ancestors
            .get(&id)
            .map(|up| up.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Strict sub-concepts of `id`, in id order.
    pub fn sub_concepts_of(&self, id: ConceptId) -> Vec<ConceptId> {
        self.ancestors
            .iter()
            .filter(|(_, up)| up.contains(&id))
            .map(|(sub, _)| *sub)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }
}

fn concept_name(concepts: &ConceptRegistry, id: ConceptId) -> SchemaResult<String> {
    concepts
        .get(id)
        .map(|concept| concept.type_name.clone())
        .ok_or_else(|| SchemaError::DanglingConcept(id.to_string()))
}
