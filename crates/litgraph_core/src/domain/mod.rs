//! Built-in domain schema modules and the two-phase loader.
//!
//! # Responsibility
//! - Declare the literature, signature, subject and evolution schemas.
//! - Order modules by declared dependencies, not by source order.
//! - Load in two phases: every module's attributes and concepts first, then
//!   every module's relations and constraints.
//!
//! # Invariants
//! - Load order is deterministic: topological, ties broken by module name.
//! - Any declaration error aborts the whole load; no partial schema escapes.

use crate::registry::builder::SchemaBuilder;
use crate::registry::schema::SchemaRegistry;
use crate::registry::{SchemaError, SchemaResult};
use log::{error, info};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

pub mod evolution;
pub mod literature;
pub mod signature;
pub mod subject;

/// One organizational unit of schema declarations.
pub trait SchemaModule {
    /// Unique module name used for dependency edges.
    fn name(&self) -> &'static str;

    /// Modules whose concepts this module references.
    fn depends_on(&self) -> &'static [&'static str] {
        &[]
    }

    /// Phase 1: attributes and concepts.
    fn declare_concepts(&self, builder: &mut SchemaBuilder) -> SchemaResult<()>;

    /// Phase 2: relations and constraints. Every module's concepts exist here.
    fn declare_links(&self, builder: &mut SchemaBuilder) -> SchemaResult<()>;
}

/// Returns the built-in modules (in no particular order).
pub fn builtin_modules() -> Vec<Box<dyn SchemaModule>> {
    vec![
        Box::new(evolution::EvolutionModule),
        Box::new(literature::LiteratureModule),
        Box::new(signature::SignatureModule),
        Box::new(subject::SubjectModule),
    ]
}

/// Computes a deterministic dependency-respecting order over `modules`.
///
/// Returns indexes into `modules`.
///
/// # Errors
/// - `DuplicateModule` when two modules share a name.
/// - `UnknownModuleDependency` when a dependency is not in `modules`.
/// - `ModuleDependencyCycle` listing the modules that could not be ordered.
pub fn load_order(modules: &[Box<dyn SchemaModule>]) -> SchemaResult<Vec<usize>> {
    let mut by_name = BTreeMap::new();
    for (index, module) in modules.iter().enumerate() {
        if by_name.insert(module.name(), index).is_some() {
            return Err(SchemaError::DuplicateModule(module.name()));
        }
    }

    let mut pending: BTreeMap<&'static str, BTreeSet<&'static str>> = BTreeMap::new();
    for module in modules {
        let mut deps = BTreeSet::new();
        for &dependency in module.depends_on() {
            if !by_name.contains_key(dependency) {
                return Err(SchemaError::UnknownModuleDependency {
                    module: module.name(),
                    dependency,
                });
            }
            deps.insert(dependency);
        }
        pending.insert(module.name(), deps);
    }

    let mut order = Vec::with_capacity(modules.len());
    while !pending.is_empty() {
        let ready = pending
            .iter()
            .find(|(_, deps)| deps.is_empty())
            .map(|(name, _)| *name);
        let Some(name) = ready else {
            return Err(SchemaError::ModuleDependencyCycle(
                pending.keys().copied().collect(),
            ));
        };
        pending.remove(name);
        for deps in pending.values_mut() {
            deps.remove(name);
        }
        order.push(by_name[name]);
    }
    Ok(order)
}

/// Runs the two-phase load over `modules` and freezes the result.
///
/// # Side effects
/// - Emits `schema_load` logging events with counts, duration and status.
pub fn load_schema(modules: &[Box<dyn SchemaModule>]) -> SchemaResult<SchemaRegistry> {
    let started_at = Instant::now();
    info!(
        "event=schema_load module=schema status=start modules={}",
        modules.len()
    );

    match run_phases(modules) {
        Ok(schema) => {
            let summary = schema.summary();
            info!(
                "event=schema_load module=schema status=ok duration_ms={} attributes={} concepts={} relations={} constraints={}",
                started_at.elapsed().as_millis(),
                summary.attributes,
                summary.concepts,
                summary.relations,
                summary.constraints
            );
            Ok(schema)
        }
        Err(err) => {
            error!(
                "event=schema_load module=schema status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Err(err)
        }
    }
}

fn run_phases(modules: &[Box<dyn SchemaModule>]) -> SchemaResult<SchemaRegistry> {
    let order = load_order(modules)?;
    let mut builder = SchemaBuilder::new()?;
    for index in &order {
        modules[*index].declare_concepts(&mut builder)?;
    }
    for index in &order {
        modules[*index].declare_links(&mut builder)?;
    }
    Ok(builder.freeze())
}
