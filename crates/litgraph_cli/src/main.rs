//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `litgraph_core` linkage and that the builtin schema loads.
//! - Print the concept catalogue, or one concept in detail when a
//!   `typeName` argument is given.
//!
//! Logging is enabled when `LITGRAPH_LOG_DIR` is set.

use litgraph_core::{init_logging, LoggingConfig, SchemaRegistry};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = init_logging(&config) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("litgraph_core version={}", litgraph_core::core_version());

    let schema = match SchemaRegistry::load_builtin() {
        Ok(schema) => schema,
        Err(err) => {
            eprintln!("schema load failed [{}]: {err}", err.code());
            return ExitCode::FAILURE;
        }
    };

    match std::env::args().nth(1) {
        Some(type_name) => describe_concept(&schema, &type_name),
        None => {
            print_catalogue(&schema);
            ExitCode::SUCCESS
        }
    }
}

fn print_catalogue(schema: &SchemaRegistry) {
    let summary = schema.summary();
    println!(
        "schema attributes={} concepts={} relations={} constraints={}",
        summary.attributes, summary.concepts, summary.relations, summary.constraints
    );
    for concept in schema.concepts() {
        let supers: Vec<&str> = schema
            .super_concepts_of(concept.id)
            .into_iter()
            .map(|id| schema.concept_label(id))
            .collect();
        if supers.is_empty() {
            println!("  {}", concept.type_name);
        } else {
            println!("  {} < {}", concept.type_name, supers.join(", "));
        }
    }
}

fn describe_concept(schema: &SchemaRegistry, type_name: &str) -> ExitCode {
    let Some(view) = schema
        .concept_by_type_name(type_name)
        .and_then(|concept| schema.resolve_concept(concept.id))
    else {
        eprintln!("unknown concept type: {type_name}");
        return ExitCode::FAILURE;
    };

    println!("concept {}", view.type_name);
    for attribute in &view.attributes {
        println!(
            "  attr {} {} {}",
            attribute.name,
            attribute.value_kind.as_str(),
            attribute.requirement.as_str()
        );
    }
    for pairing in &view.pairings {
        let name_of = |id| schema.attribute(id).map_or("?", |attr| attr.name.as_str());
        println!(
            "  pair {} -> {} ({})",
            name_of(pairing.dependent),
            name_of(pairing.anchor),
            pairing.policy.as_str()
        );
    }
    for relation in schema.relations_from(view.id) {
        println!(
            "  out  {} -> {}",
            relation.name,
            schema.concept_label(relation.target)
        );
    }
    for relation in schema.relations_to(view.id) {
        println!(
            "  in   {} <- {}",
            relation.name,
            schema.concept_label(relation.source)
        );
    }
    ExitCode::SUCCESS
}
