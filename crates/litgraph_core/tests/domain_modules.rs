use litgraph_core::domain::{evolution, literature, signature, subject};
use litgraph_core::{
    builtin_modules, load_schema, PrimitiveKind, Requirement, SchemaBuilder, SchemaError,
    SchemaModule, SchemaResult,
};

/// Declares a relation into `late` concepts without depending on their module.
struct ForwardRefModule;

impl SchemaModule for ForwardRefModule {
    fn name(&self) -> &'static str {
        "early"
    }

    fn declare_concepts(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        builder.define_concept("earlyNode", &[])?;
        Ok(())
    }

    fn declare_links(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        builder.define_relation("earlyToLate", "earlyNode", "lateNode")?;
        Ok(())
    }
}

struct LateModule;

impl SchemaModule for LateModule {
    fn name(&self) -> &'static str {
        "late"
    }

    fn declare_concepts(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        builder.define_concept("lateNode", &[])?;
        Ok(())
    }

    fn declare_links(&self, _builder: &mut SchemaBuilder) -> SchemaResult<()> {
        Ok(())
    }
}

/// Re-declares an attribute the literature module already owns.
struct ShadowingModule;

impl SchemaModule for ShadowingModule {
    fn name(&self) -> &'static str {
        "shadow"
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &[literature::MODULE]
    }

    fn declare_concepts(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        builder.define_attribute(
            Requirement::Optional,
            literature::ARTICLE_TITLE,
            PrimitiveKind::Text,
        )?;
        Ok(())
    }

    fn declare_links(&self, _builder: &mut SchemaBuilder) -> SchemaResult<()> {
        Ok(())
    }
}

#[test]
fn builtin_schema_declares_every_concept() {
    let schema = load_schema(&builtin_modules()).expect("builtin schema should load");
    let mut type_names: Vec<&str> = schema
        .concepts()
        .map(|concept| concept.type_name.as_str())
        .collect();
    type_names.sort_unstable();

    let mut expected = vec![
        subject::SUBJECT,
        subject::SUB_SUBJECT,
        signature::AUTHOR,
        signature::AFFILIATION,
        signature::SIGNATURE,
        literature::ARTICLE,
        literature::REFERENCE,
        evolution::EVO_ENTITY,
    ];
    expected.extend(evolution::EVO_SPECIALIZATIONS);
    expected.sort_unstable();
    assert_eq!(type_names, expected);

    let summary = schema.summary();
    assert_eq!(summary.primitives, 2);
    assert_eq!(summary.constraints, 6);
    assert_eq!(summary.relations, 17);
}

#[test]
fn builtin_schema_loads_identically_twice() {
    let first = load_schema(&builtin_modules()).expect("first load");
    let second = load_schema(&builtin_modules()).expect("second load");
    let names = |schema: &litgraph_core::SchemaRegistry| -> Vec<(u32, String)> {
        schema
            .concepts()
            .map(|concept| (concept.id.index() as u32, concept.type_name.clone()))
            .collect()
    };
    assert_eq!(names(&first), names(&second));
}

#[test]
fn relations_may_target_concepts_of_later_modules() {
    let modules: Vec<Box<dyn SchemaModule>> = vec![Box::new(ForwardRefModule), Box::new(LateModule)];
    let schema = load_schema(&modules).expect("two-phase load resolves forward references");
    let relation = schema
        .relation_by_name("earlyToLate")
        .expect("relation defined");
    assert_eq!(schema.concept_label(relation.target), "lateNode");
}

#[test]
fn loading_a_module_twice_fails() {
    let mut modules = builtin_modules();
    modules.push(Box::new(litgraph_core::domain::subject::SubjectModule));
    let err = load_schema(&modules).expect_err("duplicate module must fail");
    assert_eq!(err, SchemaError::DuplicateModule(subject::MODULE));
}

#[test]
fn redefining_an_attribute_from_another_module_fails() {
    let mut modules = builtin_modules();
    modules.push(Box::new(ShadowingModule));
    let err = load_schema(&modules).expect_err("shadowing attribute must fail");
    assert_eq!(
        err,
        SchemaError::DuplicateAttribute(literature::ARTICLE_TITLE.to_string())
    );
    assert_eq!(err.code(), "duplicate_attribute");
}

#[test]
fn missing_dependency_module_fails_fast() {
    let modules: Vec<Box<dyn SchemaModule>> = vec![Box::new(evolution::EvolutionModule)];
    let err = load_schema(&modules).expect_err("evolution needs literature and subject");
    assert!(matches!(err, SchemaError::UnknownModuleDependency { .. }));
}

#[test]
fn builtin_requirements_match_declarations() {
    let schema = load_schema(&builtin_modules()).expect("builtin schema should load");
    for (name, requirement, kind) in [
        (literature::ARTICLE_TITLE, Requirement::Required, PrimitiveKind::Text),
        (literature::ARTICLE_YEAR, Requirement::Optional, PrimitiveKind::Number),
        (evolution::EVO_METRIC, Requirement::Optional, PrimitiveKind::Text),
        (
            evolution::EVO_METRIC_RESULT_STRING,
            Requirement::ConditionalOnChild,
            PrimitiveKind::Text,
        ),
        (
            evolution::EVO_METRIC_RESULT_NUMBER,
            Requirement::ConditionalOnSibling,
            PrimitiveKind::Number,
        ),
    ] {
        let attribute = schema.attribute_by_name(name).expect("attribute defined");
        let view = schema
            .resolve_attribute(attribute.id)
            .expect("attribute resolves");
        assert_eq!(view.requirement, requirement, "{name}");
        assert_eq!(view.value_kind, kind, "{name}");
    }
}
