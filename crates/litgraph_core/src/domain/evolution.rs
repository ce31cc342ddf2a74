//! Evolution schema: the technique ontology rooted at `evoEntity`.
//!
//! `evoEntity` carries no attributes; its six specializations add their own
//! and are declared `SubConceptOf(evoEntity)`, so every relation typed on
//! `evoEntity` accepts any of them.

use crate::domain::{literature, subject, SchemaModule};
use crate::model::attribute::Requirement;
use crate::model::primitive::PrimitiveKind;
use crate::registry::builder::SchemaBuilder;
use crate::registry::SchemaResult;

pub const MODULE: &str = "evolution";

pub const EVO_ENTITY: &str = "evoEntity";
pub const EVO_OBJECT: &str = "evoObject";
pub const EVO_ALGO: &str = "evoAlgo";
pub const EVO_IMPROVEMENT: &str = "evoImprovement";
pub const EVO_CONTRIB: &str = "evoContrib";
pub const EVO_PROBLEM: &str = "evoProblem";
pub const EVO_DEFINITION: &str = "evoDefinition";

/// Every concrete specialization of `evoEntity`.
pub const EVO_SPECIALIZATIONS: [&str; 6] = [
    EVO_OBJECT,
    EVO_ALGO,
    EVO_IMPROVEMENT,
    EVO_CONTRIB,
    EVO_PROBLEM,
    EVO_DEFINITION,
];

pub const EVO_NAME: &str = "evoName";
pub const EVO_DESCRIPTION: &str = "evoDescription";
pub const EVO_COMPLEXITY: &str = "evoComplexity";
pub const EVO_METRIC: &str = "evoMetric";
/// Gated by `evoMetric`.
pub const EVO_METRIC_RESULT_STRING: &str = "evoMetricResultString";
/// Set together with `evoMetricResultString`.
pub const EVO_METRIC_RESULT_NUMBER: &str = "evoMetricResultNumber";
pub const EVO_DEFINITION_TEXT: &str = "evoDefinitionText";

pub const ENTITY_PARENT: &str = "entityParent";
pub const ENTITY_ALIAS: &str = "entityAlias";
pub const ENTITY_RELATION: &str = "entityRelation";
/// `evoEntity -> subSubject`.
pub const ENTITY_SUBJECT: &str = "entitySubject";
/// `evoEntity -> article`, the article an entity was extracted from.
pub const ENTITY_ARTICLE: &str = "entityArticle";
/// `evoImprovement -> evoEntity`, what the improvement starts from.
pub const IMPROVEMENT_BASE: &str = "improvementBase";
/// `evoImprovement -> evoEntity`, what the improvement produces.
pub const IMPROVEMENT_RESULT: &str = "improvementResult";
pub const PROBLEM_SOLVED_BY: &str = "problemSolvedBy";
pub const CONTRIB_TARGET: &str = "contribTarget";

pub struct EvolutionModule;

impl SchemaModule for EvolutionModule {
    fn name(&self) -> &'static str {
        MODULE
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &[literature::MODULE, subject::MODULE]
    }

    fn declare_concepts(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        for (requirement, name, kind) in [
            (Requirement::Required, EVO_NAME, PrimitiveKind::Text),
            (Requirement::Optional, EVO_DESCRIPTION, PrimitiveKind::Text),
            (Requirement::Optional, EVO_COMPLEXITY, PrimitiveKind::Text),
            (Requirement::Optional, EVO_METRIC, PrimitiveKind::Text),
            (
                Requirement::ConditionalOnChild,
                EVO_METRIC_RESULT_STRING,
                PrimitiveKind::Text,
            ),
            (
                Requirement::ConditionalOnSibling,
                EVO_METRIC_RESULT_NUMBER,
                PrimitiveKind::Number,
            ),
            (Requirement::Required, EVO_DEFINITION_TEXT, PrimitiveKind::Text),
        ] {
            builder.define_attribute(requirement, name, kind)?;
        }

        builder.define_concept(EVO_ENTITY, &[])?;
        builder.define_concept(EVO_OBJECT, &[EVO_NAME, EVO_DESCRIPTION])?;
        builder.define_concept(EVO_ALGO, &[EVO_NAME, EVO_DESCRIPTION, EVO_COMPLEXITY])?;
        builder.define_concept(
            EVO_IMPROVEMENT,
            &[
                EVO_NAME,
                EVO_DESCRIPTION,
                EVO_METRIC,
                EVO_METRIC_RESULT_STRING,
                EVO_METRIC_RESULT_NUMBER,
            ],
        )?;
        builder.define_concept(EVO_CONTRIB, &[EVO_NAME, EVO_DESCRIPTION])?;
        builder.define_concept(EVO_PROBLEM, &[EVO_NAME, EVO_DESCRIPTION])?;
        builder.define_concept(EVO_DEFINITION, &[EVO_NAME, EVO_DEFINITION_TEXT])?;
        Ok(())
    }

    fn declare_links(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        for specialization in EVO_SPECIALIZATIONS {
            builder.declare_sub_concept_of(specialization, EVO_ENTITY)?;
        }

        for (name, source, target) in [
            (ENTITY_PARENT, EVO_ENTITY, EVO_ENTITY),
            (ENTITY_ALIAS, EVO_ENTITY, EVO_ENTITY),
            (ENTITY_RELATION, EVO_ENTITY, EVO_ENTITY),
            (ENTITY_SUBJECT, EVO_ENTITY, subject::SUB_SUBJECT),
            (ENTITY_ARTICLE, EVO_ENTITY, literature::ARTICLE),
            (IMPROVEMENT_BASE, EVO_IMPROVEMENT, EVO_ENTITY),
            (IMPROVEMENT_RESULT, EVO_IMPROVEMENT, EVO_ENTITY),
            (PROBLEM_SOLVED_BY, EVO_PROBLEM, EVO_ALGO),
            (CONTRIB_TARGET, EVO_CONTRIB, EVO_ENTITY),
        ] {
            builder.define_relation(name, source, target)?;
        }
        Ok(())
    }
}
