//! Subject taxonomy schema: top-level subjects and their sub-subjects.

use crate::domain::SchemaModule;
use crate::model::attribute::Requirement;
use crate::model::primitive::PrimitiveKind;
use crate::registry::builder::SchemaBuilder;
use crate::registry::SchemaResult;

pub const MODULE: &str = "subject";

pub const SUBJECT: &str = "subject";
pub const SUB_SUBJECT: &str = "subSubject";

pub const SUBJECT_NAME: &str = "subjectName";
pub const SUBJECT_CODE: &str = "subjectCode";

/// `subSubject -> subject`.
pub const SUB_SUBJECT_OF: &str = "subSubjectOf";

pub struct SubjectModule;

impl SchemaModule for SubjectModule {
    fn name(&self) -> &'static str {
        MODULE
    }

    fn declare_concepts(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        builder.define_attribute(Requirement::Required, SUBJECT_NAME, PrimitiveKind::Text)?;
        builder.define_attribute(Requirement::Optional, SUBJECT_CODE, PrimitiveKind::Text)?;

        builder.define_concept(SUBJECT, &[SUBJECT_NAME, SUBJECT_CODE])?;
        builder.define_concept(SUB_SUBJECT, &[SUBJECT_NAME, SUBJECT_CODE])?;
        Ok(())
    }

    fn declare_links(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        builder.define_relation(SUB_SUBJECT_OF, SUB_SUBJECT, SUBJECT)?;
        Ok(())
    }
}
