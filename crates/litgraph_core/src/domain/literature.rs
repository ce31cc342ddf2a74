//! Literature schema: articles and the references they cite.

use crate::domain::{signature, subject, SchemaModule};
use crate::model::attribute::Requirement;
use crate::model::primitive::PrimitiveKind;
use crate::registry::builder::SchemaBuilder;
use crate::registry::SchemaResult;

pub const MODULE: &str = "literature";

pub const ARTICLE: &str = "article";
pub const REFERENCE: &str = "reference";

pub const ARTICLE_TITLE: &str = "articleTitle";
pub const ARTICLE_YEAR: &str = "articleYear";
pub const ARTICLE_VENUE: &str = "articleVenue";
pub const ARTICLE_DOI: &str = "articleDoi";
pub const ARTICLE_ABSTRACT: &str = "articleAbstract";
/// Location of the article file as recorded by the file layer; never opened here.
pub const ARTICLE_FILE_PATH: &str = "articleFilePath";

pub const REF_TITLE: &str = "refTitle";
pub const REF_YEAR: &str = "refYear";
pub const REF_VENUE: &str = "refVenue";
pub const REF_RAW_TEXT: &str = "refRawText";

/// `article -> reference`.
pub const ARTICLE_REF_ENTRY: &str = "articleRefEntry";
/// `article -> signature`.
pub const ARTICLE_SIGNATURE: &str = "articleSignature";
/// `article -> subSubject`.
pub const ARTICLE_SUBJECT: &str = "articleSubject";
/// `reference -> author`.
pub const REF_AUTHOR: &str = "refAuthor";
/// `reference -> article`, set once a cited work is itself in the library.
pub const REF_ARTICLE: &str = "refArticle";

pub struct LiteratureModule;

impl SchemaModule for LiteratureModule {
    fn name(&self) -> &'static str {
        MODULE
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &[signature::MODULE, subject::MODULE]
    }

    fn declare_concepts(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        for (requirement, name, kind) in [
            (Requirement::Required, ARTICLE_TITLE, PrimitiveKind::Text),
            (Requirement::Optional, ARTICLE_YEAR, PrimitiveKind::Number),
            (Requirement::Optional, ARTICLE_VENUE, PrimitiveKind::Text),
            (Requirement::Optional, ARTICLE_DOI, PrimitiveKind::Text),
            (Requirement::Optional, ARTICLE_ABSTRACT, PrimitiveKind::Text),
            (Requirement::Optional, ARTICLE_FILE_PATH, PrimitiveKind::Text),
            (Requirement::Required, REF_TITLE, PrimitiveKind::Text),
            (Requirement::Optional, REF_YEAR, PrimitiveKind::Number),
            (Requirement::Optional, REF_VENUE, PrimitiveKind::Text),
            (Requirement::Optional, REF_RAW_TEXT, PrimitiveKind::Text),
        ] {
            builder.define_attribute(requirement, name, kind)?;
        }

        builder.define_concept(
            ARTICLE,
            &[
                ARTICLE_TITLE,
                ARTICLE_YEAR,
                ARTICLE_VENUE,
                ARTICLE_DOI,
                ARTICLE_ABSTRACT,
                ARTICLE_FILE_PATH,
            ],
        )?;
        builder.define_concept(REFERENCE, &[REF_TITLE, REF_YEAR, REF_VENUE, REF_RAW_TEXT])?;
        Ok(())
    }

    fn declare_links(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        builder.define_relation(ARTICLE_REF_ENTRY, ARTICLE, REFERENCE)?;
        builder.define_relation(ARTICLE_SIGNATURE, ARTICLE, signature::SIGNATURE)?;
        builder.define_relation(ARTICLE_SUBJECT, ARTICLE, subject::SUB_SUBJECT)?;
        builder.define_relation(REF_AUTHOR, REFERENCE, signature::AUTHOR)?;
        builder.define_relation(REF_ARTICLE, REFERENCE, ARTICLE)?;
        Ok(())
    }
}
