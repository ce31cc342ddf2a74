//! Signature schema: authors, affiliations and the per-article signatures
//! that bind them.
//!
//! `sigName` is one attribute shared by all three concepts.

use crate::domain::SchemaModule;
use crate::model::attribute::Requirement;
use crate::model::primitive::PrimitiveKind;
use crate::registry::builder::SchemaBuilder;
use crate::registry::SchemaResult;

pub const MODULE: &str = "signature";

pub const AUTHOR: &str = "author";
pub const AFFILIATION: &str = "affiliation";
pub const SIGNATURE: &str = "signature";

pub const SIG_NAME: &str = "sigName";
pub const AUTHOR_EMAIL: &str = "authorEmail";
pub const AFFILIATION_COUNTRY: &str = "affiliationCountry";
pub const SIGNATURE_ORDER: &str = "signatureOrder";

/// `signature -> author`.
pub const SIGNATURE_AUTHOR: &str = "signatureAuthor";
/// `signature -> affiliation`.
pub const SIGNATURE_AFFILIATION: &str = "signatureAffiliation";

pub struct SignatureModule;

impl SchemaModule for SignatureModule {
    fn name(&self) -> &'static str {
        MODULE
    }

    fn declare_concepts(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        builder.define_attribute(Requirement::Required, SIG_NAME, PrimitiveKind::Text)?;
        builder.define_attribute(Requirement::Optional, AUTHOR_EMAIL, PrimitiveKind::Text)?;
        builder.define_attribute(
            Requirement::Optional,
            AFFILIATION_COUNTRY,
            PrimitiveKind::Text,
        )?;
        builder.define_attribute(
            Requirement::Optional,
            SIGNATURE_ORDER,
            PrimitiveKind::Number,
        )?;

        builder.define_concept(AUTHOR, &[SIG_NAME, AUTHOR_EMAIL])?;
        builder.define_concept(AFFILIATION, &[SIG_NAME, AFFILIATION_COUNTRY])?;
        builder.define_concept(SIGNATURE, &[SIG_NAME, SIGNATURE_ORDER])?;
        Ok(())
    }

    fn declare_links(&self, builder: &mut SchemaBuilder) -> SchemaResult<()> {
        builder.define_relation(SIGNATURE_AUTHOR, SIGNATURE, AUTHOR)?;
        builder.define_relation(SIGNATURE_AFFILIATION, SIGNATURE, AFFILIATION)?;
        Ok(())
    }
}
