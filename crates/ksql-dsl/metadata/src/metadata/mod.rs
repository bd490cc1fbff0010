//! Declarative formatting metadata for record types.
//!
//! Defined alongside the record types and exposed as a lookup keyed by
//! entity and field name. No translator consults it yet; literal rendering
//! is expected to pick it up once decimal and date-time formatting is
//! wired in.

pub mod formats;

// re-export without modules
pub use formats::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    pub entities: EntitiesInfo,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            entities: EntitiesInfo::empty(),
        }
    }

    /// Look up the formatting rule for a field of an entity, if one was
    /// declared. Absence of a rule is the common case, not an error.
    pub fn lookup_format(&self, entity: &str, field: &str) -> Option<&FieldFormat> {
        self.entities
            .0
            .get(entity)
            .and_then(|info| info.fields.get(field))
    }
}
