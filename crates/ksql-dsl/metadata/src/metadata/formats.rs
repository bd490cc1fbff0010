//! Per-field formatting rules.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mapping from entity type name to its per-field formatting rules.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct EntitiesInfo(pub BTreeMap<String, EntityInfo>);

impl EntitiesInfo {
    pub fn empty() -> Self {
        EntitiesInfo(BTreeMap::new())
    }
}

/// Formatting rules for the fields of a single entity type.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct EntityInfo {
    pub fields: BTreeMap<String, FieldFormat>,
}

/// A declarative formatting rule for a single field.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FieldFormat {
    /// Fixed-point precision and scale for a decimal field.
    DecimalPrecision { precision: u32, scale: u32 },
    /// Format pattern and optional region for a date-time field.
    DateTimeFormat {
        format: String,
        region: Option<String>,
    },
}
