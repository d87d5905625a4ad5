//! The JSON catalog of database objects the CLI renders.
//!
//! A catalog is metadata already extracted from a database; dbreport only
//! formats it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level catalog document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub objects: Vec<CatalogObject>,
}

/// One reported database object (table, view, routine, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogObject {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Short definition, e.g. a check constraint or view summary
    #[serde(default)]
    pub definition: Option<String>,
    /// Full source text, whitespace preserved
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub data: Option<DataSample>,
}

/// A column or parameter of an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub ordinal: Option<u32>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
}

/// A relationship from columns of this object to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub name: String,
    pub from: String,
    pub to: String,
}

/// Sample rows of an object's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSample {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

fn default_kind() -> String {
    "table".to_string()
}

impl Catalog {
    /// Parse catalog JSON. Blank input is an empty catalog.
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        if text.trim().is_empty() {
            return Ok(Catalog::default());
        }
        serde_json::from_str(text)
    }
}
