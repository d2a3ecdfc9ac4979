use serde::Deserialize;

use super::object::RawObject;
use super::parameter::RawParameter;

/// Root of a data model document.
///
/// A document may declare any number of models; selection among them is the
/// normalizer's concern, not the parser's.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(rename = "model", default)]
    pub models: Vec<RawModel>,
}

/// A declared data model, schema-as-parsed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawModel {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@version", default)]
    pub version: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "object", default)]
    pub objects: Vec<RawObject>,

    /// Parameters declared directly on the model root, outside any object.
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<RawParameter>,
}
