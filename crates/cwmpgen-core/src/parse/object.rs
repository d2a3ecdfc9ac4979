use serde::Deserialize;

use super::parameter::RawParameter;

/// An object node of the schema tree, schema-as-parsed.
///
/// Names follow the broadband-forum convention: a trailing `.` separator and,
/// for table objects, an `{i}` index placeholder segment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawObject {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@access", default)]
    pub access: String,

    #[serde(rename = "@minEntries", default)]
    pub min_entries: Option<String>,

    #[serde(rename = "@maxEntries", default)]
    pub max_entries: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "uniqueKey", default)]
    pub unique_keys: Vec<UniqueKey>,

    #[serde(rename = "object", default)]
    pub objects: Vec<RawObject>,

    #[serde(rename = "parameter", default)]
    pub parameters: Vec<RawParameter>,
}

/// A unique-key declaration over one or more parameters of a table object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UniqueKey {
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<KeyParameterRef>,
}

/// A reference to a parameter participating in a unique key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyParameterRef {
    #[serde(rename = "@ref")]
    pub ref_name: String,
}
