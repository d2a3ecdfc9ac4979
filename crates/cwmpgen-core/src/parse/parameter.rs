use serde::Deserialize;

/// A parameter (leaf value) of the schema tree, schema-as-parsed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParameter {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@access", default)]
    pub access: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub syntax: Option<Syntax>,
}

/// The value-constraint union of a parameter.
///
/// The schema grammar only allows one populated variant per parameter, but
/// nothing here enforces that; the type resolver applies a fixed precedence
/// instead of rejecting over-populated unions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Syntax {
    #[serde(default)]
    pub boolean: Option<BooleanSyntax>,

    #[serde(default)]
    pub string: Option<StringSyntax>,

    #[serde(rename = "dateTime", default)]
    pub date_time: Option<DateTimeSyntax>,

    #[serde(rename = "unsignedInt", default)]
    pub unsigned_int: Option<UnsignedIntSyntax>,

    #[serde(default)]
    pub list: Option<ListSyntax>,

    #[serde(rename = "dataType", default)]
    pub data_type: Option<DataTypeRef>,

    #[serde(default)]
    pub default: Option<DefaultValue>,
}

/// `<boolean/>` carries no constraints of its own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BooleanSyntax {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StringSyntax {
    #[serde(default)]
    pub size: Option<Size>,

    #[serde(rename = "enumeration", default)]
    pub enumerations: Vec<Enumeration>,

    #[serde(rename = "pattern", default)]
    pub patterns: Vec<Pattern>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateTimeSyntax {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnsignedIntSyntax {
    #[serde(default)]
    pub range: Option<Range>,

    #[serde(rename = "@units", default)]
    pub units: Option<String>,
}

/// A comma-separated list value; item constraints ride on the size element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSyntax {
    #[serde(default)]
    pub size: Option<Size>,
}

/// A reference to a named data type declared elsewhere in the schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataTypeRef {
    #[serde(rename = "@ref")]
    pub ref_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Size {
    #[serde(rename = "@minLength", default)]
    pub min_length: Option<u32>,

    #[serde(rename = "@maxLength", default)]
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Enumeration {
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pattern {
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Range {
    #[serde(rename = "@minInclusive", default)]
    pub min_inclusive: Option<i64>,

    #[serde(rename = "@maxInclusive", default)]
    pub max_inclusive: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultValue {
    #[serde(rename = "@type", default)]
    pub kind: Option<String>,

    #[serde(rename = "@value")]
    pub value: String,
}
