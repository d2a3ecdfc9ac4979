use std::fmt;

/// A schema name with identifier variants pre-computed for the backends.
///
/// `identifier` keeps the original casing with illegal characters replaced,
/// for backends that preserve names verbatim (TypeScript, C). `pascal_case`
/// is for backends that require exported/capitalized names (Go).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName {
    pub original: String,
    pub identifier: String,
    pub pascal_case: String,
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// The resolved scalar type tag of a parameter.
///
/// Resolution is total: a parameter with no populated syntax variant gets
/// [`ParamType::Fallback`], which every backend maps like a plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    Boolean,
    String,
    DateTime,
    UnsignedInt,
    /// Reference to a named data type declared elsewhere in the schema.
    Named(String),
    /// Comma-separated list value.
    List,
    /// No syntax variant was populated.
    Fallback,
}

impl ParamType {
    pub fn as_tag(&self) -> &str {
        match self {
            ParamType::Boolean => "boolean",
            ParamType::String => "string",
            ParamType::DateTime => "datetime",
            ParamType::UnsignedInt => "unsignedInt",
            ParamType::Named(name) => name,
            ParamType::List => "list",
            ParamType::Fallback => "string",
        }
    }
}

/// Value constraints carried through unresolved.
///
/// The generators never interpret these; they exist for downstream consumers
/// of the canonical model (documentation tooling, future validators).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub default: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub enum_values: Vec<String>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub patterns: Vec<String>,
    pub data_type: Option<String>,
}
