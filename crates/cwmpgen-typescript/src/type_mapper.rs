use cwmpgen_core::ir::ParamType;

/// Map a resolved parameter type to its TypeScript type string.
pub fn param_type_to_ts(param_type: &ParamType) -> &'static str {
    match param_type {
        ParamType::Boolean => "boolean",
        ParamType::String => "string",
        ParamType::DateTime => "string",
        ParamType::UnsignedInt => "number",
        ParamType::Named(_) => "string",
        ParamType::List => "string[]",
        ParamType::Fallback => "string",
    }
}
