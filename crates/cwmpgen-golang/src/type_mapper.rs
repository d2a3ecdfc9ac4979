use cwmpgen_core::ir::ParamType;

/// Map a resolved parameter type to its Go type string.
///
/// Go has no native datetime in the generated surface, and named data-type
/// references collapse to their string carrier representation.
pub fn param_type_to_go(param_type: &ParamType) -> &'static str {
    match param_type {
        ParamType::Boolean => "bool",
        ParamType::String => "string",
        ParamType::DateTime => "string",
        ParamType::UnsignedInt => "int",
        ParamType::Named(_) => "string",
        ParamType::List => "[]string",
        ParamType::Fallback => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_mappings() {
        assert_eq!(param_type_to_go(&ParamType::Boolean), "bool");
        assert_eq!(param_type_to_go(&ParamType::String), "string");
        assert_eq!(param_type_to_go(&ParamType::DateTime), "string");
        assert_eq!(param_type_to_go(&ParamType::UnsignedInt), "int");
        assert_eq!(param_type_to_go(&ParamType::Fallback), "string");
    }

    #[test]
    fn test_list_and_named() {
        assert_eq!(param_type_to_go(&ParamType::List), "[]string");
        assert_eq!(
            param_type_to_go(&ParamType::Named("IPAddress".to_string())),
            "string"
        );
    }
}
