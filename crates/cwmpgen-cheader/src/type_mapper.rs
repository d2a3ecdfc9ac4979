use cwmpgen_core::ir::ParamType;

/// Map a resolved parameter type to its C type string.
///
/// No native bool is assumed (C89-compatible consumers), so booleans carry
/// as `int`. Lists carry as a NULL-terminated pointer array.
pub fn param_type_to_c(param_type: &ParamType) -> &'static str {
    match param_type {
        ParamType::Boolean => "int",
        ParamType::String => "char*",
        ParamType::DateTime => "char*",
        ParamType::UnsignedInt => "int32_t",
        ParamType::Named(_) => "char*",
        ParamType::List => "char**",
        ParamType::Fallback => "char*",
    }
}
