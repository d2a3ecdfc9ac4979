use crate::ir::{Constraints, ParamType};
use crate::parse::Syntax;

/// Resolve a parameter's syntax union to its canonical type tag.
///
/// The schema grammar should guarantee at most one populated variant, but
/// resolution still applies a fixed precedence so over-populated unions get
/// a deterministic answer: boolean > string > datetime > unsigned-integer >
/// named-reference > list > fallback. Resolution never fails; an absent or
/// all-empty syntax yields [`ParamType::Fallback`].
pub fn resolve(syntax: Option<&Syntax>) -> ParamType {
    let Some(syntax) = syntax else {
        return ParamType::Fallback;
    };

    if syntax.boolean.is_some() {
        ParamType::Boolean
    } else if syntax.string.is_some() {
        ParamType::String
    } else if syntax.date_time.is_some() {
        ParamType::DateTime
    } else if syntax.unsigned_int.is_some() {
        ParamType::UnsignedInt
    } else if let Some(ref data_type) = syntax.data_type {
        ParamType::Named(data_type.ref_name.clone())
    } else if syntax.list.is_some() {
        ParamType::List
    } else {
        ParamType::Fallback
    }
}

/// Collect the unresolved constraint metadata from whichever variants carry
/// it. Nothing here is interpreted; the record rides along for downstream
/// consumers.
pub fn constraints(syntax: Option<&Syntax>) -> Constraints {
    let Some(syntax) = syntax else {
        return Constraints::default();
    };

    let mut out = Constraints {
        default: syntax.default.as_ref().map(|d| d.value.clone()),
        data_type: syntax.data_type.as_ref().map(|d| d.ref_name.clone()),
        ..Default::default()
    };

    if let Some(ref string) = syntax.string {
        if let Some(ref size) = string.size {
            out.min_length = size.min_length;
            out.max_length = size.max_length;
        }
        out.enum_values = string.enumerations.iter().map(|e| e.value.clone()).collect();
        out.patterns = string.patterns.iter().map(|p| p.value.clone()).collect();
    }

    if let Some(ref unsigned) = syntax.unsigned_int
        && let Some(ref range) = unsigned.range
    {
        out.min = range.min_inclusive;
        out.max = range.max_inclusive;
    }

    if let Some(ref list) = syntax.list
        && let Some(ref size) = list.size
    {
        out.min_length = size.min_length;
        out.max_length = size.max_length;
    }

    out
}
