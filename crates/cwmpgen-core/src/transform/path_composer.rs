use crate::ir::{ModelObject, ModelParameter};
use crate::parse::{RawObject, RawParameter};

use super::name_normalizer::normalize_name;
use super::type_resolver;

/// The reserved token marking per-instance addressing in an object name.
pub const INDEX_PLACEHOLDER: &str = "{i}";

/// First pass: build the canonical object tree with paths and multiplicity
/// flags resolved, leaving parameters empty.
///
/// An object name ending in the `.` separator contributes the separator
/// verbatim to its own path; `base_name` strips exactly one trailing
/// separator. An empty name yields a path equal to the parent path.
pub fn compose_object(raw: &RawObject, parent_path: &str) -> ModelObject {
    let base_name = raw
        .name
        .strip_suffix('.')
        .unwrap_or(&raw.name)
        .to_string();

    let path = format!("{parent_path}{}", raw.name);

    let has_index_placeholder = raw.name.contains(INDEX_PLACEHOLDER);
    let multi_instance = is_multi_instance(raw.max_entries.as_deref(), has_index_placeholder);

    let objects = raw
        .objects
        .iter()
        .map(|child| compose_object(child, &path))
        .collect();

    ModelObject {
        name: normalize_name(&raw.name),
        base_name,
        description: raw.description.clone(),
        access: raw.access.clone(),
        path,
        parent_path: parent_path.to_string(),
        multi_instance,
        has_index_placeholder,
        objects,
        parameters: Vec::new(),
    }
}

/// Second pass: attach annotated parameters to an already-composed tree.
///
/// Runs only after `compose_object` has finalized every object path in the
/// whole tree, so a parameter's full path can never observe an unset
/// ancestor path. The built and raw trees walk in lock-step; `compose_object`
/// preserves child order, so the zip pairs each node with its source.
pub fn attach_parameters(built: &mut ModelObject, raw: &RawObject) {
    built.parameters = raw
        .parameters
        .iter()
        .map(|p| annotate_parameter(p, &built.path))
        .collect();

    for (child_built, child_raw) in built.objects.iter_mut().zip(&raw.objects) {
        attach_parameters(child_built, child_raw);
    }
}

/// Annotate a single parameter against its owning object's path.
pub fn annotate_parameter(raw: &RawParameter, parent_path: &str) -> ModelParameter {
    ModelParameter {
        name: normalize_name(&raw.name),
        description: raw.description.clone(),
        access: raw.access.clone(),
        param_type: type_resolver::resolve(raw.syntax.as_ref()),
        full_path: format!("{parent_path}{}", raw.name),
        parent_path: parent_path.to_string(),
        constraints: type_resolver::constraints(raw.syntax.as_ref()),
    }
}

/// An object is multi-instance iff its maximum cardinality is `unbounded`,
/// or is declared as anything other than exactly `"1"`, or its name carries
/// the index placeholder. Each signal alone is sufficient.
fn is_multi_instance(max_entries: Option<&str>, has_index_placeholder: bool) -> bool {
    match max_entries {
        Some("unbounded") => true,
        Some(value) => value != "1" || has_index_placeholder,
        None => has_index_placeholder,
    }
}
