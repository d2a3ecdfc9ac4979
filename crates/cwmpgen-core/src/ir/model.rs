use super::types::{Constraints, NormalizedName, ParamType};

/// The normalized, path- and type-annotated device model.
///
/// Built once per generation run by [`crate::transform::normalize`], read-only
/// afterwards, consumed by any number of backends in the same process.
#[derive(Debug, Clone)]
pub struct DeviceModel {
    pub name: NormalizedName,
    pub version: String,
    pub description: Option<String>,
    pub objects: Vec<ModelObject>,
    /// Parameters declared on the model root, outside any object.
    pub parameters: Vec<ModelParameter>,
}

impl DeviceModel {
    /// All objects of the tree in depth-first pre-order.
    ///
    /// Backends emit flat declarations, so object-to-declaration mapping is a
    /// plain map over this flattened sequence regardless of nesting depth.
    pub fn flattened_objects(&self) -> Vec<&ModelObject> {
        let mut out = Vec::new();
        for obj in &self.objects {
            collect_objects(obj, &mut out);
        }
        out
    }
}

fn collect_objects<'a>(obj: &'a ModelObject, out: &mut Vec<&'a ModelObject>) {
    out.push(obj);
    for child in &obj.objects {
        collect_objects(child, out);
    }
}

/// A canonical object with fully resolved paths and multiplicity flags.
#[derive(Debug, Clone)]
pub struct ModelObject {
    pub name: NormalizedName,
    /// Name with exactly one trailing `.` separator stripped, if present.
    pub base_name: String,
    pub description: Option<String>,
    pub access: String,
    /// Fully qualified dotted path; equals `parent_path + name.original`.
    pub path: String,
    /// Owning object's path, empty for root objects.
    pub parent_path: String,
    pub multi_instance: bool,
    pub has_index_placeholder: bool,
    pub objects: Vec<ModelObject>,
    pub parameters: Vec<ModelParameter>,
}

/// A canonical parameter with its resolved type tag.
#[derive(Debug, Clone)]
pub struct ModelParameter {
    pub name: NormalizedName,
    pub description: Option<String>,
    pub access: String,
    pub param_type: ParamType,
    /// Equals `parent_path + name.original`.
    pub full_path: String,
    /// Owning object's path, empty for model-root parameters.
    pub parent_path: String,
    pub constraints: Constraints,
}
