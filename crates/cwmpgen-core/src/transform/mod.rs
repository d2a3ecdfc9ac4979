pub mod name_normalizer;
pub mod path_composer;
pub mod type_resolver;

pub use name_normalizer::{flat_lower, flat_upper, normalize_name};

use crate::error::NormalizeError;
use crate::ir::DeviceModel;
use crate::parse::Document;

/// Normalize a parsed document into the canonical device model.
///
/// Only the **first** declared model is normalized; additional models in the
/// same document are ignored. This is a documented selection rule: real-world
/// documents almost always declare exactly one model, and fan-out semantics
/// for multi-model documents have never been defined.
///
/// The raw tree is left untouched; the canonical tree is built fresh so the
/// normalizer is reentrant and the parse result stays reusable.
///
/// Fails only when the document declares zero models. Malformed inner
/// structures never abort normalization: missing syntax degrades through the
/// type resolver's fallback and path composition is total over strings.
pub fn normalize(document: &Document) -> Result<DeviceModel, NormalizeError> {
    let raw = document.models.first().ok_or(NormalizeError::SchemaEmpty)?;

    if document.models.len() > 1 {
        log::warn!(
            "document declares {} models; only '{}' will be generated",
            document.models.len(),
            raw.name
        );
    }

    // Pass 1: compose every object path and multiplicity flag. Parameters
    // wait until all object paths in the tree are final.
    let mut objects: Vec<_> = raw
        .objects
        .iter()
        .map(|obj| path_composer::compose_object(obj, ""))
        .collect();

    // Pass 2: annotate parameters against the finalized object paths.
    for (built, raw_obj) in objects.iter_mut().zip(&raw.objects) {
        path_composer::attach_parameters(built, raw_obj);
    }

    // Pass 3: parameters declared on the model root have no owning object.
    let parameters = raw
        .parameters
        .iter()
        .map(|p| path_composer::annotate_parameter(p, ""))
        .collect();

    let model = DeviceModel {
        name: normalize_name(&raw.name),
        version: raw.version.clone(),
        description: raw.description.clone(),
        objects,
        parameters,
    };

    log::debug!(
        "normalized model '{}' v{}: {} top-level objects, {} root parameters",
        model.name.original,
        model.version,
        model.objects.len(),
        model.parameters.len()
    );

    Ok(model)
}
