use minijinja::{Environment, context};

use cwmpgen_core::ir::{DeviceModel, ModelObject};
use cwmpgen_core::transform::flat_upper;

use crate::CHeaderError;
use crate::type_mapper::param_type_to_c;

/// Escape `*/` sequences that would prematurely close C block comments.
fn escape_comment(value: String) -> String {
    value.replace("*/", "* /")
}

/// Emit the include-guarded header for a model.
pub fn emit_header(model: &DeviceModel) -> Result<String, CHeaderError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_filter("escape_comment", escape_comment);
    env.add_template("model.h.j2", include_str!("../../templates/model.h.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("model.h.j2").unwrap();

    let structs: Vec<_> = model
        .flattened_objects()
        .into_iter()
        .map(object_to_ctx)
        .collect();

    Ok(tmpl.render(context! {
        model_name => model.name.original.clone(),
        model_version => model.version.clone(),
        guard => format!("{}_H", flat_upper(&model.name.original)),
        structs => structs,
    })?)
}

fn object_to_ctx(obj: &ModelObject) -> minijinja::Value {
    let fields: Vec<minijinja::Value> = obj
        .parameters
        .iter()
        .map(|p| {
            context! {
                c_name => p.name.identifier.clone(),
                c_type => param_type_to_c(&p.param_type),
            }
        })
        .collect();

    let suffix = if obj.multi_instance {
        " (multi-instance)"
    } else {
        ""
    };

    context! {
        c_name => obj.name.identifier.clone(),
        comment => format!("{}{}", obj.path, suffix),
        description => summary(&obj.description),
        fields => fields,
    }
}

/// First line of a description, trimmed, for single-line C comments.
fn summary(description: &Option<String>) -> Option<String> {
    description.as_ref().and_then(|d| {
        let line = d.lines().next()?.trim();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    })
}
