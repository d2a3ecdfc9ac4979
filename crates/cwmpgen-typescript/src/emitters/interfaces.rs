use minijinja::{Environment, context};

use cwmpgen_core::ir::{DeviceModel, ModelObject};

use crate::TypeScriptError;
use crate::type_mapper::param_type_to_ts;

/// Escape `*/` sequences that would prematurely close JSDoc comment blocks.
fn escape_jsdoc(value: String) -> String {
    value.replace("*/", "*\\/")
}

/// Emit the model file: one flat `export interface` per object.
pub fn emit_interfaces(model: &DeviceModel, no_jsdoc: bool) -> Result<String, TypeScriptError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_filter("escape_jsdoc", escape_jsdoc);
    env.add_template("model.ts.j2", include_str!("../../templates/model.ts.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("model.ts.j2").unwrap();

    let interfaces: Vec<_> = model
        .flattened_objects()
        .into_iter()
        .map(object_to_ctx)
        .collect();

    Ok(tmpl.render(context! {
        model_name => model.name.original.clone(),
        model_version => model.version.clone(),
        model_description => model.description.clone(),
        interfaces => interfaces,
        no_jsdoc => no_jsdoc,
    })?)
}

fn object_to_ctx(obj: &ModelObject) -> minijinja::Value {
    let properties: Vec<minijinja::Value> = obj
        .parameters
        .iter()
        .map(|p| {
            context! {
                name => p.name.identifier.clone(),
                type => param_type_to_ts(&p.param_type),
                description => p.description.clone(),
            }
        })
        .collect();

    let suffix = if obj.multi_instance {
        " (multi-instance)"
    } else {
        ""
    };

    context! {
        name => obj.name.identifier.clone(),
        path_line => format!("Path: `{}`{}", obj.path, suffix),
        description => obj.description.clone(),
        properties => properties,
    }
}
