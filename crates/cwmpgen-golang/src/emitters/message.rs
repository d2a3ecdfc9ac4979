use minijinja::{Environment, context};

use cwmpgen_core::ir::{DeviceModel, ModelObject};

use super::summary;
use crate::GolangError;
use crate::type_mapper::param_type_to_go;

/// Emit one message file: the flattened structs of a top-level object's
/// subtree, each with constructor, accessors, and JSON boilerplate.
pub fn emit_message(
    model: &DeviceModel,
    top: &ModelObject,
    package: &str,
) -> Result<String, GolangError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "message.go.j2",
        include_str!("../../templates/message.go.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("message.go.j2").unwrap();

    let mut structs = Vec::new();
    collect_structs(top, &mut structs);

    Ok(tmpl.render(context! {
        package => package,
        model_name => model.name.original.clone(),
        structs => structs,
    })?)
}

fn collect_structs(obj: &ModelObject, out: &mut Vec<minijinja::Value>) {
    out.push(object_to_ctx(obj));
    for child in &obj.objects {
        collect_structs(child, out);
    }
}

fn object_to_ctx(obj: &ModelObject) -> minijinja::Value {
    let fields: Vec<minijinja::Value> = obj
        .parameters
        .iter()
        .map(|p| {
            context! {
                go_name => p.name.pascal_case.clone(),
                original => p.name.original.clone(),
                go_type => param_type_to_go(&p.param_type),
            }
        })
        .collect();

    context! {
        go_name => obj.name.pascal_case.clone(),
        name => obj.base_name.clone(),
        path => obj.path.clone(),
        description => summary(&obj.description),
        multi_instance => obj.multi_instance,
        fields => fields,
    }
}
