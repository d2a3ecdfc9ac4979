use minijinja::{Environment, context};

use cwmpgen_core::ir::DeviceModel;

use crate::GolangError;

/// Emit `common.go` with the shared message interface and envelope type.
pub fn emit_common(model: &DeviceModel, package: &str) -> Result<String, GolangError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("common.go.j2", include_str!("../../templates/common.go.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("common.go.j2").unwrap();

    Ok(tmpl.render(context! {
        package => package,
        model_name => model.name.original.clone(),
        model_version => model.version.clone(),
    })?)
}
