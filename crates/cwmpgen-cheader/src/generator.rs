use cwmpgen_core::ir::DeviceModel;
use cwmpgen_core::{CodeGenerator, GeneratedFile};
use thiserror::Error;

use crate::emitters;

#[derive(Debug, Error)]
pub enum CHeaderError {
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

/// Configuration for the C header generator. No knobs yet.
#[derive(Debug, Clone, Default)]
pub struct CHeaderConfig {}

/// C header generator.
///
/// Emits one include-guarded header per model with a flat `typedef struct`
/// per object at every nesting depth.
pub struct CHeaderGenerator;

impl CodeGenerator for CHeaderGenerator {
    type Config = CHeaderConfig;
    type Error = CHeaderError;

    fn generate(
        &self,
        model: &DeviceModel,
        _config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error> {
        log::debug!("generating C header for model '{}'", model.name.original);

        Ok(vec![GeneratedFile {
            path: format!("{}.h", model.name.identifier),
            content: emitters::header::emit_header(model)?,
        }])
    }
}
