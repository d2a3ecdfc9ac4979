pub mod emitters;
mod generator;
mod type_mapper;

pub use generator::{TypeScriptConfig, TypeScriptError, TypeScriptGenerator};
pub use type_mapper::param_type_to_ts;
