pub mod emitters;
mod generator;
mod type_mapper;

pub use generator::{GolangConfig, GolangError, GolangGenerator};
pub use type_mapper::param_type_to_go;
