pub mod emitters;
mod generator;
mod type_mapper;

pub use generator::{CHeaderConfig, CHeaderError, CHeaderGenerator};
pub use type_mapper::param_type_to_c;
