pub mod model;
pub mod types;

pub use model::{DeviceModel, ModelObject, ModelParameter};
pub use types::{Constraints, NormalizedName, ParamType};
