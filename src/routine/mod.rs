pub mod args;
pub mod model;
pub mod validate;

pub use args::*;
pub use model::*;
pub use validate::UNIT_NORM_TOLERANCE;
