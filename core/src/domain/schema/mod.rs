pub mod errors;
pub mod shape;

pub use errors::ValidationError;
pub use shape::{FieldKind, FieldSpec, Shape};
