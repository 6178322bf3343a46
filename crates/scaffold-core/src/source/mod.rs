//! Source introspection models.

pub mod model;

pub use model::{FieldInfo, MethodInfo, SourceModel, Visibility};
