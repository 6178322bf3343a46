//! Class role classification.

use scaffold_core::source::SourceModel;
use serde::Serialize;

/// Annotations that make a class HTTP-facing.
pub const CONTROLLER_MARKERS: [&str; 2] = ["RestController", "Controller"];

/// Which test skeleton a class gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A web controller: gets a single MockMvc smoke test.
    HttpFacing,
    /// Anything else: gets Mockito unit tests per public method.
    Plain,
}

/// Classify a class by its markers. Field and method content is irrelevant.
pub fn classify(model: &SourceModel) -> Role {
    if CONTROLLER_MARKERS.iter().any(|m| model.has_marker(m)) {
        Role::HttpFacing
    } else {
        Role::Plain
    }
}
