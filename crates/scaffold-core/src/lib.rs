//! Scaffold Core Library
//!
//! Data model, error taxonomy, configuration and naming rules shared by the
//! Spring feature-module and test scaffolding engine.

pub mod artifact;
pub mod config;
pub mod error;
pub mod module;
pub mod naming;
pub mod project;
pub mod source;
pub mod status;
pub mod telemetry;

pub use artifact::{ArtifactKind, GeneratedArtifact};
pub use config::ScaffoldConfig;
pub use error::{ScaffoldError, ScaffoldResult};
