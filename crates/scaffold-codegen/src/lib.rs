//! # Scaffold Codegen
//!
//! Generates Java sources for Spring Boot projects.
//!
//! Produces project skeletons, package-by-feature modules (entity, DTO,
//! MapStruct mapper, JPA repository, service, controller) and JUnit 5 test
//! skeletons for existing classes. [`operations`] exposes the three
//! caller-facing entry points, each returning a status string.

pub mod bootstrap;
pub mod namespace;
pub mod operations;
pub mod renderer;
pub mod spec_resolver;
pub mod testgen;
pub mod writer;

mod templates;

pub use bootstrap::{BootstrapOutcome, ProjectBootstrapper};
pub use namespace::resolve_base_package;
pub use operations::{bootstrap_project, enhance_domain, generate_tests, generate_tests_with};
pub use renderer::ArtifactRenderer;
pub use spec_resolver::resolve_project_spec;
pub use testgen::TestSynthesizer;
pub use writer::{FeatureModuleWriter, WriteMode, WriteReport};
