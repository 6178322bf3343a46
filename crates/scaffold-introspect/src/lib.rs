//! # Scaffold Introspect
//!
//! Turns Java source text into a [`SourceModel`](scaffold_core::source::SourceModel)
//! and decides which kind of test skeleton a class needs.
//!
//! The parser sits behind the [`SourceExtractor`] trait; [`JavaExtractor`] is
//! the tree-sitter backed implementation.

pub mod extractor;
pub mod java;
pub mod role;

pub use extractor::SourceExtractor;
pub use java::JavaExtractor;
pub use role::{classify, Role, CONTROLLER_MARKERS};
