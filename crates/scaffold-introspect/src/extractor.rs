//! Source extraction capability.

use scaffold_core::source::SourceModel;
use scaffold_core::ScaffoldResult;

/// Parses source text into the structural model of one named top-level class.
///
/// Implementations fail with `Parse` when the text is not valid source and
/// with `ClassNotFound` when no top-level class carries `class_name`.
pub trait SourceExtractor {
    fn extract(&self, source: &str, class_name: &str) -> ScaffoldResult<SourceModel>;
}
