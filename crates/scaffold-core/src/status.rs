//! Human-readable status strings returned by the public operations.
//!
//! Callers only ever see these strings. Failures share the [`FAILURE_MARKER`]
//! prefix so they can be told apart from successes without structured errors.

use std::fmt::Display;
use std::path::Path;

pub const FAILURE_MARKER: &str = "Failed to";

/// `Failed to {action}: {error}`.
pub fn failure(action: &str, error: impl Display) -> String {
    format!("{} {}: {}", FAILURE_MARKER, action, error)
}

pub fn is_failure(status: &str) -> bool {
    status.starts_with(FAILURE_MARKER)
}

pub fn project_exists(path: &Path) -> String {
    format!("Project directory already exists: {}", path.display())
}

pub fn project_bootstrapped(name: &str, path: &Path) -> String {
    format!("Project {} bootstrapped successfully at {}", name, path.display())
}

pub fn domain_enhanced(entity: &str, package: &str, dir: &Path) -> String {
    format!(
        "Enhanced domain for {} in package {} at {}",
        entity,
        package,
        dir.display()
    )
}

pub fn tests_generated(path: &Path, text: &str) -> String {
    format!("Generated test at {}\n\n{}", path.display(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_marker() {
        let status = failure("enhance domain", "boom");
        assert_eq!(status, "Failed to enhance domain: boom");
        assert!(is_failure(&status));
        assert!(!is_failure(&project_exists(Path::new("/tmp/x"))));
    }
}
