//! Base package resolution from the application entry point.
//!
//! The project's root package is wherever `*Application.java` lives under the
//! source root. Directories are visited in file-name order, so with several
//! candidates the result is still deterministic.

use std::path::Path;

use scaffold_core::{ScaffoldConfig, ScaffoldError, ScaffoldResult};
use walkdir::WalkDir;

/// Resolve the base package of the project at `project_root`.
pub fn resolve_base_package(project_root: &Path, config: &ScaffoldConfig) -> ScaffoldResult<String> {
    let source_root = project_root.join(&config.source_root);
    if !source_root.is_dir() {
        return Err(ScaffoldError::NamespaceNotFound(format!(
            "source root {} does not exist",
            source_root.display()
        )));
    }

    let anchor = format!("{}.java", config.anchor_suffix);

    for entry in WalkDir::new(&source_root).sort_by_file_name() {
        let entry = entry.map_err(|e| ScaffoldError::Io(e.into()))?;
        if !entry.file_type().is_file() || !entry.file_name().to_string_lossy().ends_with(&anchor) {
            continue;
        }

        let parent = entry.path().parent().unwrap_or(&source_root);
        let relative = parent
            .strip_prefix(&source_root)
            .map_err(|e| ScaffoldError::NamespaceNotFound(e.to_string()))?;
        let package = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(".");

        tracing::debug!(anchor = %entry.path().display(), package = %package, "resolved base package");
        return Ok(package);
    }

    Err(ScaffoldError::NamespaceNotFound(format!(
        "no *{} found under {}",
        anchor,
        source_root.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "class X {}\n").unwrap();
    }

    #[test]
    fn test_resolves_package_of_application_class() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "src/main/java/com/example/demo/Application.java");
        touch(dir.path(), "src/main/java/com/example/demo/web/Other.java");

        let package = resolve_base_package(dir.path(), &ScaffoldConfig::default()).unwrap();
        assert_eq!(package, "com.example.demo");
    }

    #[test]
    fn test_matches_prefixed_application_names() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "src/main/java/org/shop/ShopApplication.java");

        let package = resolve_base_package(dir.path(), &ScaffoldConfig::default()).unwrap();
        assert_eq!(package, "org.shop");
    }

    #[test]
    fn test_first_anchor_in_name_order_wins() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "src/main/java/zeta/Application.java");
        touch(dir.path(), "src/main/java/alpha/Application.java");

        let package = resolve_base_package(dir.path(), &ScaffoldConfig::default()).unwrap();
        assert_eq!(package, "alpha");
    }

    #[test]
    fn test_anchor_at_source_root_gives_default_package() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "src/main/java/Application.java");

        let package = resolve_base_package(dir.path(), &ScaffoldConfig::default()).unwrap();
        assert_eq!(package, "");
    }

    #[test]
    fn test_no_anchor_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "src/main/java/com/example/Service.java");

        let err = resolve_base_package(dir.path(), &ScaffoldConfig::default()).unwrap_err();
        assert!(matches!(err, ScaffoldError::NamespaceNotFound(_)));
    }

    #[test]
    fn test_missing_source_root_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_base_package(dir.path(), &ScaffoldConfig::default()).unwrap_err();
        assert!(matches!(err, ScaffoldError::NamespaceNotFound(_)));
    }

    #[test]
    fn test_custom_anchor_suffix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "src/main/java/com/example/Application.java");
        touch(dir.path(), "src/main/java/io/tool/Main.java");

        let config = ScaffoldConfig {
            anchor_suffix: "Main".to_string(),
            ..ScaffoldConfig::default()
        };
        assert_eq!(resolve_base_package(dir.path(), &config).unwrap(), "io.tool");
    }
}
