//! The three caller-facing operations.
//!
//! Each one is a boundary: errors never escape, they come back as a status
//! string starting with [`FAILURE_MARKER`](scaffold_core::status::FAILURE_MARKER).

use std::path::{Path, PathBuf};

use scaffold_core::module::build_specification;
use scaffold_core::module::model::EnhanceDomainRequest;
use scaffold_core::project::model::BootstrapRequest;
use scaffold_core::{status, telemetry, ScaffoldConfig, ScaffoldResult};
use scaffold_introspect::{classify, JavaExtractor, SourceExtractor};

use crate::bootstrap::{BootstrapOutcome, ProjectBootstrapper};
use crate::namespace::resolve_base_package;
use crate::renderer::ArtifactRenderer;
use crate::spec_resolver::resolve_project_spec;
use crate::testgen::TestSynthesizer;
use crate::writer::{write_artifacts, FeatureModuleWriter, WriteMode};

/// Create a project skeleton below `workspace_root`.
pub fn bootstrap_project(
    workspace_root: &Path,
    request: &BootstrapRequest,
    config: &ScaffoldConfig,
) -> String {
    telemetry::timed("bootstrap_project", || {
        match try_bootstrap(workspace_root, request, config) {
            Ok(BootstrapOutcome::Created { name, path, .. }) => status::project_bootstrapped(&name, &path),
            Ok(BootstrapOutcome::AlreadyExists(path)) => status::project_exists(&path),
            Err(e) => {
                tracing::error!(project = %request.project_name, error = %e, "bootstrap failed");
                status::failure("bootstrap project", e)
            }
        }
    })
}

fn try_bootstrap(
    workspace_root: &Path,
    request: &BootstrapRequest,
    config: &ScaffoldConfig,
) -> ScaffoldResult<BootstrapOutcome> {
    let spec = resolve_project_spec(request, workspace_root)?;
    ProjectBootstrapper::new()?.bootstrap(workspace_root, &spec, config)
}

/// Generate and write the six artifacts of a feature module.
///
/// The project root is `request.project_root_path` when given, `default_root`
/// otherwise.
pub fn enhance_domain(
    request: &EnhanceDomainRequest,
    default_root: &Path,
    config: &ScaffoldConfig,
) -> String {
    telemetry::timed("enhance_domain", || match try_enhance(request, default_root, config) {
        Ok(status) => status,
        Err(e) => {
            tracing::error!(entity = %request.entity_name, error = %e, "enhance domain failed");
            status::failure("enhance domain", e)
        }
    })
}

fn try_enhance(
    request: &EnhanceDomainRequest,
    default_root: &Path,
    config: &ScaffoldConfig,
) -> ScaffoldResult<String> {
    let project_root = request
        .project_root_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| default_root.join(p))
        .unwrap_or_else(|| default_root.to_path_buf());

    let base_package = resolve_base_package(&project_root, config)?;
    let spec = build_specification(
        &request.entity_name,
        &request.fields,
        &request.repository_methods,
        &base_package,
        &project_root,
    )?;

    let artifacts = ArtifactRenderer::new()?.render(&spec)?;
    let report = FeatureModuleWriter::new(WriteMode::from_config(config)).write(&spec, &artifacts, config)?;

    Ok(status::domain_enhanced(
        &spec.entity_name,
        &spec.feature_package(),
        &report.feature_dir,
    ))
}

/// Synthesize a test skeleton for `class_name` and write it below `output_root`.
pub fn generate_tests(
    class_name: &str,
    source_code: &str,
    output_root: &Path,
    config: &ScaffoldConfig,
) -> String {
    let extractor = JavaExtractor::new(config.fallback_package.clone());
    generate_tests_with(&extractor, class_name, source_code, output_root, config)
}

/// [`generate_tests`] with a caller-chosen source extractor.
pub fn generate_tests_with(
    extractor: &dyn SourceExtractor,
    class_name: &str,
    source_code: &str,
    output_root: &Path,
    config: &ScaffoldConfig,
) -> String {
    telemetry::timed("generate_tests", || {
        match try_generate(extractor, class_name, source_code, output_root, config) {
            Ok((path, text)) => status::tests_generated(&path, &text),
            Err(e) => {
                tracing::error!(class = %class_name, error = %e, "test generation failed");
                status::failure("generate tests", e)
            }
        }
    })
}

fn try_generate(
    extractor: &dyn SourceExtractor,
    class_name: &str,
    source_code: &str,
    output_root: &Path,
    config: &ScaffoldConfig,
) -> ScaffoldResult<(PathBuf, String)> {
    let model = extractor.extract(source_code, class_name.trim())?;
    let role = classify(&model);
    tracing::debug!(class = %model.class_name, ?role, "classified source");

    let synthesizer = TestSynthesizer::new()?;
    let text = synthesizer.synthesize(&model, role)?;
    let artifact = synthesizer.artifact(&model, text.clone(), config);

    let written = write_artifacts(output_root, std::slice::from_ref(&artifact), WriteMode::from_config(config))?;
    let path = written
        .into_iter()
        .next()
        .unwrap_or_else(|| output_root.join(&artifact.relative_path));

    Ok((path, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_core::source::SourceModel;
    use scaffold_core::ScaffoldError;
    use std::collections::BTreeMap;
    use std::fs;

    #[test]
    fn test_enhance_without_anchor_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let request = EnhanceDomainRequest {
            entity_name: "Customer".to_string(),
            ..Default::default()
        };
        let status = enhance_domain(&request, dir.path(), &ScaffoldConfig::default());
        assert!(status.starts_with("Failed to enhance domain: "), "{}", status);
    }

    #[test]
    fn test_enhance_uses_explicit_root() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("shop");
        fs::create_dir_all(project.join("src/main/java/org/shop")).unwrap();
        fs::write(project.join("src/main/java/org/shop/ShopApplication.java"), "class A {}").unwrap();

        let request = EnhanceDomainRequest {
            entity_name: "Order".to_string(),
            fields: BTreeMap::from([("total".to_string(), "java.math.BigDecimal".to_string())]),
            repository_methods: Vec::new(),
            project_root_path: Some(project.display().to_string()),
        };
        let status = enhance_domain(&request, Path::new("/nonexistent"), &ScaffoldConfig::default());

        assert!(status.starts_with("Enhanced domain for Order in package org.shop.order at "), "{}", status);
        assert!(project.join("src/main/java/org/shop/order/OrderEntity.java").is_file());
    }

    #[test]
    fn test_enhance_rejects_bad_field_type() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/main/java/com/x")).unwrap();
        fs::write(dir.path().join("src/main/java/com/x/Application.java"), "class A {}").unwrap();

        let request = EnhanceDomainRequest {
            entity_name: "Customer".to_string(),
            fields: BTreeMap::from([("email".to_string(), "String; int x".to_string())]),
            ..Default::default()
        };
        let status = enhance_domain(&request, dir.path(), &ScaffoldConfig::default());
        assert!(status.starts_with("Failed to enhance domain: "));
        assert!(!dir.path().join("src/main/java/com/x/customer").exists());
    }

    #[test]
    fn test_generate_tests_for_unknown_class() {
        let dir = tempfile::tempdir().unwrap();
        let status = generate_tests(
            "Missing",
            "package a; public class Present {}",
            dir.path(),
            &ScaffoldConfig::default(),
        );
        assert_eq!(
            status,
            "Failed to generate tests: Class not found in provided source code: Missing"
        );
        assert!(!dir.path().join("generated-tests").exists());
    }

    struct FixedExtractor;

    impl SourceExtractor for FixedExtractor {
        fn extract(&self, _source: &str, class_name: &str) -> ScaffoldResult<SourceModel> {
            if class_name != "Ping" {
                return Err(ScaffoldError::ClassNotFound(class_name.to_string()));
            }
            Ok(SourceModel {
                package_name: "io.ping".to_string(),
                class_name: class_name.to_string(),
                markers: ["RestController".to_string()].into_iter().collect(),
                fields: Vec::new(),
                methods: Vec::new(),
            })
        }
    }

    #[test]
    fn test_generate_tests_with_custom_extractor() {
        let dir = tempfile::tempdir().unwrap();
        let status = generate_tests_with(&FixedExtractor, "Ping", "", dir.path(), &ScaffoldConfig::default());

        let path = dir.path().join("generated-tests/PingTest.java");
        assert!(status.starts_with(&format!("Generated test at {}\n\n", path.display())));
        assert!(status.contains("get(\"/api/pings\")"));
        assert!(path.is_file());
    }

    #[test]
    fn test_bootstrap_reports_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let request = BootstrapRequest {
            project_name: "inventory".to_string(),
            base_package: "com.acme.inventory".to_string(),
            ..Default::default()
        };
        let status = bootstrap_project(dir.path(), &request, &ScaffoldConfig::default());
        let expected = std::path::absolute(dir.path().join("inventory")).unwrap();
        assert_eq!(
            status,
            format!("Project inventory bootstrapped successfully at {}", expected.display())
        );
    }

    #[test]
    fn test_bootstrap_invalid_package_fails() {
        let dir = tempfile::tempdir().unwrap();
        let request = BootstrapRequest {
            project_name: "inventory".to_string(),
            base_package: "com.class.inventory".to_string(),
            ..Default::default()
        };
        let status = bootstrap_project(dir.path(), &request, &ScaffoldConfig::default());
        assert!(status.starts_with("Failed to bootstrap project: "));
        assert!(!dir.path().join("inventory").exists());
    }

    #[test]
    fn test_bootstrap_without_base_package_fails() {
        let dir = tempfile::tempdir().unwrap();
        let request = BootstrapRequest {
            project_name: "inventory".to_string(),
            base_package: "  ".to_string(),
            ..Default::default()
        };
        let status = bootstrap_project(dir.path(), &request, &ScaffoldConfig::default());
        assert_eq!(status, "Failed to bootstrap project: Validation error: base package must not be empty");
        assert!(!dir.path().join("inventory").exists());
    }
}
