//! Project specification resolution.

use std::path::Path;

use scaffold_core::project::model::{BootstrapRequest, ProjectSpecification};
use scaffold_core::{ScaffoldError, ScaffoldResult};

/// Resolve the specification of a bootstrap request.
///
/// An existing specification document (relative paths are taken from
/// `workspace_root`) is used verbatim and overrides every direct argument.
/// Without one, the specification is synthesized from the request with the
/// default controller/service/repository layout.
pub fn resolve_project_spec(
    request: &BootstrapRequest,
    workspace_root: &Path,
) -> ScaffoldResult<ProjectSpecification> {
    let spec_path = request
        .spec_file_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    if let Some(spec_path) = spec_path {
        let path = workspace_root.join(spec_path);
        if path.exists() {
            let text = std::fs::read_to_string(&path).map_err(|e| ScaffoldError::fs(&path, e))?;
            let spec: ProjectSpecification = serde_json::from_str(&text)?;
            tracing::info!(path = %path.display(), project = %spec.project_name, "using project specification document");
            return Ok(spec);
        }
        tracing::warn!(path = %path.display(), "specification document not found, using direct arguments");
    }

    Ok(ProjectSpecification::from_request(request))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(spec_file_path: Option<&str>) -> BootstrapRequest {
        BootstrapRequest {
            project_name: "direct".to_string(),
            base_package: "com.direct".to_string(),
            api_requirements: Some("direct requirements".to_string()),
            spec_file_path: spec_file_path.map(str::to_string),
        }
    }

    #[test]
    fn test_document_overrides_direct_arguments() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("spec.json"),
            r#"{"projectName":"from-doc","basePackage":"com.doc","packageStructure":{"api":["Ping"]}}"#,
        )
        .unwrap();

        let spec = resolve_project_spec(&request(Some("spec.json")), dir.path()).unwrap();
        assert_eq!(spec.project_name, "from-doc");
        assert_eq!(spec.base_package, "com.doc");
        // No merging: the document had no requirements, so none are kept.
        assert_eq!(spec.api_requirements, None);
        assert_eq!(spec.package_structure.unwrap().len(), 1);
    }

    #[test]
    fn test_missing_document_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let spec = resolve_project_spec(&request(Some("nope.json")), dir.path()).unwrap();
        assert_eq!(spec.project_name, "direct");
        assert_eq!(spec.package_structure.unwrap().len(), 3);
    }

    #[test]
    fn test_blank_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let spec = resolve_project_spec(&request(Some("   ")), dir.path()).unwrap();
        assert_eq!(spec.base_package, "com.direct");
        assert_eq!(spec.api_requirements.as_deref(), Some("direct requirements"));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("spec.json"), "{ not json").unwrap();
        let err = resolve_project_spec(&request(Some("spec.json")), dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Json(_)));
    }
}
