//! Project specifications.

pub mod model;

use std::collections::BTreeMap;

use model::{BootstrapRequest, ProjectSpecification};

/// Sub-packages created when a request carries no explicit structure.
pub const DEFAULT_SUB_PACKAGES: [&str; 3] = ["controller", "service", "repository"];

/// Directories every project gets under its base package, whatever the structure.
pub const STANDARD_SUB_PACKAGES: [&str; 3] = ["domain", "mapper", "dto"];

/// Default layout: the three conventional sub-packages, no placeholder classes.
pub fn default_package_structure() -> BTreeMap<String, Vec<String>> {
    DEFAULT_SUB_PACKAGES
        .iter()
        .map(|name| (name.to_string(), Vec::new()))
        .collect()
}

impl ProjectSpecification {
    /// Synthesize a specification from the direct arguments of a request.
    pub fn from_request(request: &BootstrapRequest) -> Self {
        Self {
            project_name: request.project_name.clone(),
            base_package: request.base_package.clone(),
            api_requirements: request.api_requirements.clone(),
            api_gold_standards: None,
            package_structure: Some(default_package_structure()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_uses_default_structure() {
        let request = BootstrapRequest {
            project_name: "billing".to_string(),
            base_package: "com.acme.billing".to_string(),
            api_requirements: Some("Expose invoices".to_string()),
            spec_file_path: None,
        };
        let spec = ProjectSpecification::from_request(&request);
        let structure = spec.package_structure.unwrap();
        assert_eq!(structure.len(), 3);
        assert!(structure.values().all(Vec::is_empty));
        assert!(structure.contains_key("controller"));
        assert_eq!(spec.api_gold_standards, None);
    }

    #[test]
    fn test_spec_document_parses_camel_case() {
        let json = r#"{
            "projectName": "orders",
            "basePackage": "com.acme.orders",
            "apiGoldStandards": "Use RFC 7807",
            "packageStructure": { "web": ["OrderController"] }
        }"#;
        let spec: ProjectSpecification = serde_json::from_str(json).unwrap();
        assert_eq!(spec.project_name, "orders");
        assert_eq!(spec.api_requirements, None);
        assert_eq!(spec.api_gold_standards.as_deref(), Some("Use RFC 7807"));
        assert_eq!(
            spec.package_structure.unwrap()["web"],
            vec!["OrderController".to_string()]
        );
    }

    #[test]
    fn test_spec_document_tolerates_null_class_list() {
        let json = r#"{
            "projectName": "orders",
            "basePackage": "com.acme.orders",
            "packageStructure": { "web": null, "api": ["OrderApi"] }
        }"#;
        let spec: ProjectSpecification = serde_json::from_str(json).unwrap();
        let structure = spec.package_structure.unwrap();
        assert!(structure["web"].is_empty());
        assert_eq!(structure["api"], vec!["OrderApi".to_string()]);
    }

    #[test]
    fn test_spec_document_without_structure() {
        let spec: ProjectSpecification =
            serde_json::from_str(r#"{"projectName":"o","basePackage":"com.o"}"#).unwrap();
        assert_eq!(spec.package_structure, None);
    }
}
