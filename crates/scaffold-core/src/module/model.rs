//! Feature module models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Canonical description of one feature module to generate.
///
/// Fields are kept sorted by name, so two specifications with the same
/// field set render byte-identical artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpecification {
    pub entity_name: String,
    pub fields: BTreeMap<String, String>,
    pub repository_methods: Vec<String>,
    pub base_package: String,
    pub project_root: PathBuf,
}

impl ModuleSpecification {
    /// Sub-package and directory name of the feature: `Customer` -> `customer`.
    pub fn feature_package_name(&self) -> String {
        self.entity_name.to_lowercase()
    }

    /// Fully-qualified feature package: `com.example.demo.customer`.
    pub fn feature_package(&self) -> String {
        crate::naming::join_package(&self.base_package, &self.feature_package_name())
    }
}

/// Caller-facing arguments of the enhance-domain operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceDomainRequest {
    /// Entity name, e.g. Customer
    pub entity_name: String,
    /// Field map in the form fieldName -> JavaType
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    /// Repository method signatures, e.g. Optional<CustomerEntity> findByEmail(String email)
    #[serde(default)]
    pub repository_methods: Vec<String>,
    /// Project root; defaults to the server's working project
    #[serde(default)]
    pub project_root_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_package() {
        let spec = ModuleSpecification {
            entity_name: "OrderLine".to_string(),
            fields: BTreeMap::new(),
            repository_methods: Vec::new(),
            base_package: "com.acme".to_string(),
            project_root: PathBuf::from("/tmp/p"),
        };
        assert_eq!(spec.feature_package_name(), "orderline");
        assert_eq!(spec.feature_package(), "com.acme.orderline");
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: EnhanceDomainRequest = serde_json::from_str(
            r#"{"entityName":"Customer","fields":{"email":"String"},"repositoryMethods":["findByEmail(String email)"]}"#,
        )
        .unwrap();
        assert_eq!(req.entity_name, "Customer");
        assert_eq!(req.fields.get("email").map(String::as_str), Some("String"));
        assert_eq!(req.repository_methods.len(), 1);
        assert!(req.project_root_path.is_none());
    }
}
