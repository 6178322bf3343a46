//! Project bootstrap models.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Description of a project skeleton.
///
/// Either parsed verbatim from a JSON specification document or synthesized
/// from the direct arguments of a bootstrap request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpecification {
    pub project_name: String,
    pub base_package: String,
    #[serde(default)]
    pub api_requirements: Option<String>,
    #[serde(default)]
    pub api_gold_standards: Option<String>,
    /// Sub-package name (relative to the base package) -> placeholder class names.
    /// A `null` class list is read as an empty one.
    #[serde(default, deserialize_with = "nullable_class_lists")]
    pub package_structure: Option<BTreeMap<String, Vec<String>>>,
}

fn nullable_class_lists<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, Vec<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<Vec<String>>>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|structure| {
        structure
            .into_iter()
            .map(|(package, classes)| (package, classes.unwrap_or_default()))
            .collect()
    }))
}

/// Caller-facing arguments of the bootstrap operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapRequest {
    /// Project name; also the directory created under the workspace root
    pub project_name: String,
    /// Base Java package, e.g. com.acme.app
    pub base_package: String,
    /// Free-text API requirements, written to API_REQUIREMENTS.md
    #[serde(default)]
    pub api_requirements: Option<String>,
    /// Path to a JSON project specification overriding the other arguments
    #[serde(default)]
    pub spec_file_path: Option<String>,
}
