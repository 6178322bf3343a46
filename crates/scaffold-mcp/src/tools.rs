//! Tool definitions and dispatch.

use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

use scaffold_codegen::operations;
use scaffold_core::module::model::EnhanceDomainRequest;
use scaffold_core::project::model::BootstrapRequest;
use scaffold_core::ScaffoldConfig;

use crate::server::JsonRpcError;

pub const BOOTSTRAP_PROJECT: &str = "bootstrap_project";
pub const ENHANCE_DOMAIN: &str = "enhance_domain";
pub const GENERATE_TESTS: &str = "generate_tests";

/// Arguments of the `generate_tests` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTestsRequest {
    /// Simple name of the class to test, e.g. CustomerService
    pub class_name: String,
    /// Full Java source text declaring the class
    pub source_code: String,
}

/// Tool definition.
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

fn input_schema<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    let mut value = serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({ "type": "object" }));
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
    }
    value
}

pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: BOOTSTRAP_PROJECT.to_string(),
            description: "Create a Spring Boot project skeleton (Gradle build, package layout, \
                          application class and configuration)"
                .to_string(),
            input_schema: input_schema::<BootstrapRequest>(),
        },
        Tool {
            name: ENHANCE_DOMAIN.to_string(),
            description: "Generate entity, DTO, mapper, repository, service and controller \
                          for one entity in an existing project"
                .to_string(),
            input_schema: input_schema::<EnhanceDomainRequest>(),
        },
        Tool {
            name: GENERATE_TESTS.to_string(),
            description: "Generate a JUnit 5 test skeleton for a Java class from its source"
                .to_string(),
            input_schema: input_schema::<GenerateTestsRequest>(),
        },
    ]
}

/// A validated tool invocation.
#[derive(Debug, Clone)]
pub enum ToolCall {
    BootstrapProject(BootstrapRequest),
    EnhanceDomain(EnhanceDomainRequest),
    GenerateTests(GenerateTestsRequest),
}

fn arguments<T: DeserializeOwned>(tool: &str, args: serde_json::Value) -> Result<T, JsonRpcError> {
    serde_json::from_value(args)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments for {}: {}", tool, e)))
}

impl ToolCall {
    pub fn parse(name: &str, args: serde_json::Value) -> Result<Self, JsonRpcError> {
        match name {
            BOOTSTRAP_PROJECT => Ok(ToolCall::BootstrapProject(arguments(name, args)?)),
            ENHANCE_DOMAIN => Ok(ToolCall::EnhanceDomain(arguments(name, args)?)),
            GENERATE_TESTS => Ok(ToolCall::GenerateTests(arguments(name, args)?)),
            _ => Err(JsonRpcError::method_not_found(format!("Unknown tool: {}", name))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::BootstrapProject(_) => BOOTSTRAP_PROJECT,
            ToolCall::EnhanceDomain(_) => ENHANCE_DOMAIN,
            ToolCall::GenerateTests(_) => GENERATE_TESTS,
        }
    }

    /// Run the operation. Blocking; returns the operation's status string.
    pub fn run(&self, workspace_root: &Path, config: &ScaffoldConfig) -> String {
        match self {
            ToolCall::BootstrapProject(request) => operations::bootstrap_project(workspace_root, request, config),
            ToolCall::EnhanceDomain(request) => operations::enhance_domain(request, workspace_root, config),
            ToolCall::GenerateTests(request) => operations::generate_tests(
                &request.class_name,
                &request.source_code,
                workspace_root,
                config,
            ),
        }
    }
}
