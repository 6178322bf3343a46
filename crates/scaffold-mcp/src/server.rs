//! MCP Server implementation.
//!
//! Line-delimited JSON-RPC 2.0 over stdio. Requests are handled one at a
//! time in arrival order; tool calls run on the blocking pool.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use scaffold_core::status::is_failure;
use scaffold_core::ScaffoldConfig;

use crate::tools::{self, ToolCall};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request structure.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self { code: -32700, message: message.into() }
    }

    pub fn method_not_found(message: impl Into<String>) -> Self {
        Self { code: -32601, message: message.into() }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self { code: -32602, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { code: -32603, message: message.into() }
    }
}

/// Where tool calls run and how they are configured.
#[derive(Debug, Clone)]
pub struct ServerContext {
    pub workspace_root: PathBuf,
    pub config: ScaffoldConfig,
}

impl ServerContext {
    pub fn new(workspace_root: PathBuf, config: ScaffoldConfig) -> Self {
        Self { workspace_root, config }
    }
}

/// Run the MCP server over stdio.
pub async fn run_stdio(context: ServerContext) -> anyhow::Result<()> {
    let context = Arc::new(context);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    tracing::info!(root = %context.workspace_root.display(), "MCP server listening on stdio");

    while let Some(line) = lines.next_line().await? {
        let Some(response) = handle_line(&context, &line).await else {
            continue;
        };
        let mut text = serde_json::to_string(&response)?;
        text.push('\n');
        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("stdin closed, MCP server stopping");
    Ok(())
}

/// Handle one input line. Blank lines and notifications get no response.
pub async fn handle_line(context: &Arc<ServerContext>, line: &str) -> Option<JsonRpcResponse> {
    if line.trim().is_empty() {
        return None;
    }

    let request: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable request");
            return Some(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(JsonRpcError::parse_error(format!("Parse error: {}", e))),
            });
        }
    };

    if request.id.is_none() && request.method.starts_with("notifications/") {
        tracing::debug!(method = %request.method, "notification");
        return None;
    }

    Some(handle_request(context, request).await)
}

async fn handle_request(context: &Arc<ServerContext>, request: JsonRpcRequest) -> JsonRpcResponse {
    tracing::debug!(method = %request.method, "request");

    let result = match request.method.as_str() {
        "initialize" => handle_initialize(),
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(context, request.params).await,
        _ => Err(JsonRpcError::method_not_found(format!(
            "Method not found: {}",
            request.method
        ))),
    };

    match result {
        Ok(r) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(r),
            error: None,
        },
        Err(e) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    Ok(serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "serverInfo": {
            "name": "scaffold",
            "version": env!("CARGO_PKG_VERSION")
        },
        "capabilities": {
            "tools": {}
        }
    }))
}

fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    Ok(serde_json::json!({ "tools": tools::definitions() }))
}

async fn handle_tool_call(
    context: &Arc<ServerContext>,
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?;

    let name = params["name"]
        .as_str()
        .ok_or_else(|| JsonRpcError::invalid_params("Missing tool name"))?;
    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));

    let call = ToolCall::parse(name, args)?;
    tracing::info!(tool = call.name(), "tool call");

    let context = Arc::clone(context);
    let status = tokio::task::spawn_blocking(move || call.run(&context.workspace_root, &context.config))
        .await
        .map_err(|e| JsonRpcError::internal(format!("Tool execution failed: {}", e)))?;

    Ok(serde_json::json!({
        "content": [{
            "type": "text",
            "text": status
        }],
        "isError": is_failure(&status)
    }))
}
