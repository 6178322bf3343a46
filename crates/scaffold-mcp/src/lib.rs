//! Scaffold MCP Server
//!
//! Model Context Protocol server exposing project bootstrap, feature module
//! generation and test skeleton generation as tools.

pub mod server;
pub mod tools;

use scaffold_core::ScaffoldConfig;
use std::path::PathBuf;

pub use server::ServerContext;

/// Run the MCP server over stdio. Tool calls resolve relative paths against
/// `workspace_root`.
pub async fn run_stdio_server(workspace_root: PathBuf, config: ScaffoldConfig) -> anyhow::Result<()> {
    server::run_stdio(ServerContext::new(workspace_root, config)).await
}
