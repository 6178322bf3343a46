//! Scaffold CLI
//!
//! Generates Spring Boot project skeletons, feature modules and test
//! skeletons, directly or as an MCP tool server.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::mcp::McpCommands;
use commands::{Cli, Commands};

/// Initialize tracing on stderr, plus an optional log file.
///
/// In MCP mode stdout carries JSON-RPC, so ANSI is disabled and nothing but
/// the protocol may be written there.
fn init_tracing(log_file: Option<&Path>, mcp_mode: bool, verbose: bool) -> Result<Option<WorkerGuard>> {
    let default_filter = if verbose {
        "scaffold=debug,scaffold_core=debug,scaffold_introspect=debug,scaffold_codegen=debug,scaffold_mcp=debug"
    } else {
        "scaffold=warn,scaffold_codegen=warn,scaffold_mcp=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(!mcp_mode))
        .with(file_layer)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mcp_mode = matches!(&cli.command, Commands::Mcp(McpCommands::Stdio));
    let _guard = init_tracing(cli.log_file.as_deref(), mcp_mode, cli.verbose)?;

    cli.execute().await
}
