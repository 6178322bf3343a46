//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use scaffold_core::ScaffoldConfig;

pub mod bootstrap;
pub mod enhance;
pub mod mcp;

/// Spring Boot scaffolding: projects, feature modules and test skeletons
#[derive(Parser)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Configuration file (defaults to <project>/scaffold.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new Spring Boot project skeleton
    Bootstrap(bootstrap::BootstrapArgs),

    /// Generate entity, DTO, mapper, repository, service and controller for an entity
    Enhance(enhance::EnhanceArgs),

    /// Generate a JUnit 5 test skeleton for a Java class
    GenTests(gen_tests::GenTestsArgs),

    /// MCP server commands
    #[command(subcommand)]
    Mcp(mcp::McpCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        let config = load_config(self.config.as_deref(), &project_dir)?;

        match self.command {
            Commands::Bootstrap(args) => bootstrap::execute(args, &project_dir, &config),
            Commands::Enhance(args) => enhance::execute(args, &project_dir, &config),
            Commands::GenTests(args) => gen_tests::execute(args, &project_dir, &config),
            Commands::Mcp(cmd) => mcp::execute(cmd, &project_dir, config).await,
        }
    }
}

fn load_config(explicit: Option<&Path>, project_dir: &Path) -> Result<ScaffoldConfig> {
    let config = match explicit {
        Some(path) => ScaffoldConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScaffoldConfig::discover(project_dir)?,
    };
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
