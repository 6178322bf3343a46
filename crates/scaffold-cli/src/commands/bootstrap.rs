//! Project bootstrap command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use scaffold_codegen::operations;
use scaffold_core::project::model::BootstrapRequest;
use scaffold_core::ScaffoldConfig;

use crate::output;

#[derive(Args)]
pub struct BootstrapArgs {
    /// Project name, created as a directory under the project path
    pub name: String,

    /// Base Java package, e.g. com.acme.app
    #[arg(long)]
    pub package: String,

    /// API requirements text, written to API_REQUIREMENTS.md
    #[arg(long)]
    pub requirements: Option<String>,

    /// JSON project specification; overrides the other arguments
    #[arg(long)]
    pub spec: Option<PathBuf>,
}

pub fn execute(args: BootstrapArgs, project_dir: &Path, config: &ScaffoldConfig) -> Result<()> {
    output::step(&format!("Bootstrapping project: {}", args.name.cyan()));

    let request = BootstrapRequest {
        project_name: args.name,
        base_package: args.package,
        api_requirements: args.requirements,
        spec_file_path: args.spec.map(|p| p.display().to_string()),
    };
    let status = operations::bootstrap_project(project_dir, &request, config);
    output::report(&status)
}
