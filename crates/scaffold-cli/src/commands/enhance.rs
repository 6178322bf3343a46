//! Feature module generation command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use scaffold_codegen::operations;
use scaffold_core::module::model::EnhanceDomainRequest;
use scaffold_core::ScaffoldConfig;

use crate::output;

#[derive(Args)]
pub struct EnhanceArgs {
    /// Entity name, e.g. Customer
    pub entity: String,

    /// Field as name:Type (repeatable)
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Repository method signature (repeatable, kept in order)
    #[arg(long = "method")]
    pub methods: Vec<String>,

    /// Project root (defaults to the project path)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(':') {
        Some((name, ty)) if !name.trim().is_empty() && !ty.trim().is_empty() => {
            Ok((name.trim().to_string(), ty.trim().to_string()))
        }
        _ => Err(format!("expected name:Type, got '{}'", raw)),
    }
}

pub fn execute(args: EnhanceArgs, project_dir: &Path, config: &ScaffoldConfig) -> Result<()> {
    output::step(&format!(
        "Generating feature module for {} ({} fields, {} repository methods)",
        args.entity.cyan(),
        args.fields.len(),
        args.methods.len()
    ));

    let request = EnhanceDomainRequest {
        entity_name: args.entity,
        fields: args.fields.into_iter().collect::<BTreeMap<_, _>>(),
        repository_methods: args.methods,
        project_root_path: args.root.map(|p| p.display().to_string()),
    };
    let status = operations::enhance_domain(&request, project_dir, config);
    output::report(&status)
}
