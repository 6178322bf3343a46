//! MCP server commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use std::path::Path;

use scaffold_core::ScaffoldConfig;

#[derive(Subcommand)]
pub enum McpCommands {
    /// Run MCP server over stdio
    Stdio,

    /// Show MCP server status and available tools
    Status,
}

pub async fn execute(cmd: McpCommands, project_dir: &Path, config: ScaffoldConfig) -> Result<()> {
    match cmd {
        McpCommands::Stdio => {
            eprintln!(
                "  {} {} {}",
                "●".green().bold(),
                "Scaffold MCP".cyan().bold(),
                "server running (stdio)".bold()
            );
            eprintln!("  {} {} tools", "▸".dimmed(), scaffold_mcp::tools::definitions().len());
            eprintln!("  {} workspace {}", "▸".dimmed(), project_dir.display());
            eprintln!("  {} Ctrl+C to stop", "▸".dimmed());
            eprintln!();

            scaffold_mcp::run_stdio_server(project_dir.to_path_buf(), config).await?;
        }

        McpCommands::Status => {
            print_mcp_status(project_dir, &config);
        }
    }

    Ok(())
}

fn print_mcp_status(project_dir: &Path, config: &ScaffoldConfig) {
    let tools = scaffold_mcp::tools::definitions();

    println!();
    println!("{} Scaffold MCP Server Status", "●".green().bold());
    println!();
    println!("  {} {} tools", "▸".dimmed(), tools.len().to_string().cyan().bold());
    println!("  {} workspace {}", "▸".dimmed(), project_dir.display());
    println!();

    println!("{}", "  Tools".bold().underline());
    println!();
    for tool in &tools {
        println!("    {} {}", tool.name.cyan(), tool.description.dimmed());
    }
    println!();

    println!("{}", "  Configuration".bold().underline());
    println!();
    println!("    {} {}", "source_root".yellow(), config.source_root);
    println!("    {} {}", "resources_root".yellow(), config.resources_root);
    println!("    {} {}", "anchor_suffix".yellow(), config.anchor_suffix);
    println!("    {} {}", "fallback_package".yellow(), config.fallback_package);
    println!("    {} {}", "generated_tests_dir".yellow(), config.generated_tests_dir);
    println!("    {} {}", "atomic_writes".yellow(), config.atomic_writes);
    println!();

    println!("{}", "  MCP client entry".bold().underline());
    println!();
    println!("    {{");
    println!("      \"command\": \"scaffold\",");
    println!("      \"args\": [\"--project\", \"{}\", \"mcp\", \"stdio\"]", project_dir.display());
    println!("    }}");
    println!();
}
