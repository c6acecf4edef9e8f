//! `shortpath config` commands - inspect solver configuration

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use shortpath_core::config::SolverConfig;
use shortpath_core::error::{Result, ShortpathError};

/// Where the effective configuration came from
fn config_source(ctx: &CommandContext) -> String {
    if let Some(path) = &ctx.cli.config {
        return path.display().to_string();
    }
    match SolverConfig::default_path() {
        Ok(path) if path.exists() => path.display().to_string(),
        _ => "defaults".to_string(),
    }
}

/// Execute `config show`
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let source = config_source(ctx);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "selector": config.selector,
                "strict_node_registration": config.strict_node_registration,
                "registration_policy": config.registration_policy(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("# source: {}", source);
            }
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| ShortpathError::Other(format!("failed to render config: {}", e)))?;
            print!("{}", rendered);
        }
    }
    Ok(())
}

/// Execute `config path`
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = SolverConfig::default_path()?;
    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", path.display()),
    }
    Ok(())
}
