//! Scan command implementation

use crate::cli::OutputFormat;
use anyhow::Result;
use autodoc::config::Config;
use autodoc::scan::{find_scripts, ScriptFile};
use autodoc::theme;
use colored::*;
use std::path::{Path, PathBuf};

/// List documentable scripts under `dir`, or the project root
pub fn scan_scripts(config: &Config, dir: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let root = dir.unwrap_or_else(|| config.project_root.clone());
    let scripts = find_scripts(&root, &config.scan_options()?)?;

    println!("{}", render_scripts(&root, &scripts, format)?);
    Ok(())
}

fn render_scripts(root: &Path, scripts: &[ScriptFile], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(scripts)?);
    }

    let mut out = format!("\n{}\n\n", format!("Scripts under {}", root.display()).bold());

    if scripts.is_empty() {
        out.push_str(&format!("  {} No documentable scripts found\n", theme::info_symbol().cyan()));
        return Ok(out);
    }

    let root = std::path::absolute(root)?;
    for script in scripts {
        let shown = script.path.strip_prefix(&root).unwrap_or(&script.path);
        let badge = theme::type_badge(script.script_type);
        out.push_str(&format!("  {:<6} {}\n", badge, shown.display()));
    }

    out.push_str(&format!(
        "\n{} {} script(s) found\n",
        theme::success_symbol().green().bold(),
        scripts.len()
    ));
    Ok(out)
}
