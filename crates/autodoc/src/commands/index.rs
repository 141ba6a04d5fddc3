//! Index command implementation

use anyhow::Result;
use autodoc::config::Config;
use autodoc::templates::{render_index, write_index, ConfValues, IndexOutcome};
use autodoc::theme;
use colored::*;
use std::path::Path;

/// Print `index.rst`, or write it to `output` if that file does not exist yet
pub fn generate_index(config: &Config, output: Option<&Path>, package: Option<String>) -> Result<()> {
    let package = package.unwrap_or_else(|| ConfValues::from_config(config).project);

    match output {
        Some(path) => match write_index(path, &package)? {
            IndexOutcome::Written => {
                println!("{} Wrote {}", theme::success_symbol().green().bold(), path.display());
            }
            IndexOutcome::AlreadyExists => {
                println!(
                    "{} {}: already exists, left unchanged",
                    theme::warning_symbol().yellow(),
                    path.display()
                );
            }
        },
        None => print!("{}", render_index(&package)),
    }

    Ok(())
}
