//! Conf command implementation

use anyhow::Result;
use autodoc::config::Config;
use autodoc::templates::{render_conf, write_conf, ConfValues};
use autodoc::theme;
use colored::*;
use std::path::Path;

/// Print `conf.py`, or write it to `output`
pub fn generate_conf(config: &Config, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_conf(path, &ConfValues::from_config(config))?;
            println!("{} Wrote {}", theme::success_symbol().green().bold(), path.display());
        }
        None => print!("{}", conf_text(config)),
    }

    Ok(())
}

fn conf_text(config: &Config) -> String {
    render_conf(&ConfValues::from_config(config))
}
