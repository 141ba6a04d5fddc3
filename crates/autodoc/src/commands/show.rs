//! Show command implementation

use anyhow::{Context, Result};
use autodoc::config::Config;
use autodoc::detect::detect;
use autodoc::error::DocError;
use autodoc::rst::render_script_page;
use autodoc::textio::{read_lines, FileParts};
use std::path::Path;

/// Print the page `document` would write for `path`
pub fn show_page(config: &Config, path: &Path) -> Result<()> {
    print!("{}", page_for(config, path)?);
    Ok(())
}

fn page_for(config: &Config, path: &Path) -> Result<String> {
    let script_type = detect(path, config.encoding)
        .with_context(|| format!("Failed to inspect {}", path.display()))?
        .ok_or_else(|| DocError::UnknownScriptType(path.to_path_buf()))?;

    let lines = read_lines(path, config.encoding)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = FileParts::new(path)?.file_name();

    Ok(render_script_page(&name, script_type, &lines, &config.page_options()))
}
