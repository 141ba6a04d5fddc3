//! Document command implementation

use anyhow::Result;
use autodoc::config::Config;
use autodoc::report::print_warning;
use autodoc::rst::write_script_docs;
use autodoc::theme;
use colored::*;
use std::path::PathBuf;

/// Write a page for every script under `dir`, or the project root
pub fn document_scripts(config: &Config, dir: Option<PathBuf>) -> Result<()> {
    let package_dir = dir.unwrap_or_else(|| config.project_root.clone());
    let source_dir = config.source_path();

    println!("\n{}\n", "Documenting scripts...".bold());

    let report = write_script_docs(
        &package_dir,
        &source_dir,
        &config.page_options(),
        &config.scan_options()?,
    )?;

    for page in &report.written {
        println!("  {} {}", theme::success("+"), page.display());
    }
    for page in &report.skipped {
        println!("  {} {} {}", theme::warning("="), page.display(), theme::muted("(exists)"));
    }
    for (script, _) in &report.failed {
        println!("  {} {} {}", "!".red().bold(), script.display(), theme::muted("(failed)"));
    }

    if report.total() == 0 {
        println!(
            "  {} {}",
            theme::info_symbol().cyan(),
            theme::info("No documentable scripts found")
        );
    } else if !report.skipped.is_empty() {
        println!(
            "\n{} {} page(s) left unchanged; delete them to regenerate",
            theme::warning_symbol().yellow(),
            report.skipped.len()
        );
    }

    println!(
        "\n{} {} page(s) written to {}\n",
        theme::success_symbol().green().bold(),
        report.written.len(),
        source_dir.display()
    );

    for (script, reason) in &report.failed {
        print_warning(&format!("{} was not documented: {}", script.display(), reason));
    }
    Ok(())
}
