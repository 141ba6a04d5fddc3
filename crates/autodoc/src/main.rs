//! Script documentation CLI tool

use anyhow::Result;
use autodoc::config::Config;
use autodoc::report::{print_error, print_error_with_suggestion, suggestion_for};
use autodoc::TextEncoding;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let mut config = match Config::load(Some(cli.project_root.as_str())) {
        Ok(config) => config,
        Err(e) => {
            print_error_with_suggestion(
                "Failed to load configuration",
                &e,
                &format!("Check '{}/.autodoc/config.toml'", cli.project_root),
            );
            std::process::exit(1);
        }
    };

    if let Some(name) = &cli.encoding {
        match name.parse::<TextEncoding>() {
            Ok(encoding) => config.encoding = encoding,
            Err(e) => {
                print_error_with_suggestion(
                    "Invalid --encoding",
                    &anyhow::Error::from(e),
                    "Use one of: utf-8, ascii, latin-1",
                );
                std::process::exit(1);
            }
        }
    }
    log::debug!("Using configuration: {:?}", config);

    // Execute the command
    let result = match cli.command {
        Commands::Detect { paths, format } => detect_files(&config, &paths, format),
        Commands::Scan { dir, format } => scan_scripts(&config, dir, format),
        Commands::Document { dir, source_dir, tab_width, keep_tabs } => {
            if let Some(dir) = source_dir {
                config.source_dir = dir;
            }
            if let Some(width) = tab_width {
                config.tab_width = width;
            }
            if keep_tabs {
                config.convert_tabs = false;
            }
            document_scripts(&config, dir)
        }
        Commands::Show { path } => show_page(&config, &path),
        Commands::Conf { output, project, author, copyright, release, theme } => {
            config.project = project.or(config.project);
            config.author = author.or(config.author);
            config.copyright = copyright.or(config.copyright);
            config.release = release.or(config.release);
            config.theme = theme.or(config.theme);
            generate_conf(&config, output.as_deref())
        }
        Commands::Index { output, package } => generate_index(&config, output.as_deref(), package),
    };

    if let Err(e) = result {
        match suggestion_for(&e) {
            Some(suggestion) => print_error_with_suggestion("Command failed", &e, suggestion),
            None => print_error("Command failed", &e),
        }
        std::process::exit(1);
    }

    Ok(())
}
