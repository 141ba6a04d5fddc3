//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adoc")]
#[command(about = "Script detection and Sphinx documentation helper", long_about = None)]
#[command(version)]
#[command(after_help = "Use 'adoc <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root directory (defaults to the current directory)
    #[arg(short = 'C', long, default_value = ".", global = true)]
    pub project_root: String,

    /// Text encoding used to read scripts (utf-8, ascii, latin-1)
    #[arg(short, long, global = true)]
    pub encoding: Option<String>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the script type of files
    #[command(visible_alias = "type")]
    Detect {
        /// Files to inspect
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List documentable scripts under a directory
    #[command(visible_alias = "ls")]
    Scan {
        /// Directory to scan (defaults to the project root)
        dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a reStructuredText page for every script under a directory
    #[command(visible_alias = "doc")]
    Document {
        /// Package directory to document (defaults to the project root)
        dir: Option<PathBuf>,

        /// Directory receiving the pages (defaults to doc/source)
        #[arg(short, long)]
        source_dir: Option<PathBuf>,

        /// Spaces substituted for each tab
        #[arg(short, long)]
        tab_width: Option<usize>,

        /// Keep tabs instead of converting them to spaces
        #[arg(long)]
        keep_tabs: bool,
    },

    /// Print the reStructuredText page for one script
    Show {
        /// Script to render
        path: PathBuf,
    },

    /// Render the Sphinx conf.py
    Conf {
        /// Write to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Project name
        #[arg(long)]
        project: Option<String>,

        /// Author name
        #[arg(long)]
        author: Option<String>,

        /// Copyright line
        #[arg(long)]
        copyright: Option<String>,

        /// Release/version
        #[arg(long)]
        release: Option<String>,

        /// HTML theme
        #[arg(long)]
        theme: Option<String>,
    },

    /// Render the root index.rst
    Index {
        /// Write to this file instead of standard output (never overwrites)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package name used in the title
        #[arg(short, long)]
        package: Option<String>,
    },
}
