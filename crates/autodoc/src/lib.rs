//! Script detection and reStructuredText helpers for Sphinx documentation
//!
//! The core is [`detect`], which classifies a file as one of a small set of
//! script types by extension, falling back to the interpreter named on its
//! first line. The remaining modules build on it to find scripts in a
//! package and render them as documentation pages.

pub mod config;
pub mod constants;
pub mod detect;
pub mod encoding;
pub mod error;
pub mod report;
pub mod rst;
pub mod scan;
pub mod templates;
pub mod textio;
pub mod theme;

pub use config::Config;
pub use detect::{detect, ScriptType};
pub use encoding::TextEncoding;
pub use error::DocError;
pub use rst::{document_script, render_script_page, write_script_docs, DocReport, PageOptions};
pub use scan::{find_scripts, ScanOptions, ScriptFile};
pub use templates::{render_conf, render_index, write_conf, write_index, ConfValues, IndexOutcome};

/// Re-export common error types
pub use anyhow::{Error, Result};
