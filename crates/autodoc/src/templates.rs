//! Sphinx `conf.py` and `index.rst` text

use crate::config::Config;
use crate::constants::{DEFAULT_AUTHOR, DEFAULT_PACKAGE_PATH, DEFAULT_RELEASE, DEFAULT_THEME};
use anyhow::{Context, Result};
use chrono::Datelike;
use std::fs;
use std::path::Path;

/// Values substituted into `conf.py`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfValues {
    /// Package location relative to the directory holding `conf.py`
    pub package_path: String,
    pub project: String,
    pub copyright: String,
    pub author: String,
    pub release: String,
    pub theme: String,
}

impl ConfValues {
    /// Fill values from configuration, defaulting anything left unset
    pub fn from_config(config: &Config) -> Self {
        let author = config.author.clone().unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
        let copyright = config
            .copyright
            .clone()
            .unwrap_or_else(|| format!("{}, {}", chrono::Local::now().year(), author));
        let project = config.project.clone().unwrap_or_else(|| project_name(&config.project_root));

        Self {
            package_path: config
                .package_path
                .clone()
                .unwrap_or_else(|| DEFAULT_PACKAGE_PATH.to_string()),
            project,
            copyright,
            author,
            release: config.release.clone().unwrap_or_else(|| DEFAULT_RELEASE.to_string()),
            theme: config.theme.clone().unwrap_or_else(|| DEFAULT_THEME.to_string()),
        }
    }
}

fn project_name(root: &Path) -> String {
    std::path::absolute(root)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "project".to_string())
}

/// Render the Sphinx configuration file
pub fn render_conf(values: &ConfValues) -> String {
    format!(
        r#"# Configuration file for the Sphinx documentation builder.
#
# This file only contains a selection of the most common options. For a full
# list see the documentation:
# https://www.sphinx-doc.org/en/master/usage/configuration.html

# -- Path setup --------------------------------------------------------------

# If extensions (or modules to document with autodoc) are in another directory,
# add these directories to sys.path here.
import os
import sys

_pkg_path: str = os.path.abspath("{package_path}")
sys.path.insert(0, _pkg_path)


# -- Project information -----------------------------------------------------

project = "{project}"
copyright = "{copyright}"
author = "{author}"

# The full version, including alpha/beta/rc tags
release = "{release}"


# -- General configuration ---------------------------------------------------

extensions = [
    "sphinx.ext.autodoc",
    "sphinx.ext.napoleon",
    "sphinxarg.ext",
    "sphinx_autodoc_typehints",
    "myst_parser",
    "sphinx.ext.intersphinx",
    "sphinx_tabs.tabs",
    "sphinx.ext.viewcode",
]

source_suffix = {{
    ".rst": "restructuredtext",
    ".txt": "markdown",
    ".md": "markdown",
}}

myst_enable_extensions = [
    "amsmath",
    "colon_fence",
    "deflist",
    "dollarmath",
    "fieldlist",
    "html_admonition",
    "html_image",
    "linkify",
    "replacements",
    "smartquotes",
    "strikethrough",
    "substitution",
    "tasklist",
]

# Sphinx-tab configuration
sphinx_tabs_valid_builders = ["linkcheck"]
sphinx_tabs_disable_tab_closing = True
sphinx_tabs_disable_css_loading = False

# Add any paths that contain templates here, relative to this directory.
templates_path = ["_templates"]

# Patterns, relative to the source directory, to ignore when looking for
# source files.
exclude_patterns = []


# -- Options for HTML output -------------------------------------------------

html_theme = "{theme}"

# Custom static files (such as style sheets), copied after the builtin ones.
html_static_path = ["_static"]
"#,
        package_path = py_escape(&values.package_path),
        project = py_escape(&values.project),
        copyright = py_escape(&values.copyright),
        author = py_escape(&values.author),
        release = py_escape(&values.release),
        theme = py_escape(&values.theme),
    )
}

/// Escape a value for a double-quoted Python string literal
fn py_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the root `index.rst` for `package`
pub fn render_index(package: &str) -> String {
    let title = format!("Welcome to {}'s documentation!", package);
    let underline = "=".repeat(title.chars().count());

    format!(
        r#".. {package} documentation main file.
   You can adapt this file completely to your liking, but it should at least
   contain the root `toctree` directive.

{title}
{underline}

.. toctree::
   :maxdepth: 3

   .. ADD RST FILES HERE

Indices and tables
==================

* :ref:`genindex`
* :ref:`modindex`
* :ref:`search`
"#
    )
}

/// Result of [`write_index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    Written,
    AlreadyExists,
}

/// Write `index.rst` unless the file is already present
pub fn write_index(path: impl AsRef<Path>, package: &str) -> Result<IndexOutcome> {
    let path = path.as_ref();
    if path.exists() {
        log::info!("{}: already exists, leaving it unchanged", path.display());
        return Ok(IndexOutcome::AlreadyExists);
    }

    fs::write(path, render_index(package))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(IndexOutcome::Written)
}

/// Write `conf.py`, replacing any existing file
pub fn write_conf(path: impl AsRef<Path>, values: &ConfValues) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_conf(values))
        .with_context(|| format!("Failed to write {}", path.display()))
}
