//! Color theme for consistent output

use crate::detect::ScriptType;
use colored::*;

/// Color for success messages
pub fn success(msg: &str) -> ColoredString {
    msg.green()
}

/// Color for warning messages
pub fn warning(msg: &str) -> ColoredString {
    msg.yellow()
}

/// Color for info messages
pub fn info(msg: &str) -> ColoredString {
    msg.cyan()
}

/// Dimmed text for paths and secondary details
pub fn muted(msg: &str) -> ColoredString {
    msg.dimmed()
}

/// Badge for a detected script type
pub fn type_badge(script_type: ScriptType) -> ColoredString {
    let label = script_type.as_str();
    match script_type {
        ScriptType::Bash => label.green(),
        ScriptType::Zsh => label.green().bold(),
        ScriptType::Ruby => label.red(),
        ScriptType::Perl => label.blue(),
        ScriptType::Yaml => label.magenta(),
        ScriptType::Json => label.yellow(),
    }
}

/// Badge for a file no type was found for
pub fn unknown_badge() -> ColoredString {
    "unknown".dimmed()
}

/// Symbol for success
pub fn success_symbol() -> &'static str {
    "✓"
}

/// Symbol for warning
pub fn warning_symbol() -> &'static str {
    "⚠"
}

/// Symbol for info
pub fn info_symbol() -> &'static str {
    "→"
}
