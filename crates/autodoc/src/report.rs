//! Error and warning output for the command line

use colored::*;

/// Print a formatted error message
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    // Show chain of causes
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
    }
}

/// Print an error with a suggestion
pub fn print_error_with_suggestion(context: &str, error: &anyhow::Error, suggestion: &str) {
    print_error(context, error);
    eprintln!("\n{} {}", "Suggestion:".cyan().bold(), suggestion);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

/// Suggestion shown for a failure, if one applies
pub fn suggestion_for(error: &anyhow::Error) -> Option<&'static str> {
    if let Some(doc_err) = error.downcast_ref::<crate::DocError>() {
        return match doc_err {
            crate::DocError::UnknownEncoding(_) => Some("Use one of: utf-8, ascii, latin-1"),
            crate::DocError::UnknownScriptType(_) => {
                Some("Only bash, zsh, ruby, perl, yaml and json files can be documented")
            }
            crate::DocError::NotADirectory(_) => {
                Some("Check that the directory exists; pages go to --source-dir")
            }
            crate::DocError::InvalidPattern { .. } => {
                Some("Check the exclude patterns in .autodoc/config.toml")
            }
        };
    }

    error
        .chain()
        .filter_map(|c| c.downcast_ref::<std::io::Error>())
        .find_map(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Some("Check that the path exists"),
            std::io::ErrorKind::InvalidData => Some("Try a different --encoding"),
            std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
            _ => None,
        })
}
