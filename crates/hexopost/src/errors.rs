//! Error types and console reporting

use colored::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("converted filename exceeds the maximum allowed length of 255 characters")]
    FilenameTooLong(String),

    #[error("draft '{}' already exists", .0.display())]
    DraftExists(PathBuf),

    #[error("post file for '{0}' not found")]
    PostNotFound(String),

    #[error("blog root not found: missing '{}'", .0.display())]
    RootNotFound(PathBuf),

    #[error("invalid front-matter format: {0}")]
    InvalidFrontMatter(String),

    #[error("date field not found in front-matter")]
    MissingDate,

    #[error("invalid date in front-matter: {0}")]
    InvalidDate(String),

    #[error("port {0} is already in use")]
    PortInUse(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Print a formatted error message
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    // Show chain of causes
    let mut current = error.source();
    while let Some(cause) = current {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
        current = std::error::Error::source(cause);
    }
}

/// Print a non-fatal warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", crate::theme::warning("Warning:").bold(), message);
}
