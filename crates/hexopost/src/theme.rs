//! Color helpers for consistent console output

use colored::*;
use std::path::Path;

/// Color for success messages
pub fn success(msg: &str) -> ColoredString {
    msg.green()
}

/// Color for error messages
pub fn error(msg: &str) -> ColoredString {
    msg.red()
}

/// Color for warning messages
pub fn warning(msg: &str) -> ColoredString {
    msg.yellow()
}

/// Color for progress and highlighted names
pub fn info(msg: &str) -> ColoredString {
    msg.blue()
}

/// Color for filesystem paths in progress messages
pub fn path(p: &Path) -> ColoredString {
    p.display().to_string().green()
}
