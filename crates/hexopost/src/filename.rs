//! Title to filename normalization

use crate::errors::{print_warning, PostError};
use crate::theme;
use regex::Regex;

/// Warn once the converted name exceeds this many characters
const WARN_LEN: usize = 64;

/// Hard limit on the converted name length
const MAX_LEN: usize = 255;

/// Normalize an article title into a filesystem-friendly name.
///
/// Runs of whitespace, hyphens, and underscores collapse to a single
/// hyphen; every remaining non-word character is deleted (letters of
/// any script and digits survive, ASCII punctuation does not); the
/// result is lowercased. Normalizing an already-normalized name is a
/// no-op.
pub fn normalize_title(title: &str) -> String {
    let separators = Regex::new(r"[\s\-_]+").unwrap();
    let name = separators.replace_all(title, "-");

    let non_word = Regex::new(r"[^\w\-]").unwrap();
    let name = non_word.replace_all(&name, "");

    name.to_lowercase()
}

/// Convert an article title into its publishable filename.
///
/// Names longer than 64 characters draw a non-fatal warning; names
/// longer than 255 characters are rejected.
pub fn title_to_filename(title: &str) -> Result<String, PostError> {
    println!("\n{} {}", theme::success("Original:"), title);

    let filename = normalize_title(title);

    let len = filename.chars().count();
    if len > MAX_LEN {
        return Err(PostError::FilenameTooLong(filename));
    }
    if len > WARN_LEN {
        print_warning("The converted file name exceeds 64 characters.");
    }

    println!("{} {}", theme::success("Converted:"), filename);
    Ok(filename)
}
