//! Front-matter inspection and field rewriting
//!
//! Only the `title:` and `cover:` line values are ever rewritten; every
//! other byte of the file, body included, is preserved.

use crate::errors::PostError;
use chrono::NaiveDate;
use regex::{NoExpand, Regex};

/// Split content into the front-matter block (both `---` delimiter
/// lines included) and the body that follows.
fn split(content: &str) -> Result<(&str, &str), PostError> {
    if !content.starts_with("---\n") {
        return Err(PostError::InvalidFrontMatter("missing opening '---' delimiter".to_string()));
    }

    let mut offset = 0;
    for (idx, line) in content.split_inclusive('\n').enumerate() {
        offset += line.len();
        if idx > 0 && line == "---\n" {
            return Ok((&content[..offset], &content[offset..]));
        }
    }

    Err(PostError::InvalidFrontMatter("missing closing '---' delimiter".to_string()))
}

/// Parse the `date: YYYY-MM-DD` field out of a front-matter block.
fn extract_date(front_matter: &str) -> Result<NaiveDate, PostError> {
    let re = Regex::new(r"date:\s*(\d{4}-\d{2}-\d{2})").unwrap();
    let caps = re.captures(front_matter).ok_or(PostError::MissingDate)?;
    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d")
        .map_err(|_| PostError::InvalidDate(caps[1].to_string()))
}

/// Rewrite the `title:` and `cover:` values of a post's front-matter.
///
/// The title becomes the original (non-normalized) article title; the
/// cover becomes `YYYY/MM/<filename>/cover.jpg`, with year and month
/// taken from the front-matter's `date` field.
pub fn set_title_and_cover(
    content: &str,
    title: &str,
    filename: &str,
) -> Result<String, PostError> {
    let (front_matter, body) = split(content)?;

    let date = extract_date(front_matter)?;
    let cover = format!("{}/{}/cover.jpg", date.format("%Y/%m"), filename);

    // `.*` cannot cross a newline, so an empty value never swallows
    // the following line
    let title_re = Regex::new(r"(?m)^title:.*$").unwrap();
    let front_matter =
        title_re.replace_all(front_matter, NoExpand(&format!("title: {}", title))).to_string();

    let cover_re = Regex::new(r"(?m)^cover:.*$").unwrap();
    let front_matter =
        cover_re.replace_all(&front_matter, NoExpand(&format!("cover: {}", cover))).to_string();

    Ok(front_matter + body)
}
