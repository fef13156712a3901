//! Draft workflow commands

use anyhow::Result;
use hexopost::draft;
use hexopost::layout::BlogLayout;

/// Create a staged draft for every given title.
pub fn new_drafts(titles: &[String]) -> Result<()> {
    let layout = BlogLayout::discover(std::env::current_dir()?)?;
    draft::create_drafts(&layout, titles)
}

/// Publish all staged drafts into the posts tree.
pub fn finalize_drafts() -> Result<()> {
    let layout = BlogLayout::discover(std::env::current_dir()?)?;
    draft::finalize_all(&layout)
}
