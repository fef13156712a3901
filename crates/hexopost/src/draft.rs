//! Draft lifecycle: creation and finalization
//!
//! Designed for single-invocation, sequential command-line use.
//! Concurrent runs racing on the same draft name are not guarded
//! against.

use crate::errors::PostError;
use crate::filename::title_to_filename;
use crate::frontmatter;
use crate::hexo;
use crate::layout::BlogLayout;
use crate::theme;
use crate::transform;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create a draft from a title and stage it under `_draft`.
///
/// The collision check runs before any side effect, so a failed create
/// leaves an existing draft of the same name untouched. The generated
/// post file is moved into the draft directory and its front-matter
/// title and cover are rewritten.
pub fn create_draft(layout: &BlogLayout, title: &str) -> Result<()> {
    let filename = title_to_filename(title)?;
    let draft_dir = layout.drafts.join(&filename);

    if draft_dir.exists() {
        return Err(PostError::DraftExists(draft_dir).into());
    }

    hexo::run(&["new", "post", &filename]);

    let generated = layout.source_posts.join(format!("{}.md", filename));
    if !generated.exists() {
        return Err(PostError::PostNotFound(filename).into());
    }

    fs::create_dir_all(&draft_dir)?;
    let draft_md = draft_dir.join(format!("{}.md", filename));
    fs::rename(&generated, &draft_md).with_context(|| {
        format!("failed to move '{}' into the draft directory", generated.display())
    })?;

    // the generator may scaffold an asset directory next to the post
    let stray_dir = layout.source_posts.join(&filename);
    if stray_dir.exists() {
        fs::remove_dir_all(&stray_dir)?;
    }

    let content = fs::read_to_string(&draft_md)?;
    let updated = frontmatter::set_title_and_cover(&content, title, &filename)?;
    fs::write(&draft_md, updated)?;

    println!(
        "Draft '{}' has been created and moved to {}.",
        theme::info(title),
        theme::path(&draft_dir)
    );

    Ok(())
}

/// Create a draft for every title, aborting on the first failure.
pub fn create_drafts(layout: &BlogLayout, titles: &[String]) -> Result<()> {
    for title in titles {
        create_draft(layout, title)?;
    }
    Ok(())
}

/// Publish every staged draft into `source/_posts`.
///
/// Each run fully replaces the prior published post and image
/// directory, so finalizing is safely re-runnable. Draft sources are
/// left in place. Draft directories without a same-named markdown file
/// are skipped.
pub fn finalize_all(layout: &BlogLayout) -> Result<()> {
    for entry in fs::read_dir(&layout.drafts)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        finalize_one(layout, &entry.path(), &name)?;
    }
    Ok(())
}

fn finalize_one(layout: &BlogLayout, article_dir: &Path, name: &str) -> Result<()> {
    let article_md = article_dir.join(format!("{}.md", name));
    if !article_md.exists() {
        return Ok(());
    }

    let post_md = layout.source_posts.join(format!("{}.md", name));
    let img_dest = layout.source_posts.join(name);
    println!("Finalizing draft '{}' to {}...", theme::info(name), theme::path(&post_md));

    // replace any prior published artifact
    if post_md.exists() {
        fs::remove_file(&post_md)?;
    }
    if img_dest.exists() {
        fs::remove_dir_all(&img_dest)?;
    }
    fs::create_dir_all(&img_dest)?;

    let img_src = article_dir.join("img");
    if img_src.exists() {
        for img in fs::read_dir(&img_src)? {
            let img = img?;
            fs::copy(img.path(), img_dest.join(img.file_name())).with_context(|| {
                format!("failed to copy image '{}'", img.path().display())
            })?;
        }
    }

    let content = fs::read_to_string(&article_md)?;
    fs::write(&post_md, transform::finalize_content(&content))?;

    println!(
        "Draft '{}' has been finalized and copied to {}.",
        theme::info(name),
        theme::path(&post_md)
    );

    Ok(())
}
