//! Blog directory layout discovery

use crate::errors::PostError;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved directory layout of a Hexo blog root.
///
/// `source/_posts` is the publish tree and must already exist; the
/// staging directories are created on demand next to it.
#[derive(Debug, Clone)]
pub struct BlogLayout {
    pub root: PathBuf,
    pub source_posts: PathBuf,
    pub drafts: PathBuf,
    pub hidden: PathBuf,
    pub archived: PathBuf,
}

impl BlogLayout {
    /// Validate `root` as a blog root and create the staging
    /// directories if they are missing.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self, PostError> {
        let root = root.as_ref().to_path_buf();

        let source_posts = root.join("source").join("_posts");
        if !source_posts.exists() {
            return Err(PostError::RootNotFound(source_posts));
        }

        let drafts = root.join("_draft");
        let hidden = root.join("_hidden");
        let archived = root.join("_archived");
        for dir in [&drafts, &hidden, &archived] {
            fs::create_dir_all(dir)?;
        }

        Ok(Self { root, source_posts, drafts, hidden, archived })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_requires_source_posts() {
        let dir = TempDir::new().unwrap();
        let err = BlogLayout::discover(dir.path()).unwrap_err();
        assert!(matches!(err, PostError::RootNotFound(_)));
    }

    #[test]
    fn test_discover_creates_staging_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("source").join("_posts")).unwrap();

        let layout = BlogLayout::discover(dir.path()).unwrap();
        assert!(layout.drafts.is_dir());
        assert!(layout.hidden.is_dir());
        assert!(layout.archived.is_dir());
    }

    #[test]
    fn test_discover_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("source").join("_posts")).unwrap();

        BlogLayout::discover(dir.path()).unwrap();
        assert!(BlogLayout::discover(dir.path()).is_ok());
    }
}
