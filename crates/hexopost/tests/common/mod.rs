// Test infrastructure for hexopost integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory shaped like a Hexo blog root.
pub fn blog_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("source").join("_posts")).unwrap();
    dir
}

/// Builder for staging a draft under `_draft`
pub struct DraftBuilder {
    name: String,
    content: String,
    images: Vec<(String, Vec<u8>)>,
}

impl DraftBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            content: format!(
                "---\ntitle: {0}\ndate: 2024-05-01 10:00:00\ncover: \n---\n\nBody text.\n",
                name
            ),
            images: Vec::new(),
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn image(mut self, filename: &str, bytes: &[u8]) -> Self {
        self.images.push((filename.to_string(), bytes.to_vec()));
        self
    }

    /// Write the draft into `<root>/_draft/<name>/` and return its path.
    pub fn write(self, root: &Path) -> PathBuf {
        let dir = root.join("_draft").join(&self.name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{}.md", self.name)), &self.content).unwrap();

        if !self.images.is_empty() {
            let img_dir = dir.join("img");
            fs::create_dir_all(&img_dir).unwrap();
            for (name, bytes) in &self.images {
                fs::write(img_dir.join(name), bytes).unwrap();
            }
        }

        dir
    }
}
