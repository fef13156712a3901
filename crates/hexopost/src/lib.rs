//! Blog workflow library for Hexo sites
//!
//! This library provides the draft lifecycle (creation, finalization)
//! and the content transforms applied when a draft is published, plus
//! thin wrappers around the generator's build, serve, and deploy
//! commands.

pub mod codeblock;
pub mod draft;
pub mod errors;
pub mod filename;
pub mod frontmatter;
pub mod hexo;
pub mod layout;
pub mod theme;
pub mod transform;

pub use codeblock::{rewrite_prose, split_spans, Span, SpanKind};
pub use errors::PostError;
pub use filename::{normalize_title, title_to_filename};
pub use layout::BlogLayout;

/// Re-export common error types
pub use anyhow::{Error, Result};
