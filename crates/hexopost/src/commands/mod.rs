//! Command implementations

pub mod drafts;
pub mod site;

pub use drafts::{finalize_drafts, new_drafts};
pub use site::{deploy_site, run_site};
