//! Site build, preview, and deploy commands

use anyhow::Result;
use hexopost::hexo;

/// Run the combinable site actions in fixed order: refresh, then
/// preview, then start.
///
/// The preview opens before the server starts because starting the
/// server blocks until it exits.
pub fn run_site(refresh: bool, preview: bool, start: bool) -> Result<()> {
    if refresh {
        hexo::refresh();
    }
    if preview {
        hexo::open_preview();
    }
    if start {
        hexo::start_server()?;
    }
    Ok(())
}

/// Deploy the generated site.
pub fn deploy_site() -> Result<()> {
    hexo::deploy();
    Ok(())
}
