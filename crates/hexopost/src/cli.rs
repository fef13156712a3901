//! CLI argument parsing

use clap::Parser;

/// Action flags are mutually exclusive, except that `-r`, `-s`, and
/// `-p` combine (so `-rs`, `-ps`, `-rps` work as combined short
/// flags). Combined actions always run in the order refresh, preview,
/// start, regardless of flag order.
#[derive(Debug, Parser)]
#[command(name = "hxp")]
#[command(about = "Hexo Blog Management Tool", long_about = None)]
#[command(after_help = "Running without flags prints this help.")]
pub struct Cli {
    /// Create new draft(s) with the given title(s) and stage them under _draft
    #[arg(
        short = 'n',
        long = "new",
        num_args = 1..,
        value_name = "TITLE",
        conflicts_with_all = ["finalize", "refresh", "start", "preview", "deploy"]
    )]
    pub new: Option<Vec<String>>,

    /// Finalize all drafts into source/_posts, transforming their content
    #[arg(
        short = 'f',
        long = "finalize",
        conflicts_with_all = ["refresh", "start", "preview", "deploy"]
    )]
    pub finalize: bool,

    /// Refresh the site (hexo clean && hexo generate)
    #[arg(short = 'r', long = "refresh", conflicts_with = "deploy")]
    pub refresh: bool,

    /// Start the preview server (hexo server)
    #[arg(short = 's', long = "start", conflicts_with = "deploy")]
    pub start: bool,

    /// Open the preview page (http://localhost:4000)
    #[arg(short = 'p', long = "preview", conflicts_with = "deploy")]
    pub preview: bool,

    /// Deploy the blog (hexo deploy)
    #[arg(short = 'd', long = "deploy")]
    pub deploy: bool,
}

impl Cli {
    /// Whether any action flag was given.
    pub fn has_action(&self) -> bool {
        self.new.is_some()
            || self.finalize
            || self.refresh
            || self.start
            || self.preview
            || self.deploy
    }
}
