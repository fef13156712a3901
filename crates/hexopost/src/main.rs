//! Hexo blog workflow CLI tool

use anyhow::Result;
use clap::{CommandFactory, Parser};
use hexopost::errors;

mod cli;
mod commands;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.has_action() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let result = if let Some(titles) = &cli.new {
        commands::new_drafts(titles)
    } else if cli.finalize {
        commands::finalize_drafts()
    } else if cli.deploy {
        commands::deploy_site()
    } else {
        commands::run_site(cli.refresh, cli.preview, cli.start)
    };

    if let Err(e) = result {
        errors::print_error("Command failed", &e);
        std::process::exit(1);
    }

    Ok(())
}
