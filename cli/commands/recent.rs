use crate::cli_args::RecentArgs;
use crate::recent::RecentPaths;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn handle_recent_command(args: &RecentArgs, quiet: bool) -> Result<()> {
    let mut recent = RecentPaths::load();

    if args.clear {
        recent.clear();
        recent.save().context("Failed to clear recent paths")?;
        if !quiet {
            println!("{}", "Recent paths cleared.".green());
        }
        return Ok(());
    }

    if recent.is_empty() {
        println!("(no recent paths)");
    } else {
        for (i, path) in recent.paths().iter().enumerate() {
            println!("{}. {}", i + 1, path);
        }
    }
    Ok(())
}
