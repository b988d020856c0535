use crate::recent::RecentPaths;
use anyhow::{Context, Result};
use codecopy_core::Mode;
use std::io::{self, Write};
use std::path::PathBuf;

fn ask(question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}

pub fn choose_mode() -> Result<Mode> {
    loop {
        let answer = ask("Choose mode: (1) Blacklist (default) or (2) Whitelist: ")?;
        match answer.as_str() {
            "" | "1" => return Ok(Mode::Blacklist),
            "2" => return Ok(Mode::Whitelist),
            _ => println!("Invalid choice. Please enter 1 for Blacklist or 2 for Whitelist."),
        }
    }
}

pub fn confirm_apply_filter() -> Result<bool> {
    let answer = ask("Apply the filter to the directory structure? (y/n): ")?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// Picks the root directory, offering remembered paths first. Re-prompts
/// until an existing directory is given; the result is recorded in `recent`.
pub fn choose_root(recent: &mut RecentPaths) -> Result<PathBuf> {
    if !recent.is_empty() {
        println!("Recent paths:");
        for (i, path) in recent.paths().iter().enumerate() {
            println!("{}. {}", i + 1, path);
        }
        println!("0. Enter a new path");
        let choice = ask("Choose a recent path or enter 0 to input a new path: ")?;
        if let Ok(n) = choice.parse::<usize>() {
            if n >= 1 {
                if let Some(chosen) = recent.get(n - 1) {
                    recent.remember(&chosen);
                    return Ok(chosen);
                }
            }
        }
    }

    loop {
        let answer = ask("Enter the path of the root directory: ")?;
        let expanded = PathBuf::from(shellexpand::tilde(&answer).as_ref());
        if expanded.is_dir() {
            recent.remember(&expanded);
            return Ok(expanded);
        }
        println!("The specified path does not exist. Please try again.");
    }
}
