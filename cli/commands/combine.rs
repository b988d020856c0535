use crate::cli_args::CombineArgs;
use crate::prompt;
use crate::recent::RecentPaths;
use anyhow::{Context, Result};
use codecopy_core::{self as core, Mode, PatternSet, RunParameters};
use colored::Colorize;
use std::fs;

pub fn handle_combine_command(args: CombineArgs, quiet: bool) -> Result<()> {
    let (root, mode, apply_filter) = match &args.root {
        Some(path) => {
            let root = super::resolve_root(path)?;
            (
                root,
                Mode::from(args.filter.mode),
                args.filter.apply_filter_to_structure,
            )
        }
        None => {
            // Interactive session: settings normally supplied as flags are
            // gathered by prompting, and the chosen root is remembered.
            let mode = prompt::choose_mode()?;
            let apply_filter = prompt::confirm_apply_filter()?;
            let mut recent = RecentPaths::load();
            let root = prompt::choose_root(&mut recent)?;
            if let Err(e) = recent.save() {
                log::warn!("Could not save recent paths: {}", e);
            }
            (root, mode, apply_filter)
        }
    };
    log::info!("Combining {} in {} mode", root.display(), mode);

    let pattern_path = args
        .filter
        .pattern_file
        .clone()
        .unwrap_or_else(|| root.join(mode.pattern_file_name()));
    let patterns = PatternSet::load(&pattern_path)
        .with_context(|| format!("Failed to load pattern file {}", pattern_path.display()))?;
    log::debug!(
        "Loaded {} pattern(s) from {}",
        patterns.len(),
        pattern_path.display()
    );

    let entries = core::walk(&root, &patterns, mode).context("Failed to walk root directory")?;

    let params = RunParameters {
        root: root.clone(),
        mode,
        apply_filter_to_structure: apply_filter,
    };
    let document = core::build_document(&params, &patterns, &entries);

    if args.stdout {
        print!("{}", document);
        return Ok(());
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| root.join(core::OUTPUT_FILE));
    fs::write(&output_path, &document).map_err(|e| core::AppError::FileWrite {
        path: output_path.clone(),
        source: e,
    })?;
    if !quiet {
        println!(
            "{} Combined code and directory structure saved to: {}",
            "✅".green(),
            output_path.display().to_string().blue()
        );
    }
    Ok(())
}
