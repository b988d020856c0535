use crate::cli_args::StructureArgs;
use anyhow::{Context, Result};
use codecopy_core::{self as core, Mode, PatternSet};

pub fn handle_structure_command(args: StructureArgs) -> Result<()> {
    let root = super::resolve_root(&args.root)?;
    let mode = Mode::from(args.filter.mode);

    let pattern_path = args
        .filter
        .pattern_file
        .clone()
        .unwrap_or_else(|| root.join(mode.pattern_file_name()));
    let patterns = PatternSet::load(&pattern_path)
        .with_context(|| format!("Failed to load pattern file {}", pattern_path.display()))?;

    let entries = core::walk(&root, &patterns, mode).context("Failed to walk root directory")?;
    for line in core::build_structure(&entries, args.filter.apply_filter_to_structure, mode) {
        println!("{}", line);
    }
    Ok(())
}
