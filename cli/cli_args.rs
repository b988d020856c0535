use clap::{Args, Parser, Subcommand, ValueEnum};
use codecopy_core::Mode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Combine in-scope source files into a single annotated document.",
    long_about = "codecopy walks a root directory, decides which files are in scope using \nblacklist (.copyignore) or whitelist (.copyinclude) patterns, and combines the \nselected file contents plus a directory-structure listing into one output file. \nRunning without a subcommand starts an interactive session.",
    after_help = "EXAMPLES:\n  codecopy combine ./my-project --apply-filter-to-structure\n  codecopy combine ./my-project --mode whitelist --stdout\n  codecopy structure ./my-project\n  codecopy recent --clear"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        help = "Silence informational messages and warnings."
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(
        visible_alias = "c",
        about = "Combine in-scope files and the structure listing into one output file."
    )]
    Combine(CombineArgs),

    #[command(
        visible_alias = "s",
        about = "Print the scoped directory-structure listing to stdout."
    )]
    Structure(StructureArgs),

    #[command(about = "List or clear recently used root directories.")]
    Recent(RecentArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum ModeArg {
    #[default]
    Blacklist,
    Whitelist,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Blacklist => Mode::Blacklist,
            ModeArg::Whitelist => Mode::Whitelist,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterOpts {
    #[arg(
        long,
        value_enum,
        default_value = "blacklist",
        help = "Filtering mode: patterns exclude (blacklist) or select (whitelist) entries.",
        help_heading = "Filtering"
    )]
    pub mode: ModeArg,

    #[arg(
        long,
        help = "Apply the filter to the directory-structure listing as well.",
        help_heading = "Filtering"
    )]
    pub apply_filter_to_structure: bool,

    #[arg(
        long,
        value_name = "FILE",
        help = "Pattern file to load (default: .copyignore or .copyinclude inside ROOT).",
        help_heading = "Filtering"
    )]
    pub pattern_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CombineArgs {
    #[arg(
        value_name = "ROOT",
        help = "Root directory to process; prompts interactively when omitted."
    )]
    pub root: Option<PathBuf>,

    #[clap(flatten)]
    pub filter: FilterOpts,

    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        help = "Output file path (default: <ROOT>/code.copy).",
        help_heading = "Output Control",
        conflicts_with = "stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        help = "Write the combined document to stdout instead of a file.",
        help_heading = "Output Control"
    )]
    pub stdout: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StructureArgs {
    #[arg(value_name = "ROOT", help = "Root directory to list.")]
    pub root: PathBuf,

    #[clap(flatten)]
    pub filter: FilterOpts,
}

#[derive(Args, Debug, Clone)]
pub struct RecentArgs {
    #[arg(long, help = "Forget all remembered root directories.")]
    pub clear: bool,
}
