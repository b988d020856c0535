mod cli_args;
mod commands;
mod prompt;
mod recent;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::process;

use cli_args::{Cli, Commands, CombineArgs};
use codecopy_core::AppError;

fn main() {
    let cli_args = Cli::parse();

    setup_logging(cli_args.quiet, cli_args.verbose);

    let quiet = cli_args.quiet;
    log::debug!("CLI args parsed: {:?}", cli_args);

    let exit_code = match run_app(cli_args, quiet) {
        Ok(_) => {
            log::info!("Application finished successfully.");
            0
        }
        Err(e) => {
            let exit_code = match e.downcast_ref::<AppError>() {
                Some(AppError::Config(_)) => 1,
                Some(AppError::Io(_))
                | Some(AppError::FileRead { .. })
                | Some(AppError::FileWrite { .. }) => 2,
                Some(_) => 1,
                None => 1,
            };
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            exit_code
        }
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}

fn run_app(cli: Cli, quiet: bool) -> Result<()> {
    match cli.command {
        None => {
            // No subcommand starts an interactive combine run.
            log::debug!("No subcommand given, starting interactive combine...");
            commands::combine::handle_combine_command(CombineArgs::default(), quiet)
        }
        Some(Commands::Combine(args)) => {
            log::debug!("Executing 'combine' command...");
            commands::combine::handle_combine_command(args, quiet)
        }
        Some(Commands::Structure(args)) => {
            log::debug!("Executing 'structure' command...");
            commands::structure::handle_structure_command(args)
        }
        Some(Commands::Recent(args)) => {
            log::debug!("Executing 'recent' command...");
            commands::recent::handle_recent_command(&args, quiet)
        }
    }
}
