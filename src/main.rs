mod cli;
mod error;
mod loader;
mod printer;
mod recovery;

use std::path::Path;
use std::process;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, ErrorMode};

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            process::exit(1);
        }
        Err(err) => err.exit(),
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    let status = match cli.error_mode {
        ErrorMode::Propagate => run_propagate(&cli.path),
        ErrorMode::Recover => run_recover(&cli.path),
    };
    process::exit(status);
}

/// Propagate discipline: the loader's outcome is inspected right here and
/// reported with its OS error context; the run still ends with status 0.
fn run_propagate(path: &Path) -> i32 {
    match loader::load(path) {
        Ok(content) => {
            printer::print_contents(Some(&content));
        }
        Err(err) => {
            eprintln!("{} {err}", "Error:".red().bold());
            printer::print_contents(None);
        }
    }
    0
}

/// Recover discipline: a recovery point wraps the load; a failure resumes
/// there carrying only its discriminant, which picks the handler and the
/// exit status.
fn run_recover(path: &Path) -> i32 {
    match recovery::run_protected(|| loader::load(path)) {
        Ok(content) => {
            printer::print_contents(Some(&content));
            0
        }
        Err(kind) => recovery::handle_failure(kind.code(), path),
    }
}
