use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slurp")]
#[command(about = "Reads a file and prints its contents")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// File to read
    pub path: PathBuf,

    /// How load failures are handled
    #[arg(long, value_enum, default_value = "propagate")]
    pub error_mode: ErrorMode,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorMode {
    /// Failures return to the caller, which reports them and exits 0
    Propagate,
    /// Failures resume at a recovery point; the exit status carries the kind
    Recover,
}
