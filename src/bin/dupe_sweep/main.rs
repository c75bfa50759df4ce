mod config;
mod sweep;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::sweep::DupeSweep;

#[derive(Parser)]
#[command(author, version, name = env!("CARGO_BIN_NAME"), about = "Find files in target directories whose names duplicate source file names")]
struct Args {
    /// Source directory whose file names form the reference set
    #[arg(value_hint = clap::ValueHint::DirPath, required_unless_present = "completion")]
    source: Option<PathBuf>,

    /// Target directories to check for duplicated names
    #[arg(value_hint = clap::ValueHint::DirPath, required_unless_present = "completion")]
    targets: Vec<PathBuf>,

    /// Recurse into the source directory
    #[arg(short = 's', long, visible_alias = "sr")]
    source_recursive: bool,

    /// Recurse into target directories
    #[arg(short = 't', long, visible_alias = "tr")]
    target_recursive: bool,

    /// Only print duplicates without offering to move them
    #[arg(short, long)]
    print: bool,

    /// Generate shell completion
    #[arg(short = 'l', long, value_name = "SHELL")]
    completion: Option<Shell>,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(ref shell) = args.completion {
        dupe_sweep::generate_shell_completion(*shell, Args::command(), env!("CARGO_BIN_NAME"));
        return Ok(());
    }
    DupeSweep::new(args)?.run()
}
