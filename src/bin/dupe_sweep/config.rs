//! Runtime config resolved from the command line arguments.

use crate::Args;

#[derive(Debug)]
pub struct Config {
    /// Only list duplicates, never prompt for the cleanup.
    pub(crate) print: bool,
    /// Scan the source directory recursively.
    pub(crate) source_recursive: bool,
    /// Scan target directories recursively.
    pub(crate) target_recursive: bool,
    /// Print extra diagnostics.
    pub(crate) verbose: bool,
}

impl Config {
    /// Create config from the given command line args.
    pub fn from_args(args: Args) -> Self {
        Self {
            print: args.print,
            source_recursive: args.source_recursive,
            target_recursive: args.target_recursive,
            verbose: args.verbose,
        }
    }
}
