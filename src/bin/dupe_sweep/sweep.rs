use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use colored::Colorize;
#[cfg(not(test))]
use indicatif::ProgressStyle;
use indicatif::{ProgressBar, ProgressIterator};
use itertools::Itertools;
use walkdir::WalkDir;

use dupe_sweep::matching::is_duplicate_name;
use dupe_sweep::{
    colorize_bool, format_duration_seconds, get_unique_path, normalized_file_stem, path_to_filename_string,
    path_to_string, print_bold, print_error, print_warning, resolve_directory_path,
};

use crate::Args;
use crate::config::Config;

#[cfg(not(test))]
const PROGRESS_BAR_CHARS: &str = "=>-";
#[cfg(not(test))]
const PROGRESS_BAR_TEMPLATE: &str = "[{elapsed_precise}] {bar:80.magenta/blue} {pos}/{len} {percent}%";

pub struct DupeSweep {
    config: Config,
    source: PathBuf,
    targets: Vec<PathBuf>,
}

impl DupeSweep {
    pub fn new(args: Args) -> anyhow::Result<Self> {
        let source_arg = args.source.as_deref().context("Source directory is required")?;
        let source = resolve_directory_path(source_arg)?;
        // A target repeated on the command line would report its files twice
        let targets: Vec<PathBuf> = args.targets.iter().cloned().unique().collect();
        let config = Config::from_args(args);
        Ok(Self { config, source, targets })
    }

    pub fn run(&self) -> anyhow::Result<()> {
        print_bold!("Checking for duplicated file names");
        println!("Source: {}", path_to_string(&self.source).cyan());
        println!(
            "Targets: {}",
            self.targets.iter().map(|path| path_to_string(path)).join(", ").cyan()
        );
        if self.config.verbose {
            println!("Recursive source scan: {}", colorize_bool(self.config.source_recursive));
            println!("Recursive target scan: {}", colorize_bool(self.config.target_recursive));
        }

        let start_time = Instant::now();
        let source_names = self.collect_source_names()?;
        let target_files = self.collect_target_files()?;
        if self.config.verbose {
            println!(
                "Checking {} target file(s) against {} source name(s)...",
                target_files.len(),
                source_names.len()
            );
        }
        let duplicates = Self::find_duplicates(&source_names, &target_files);
        let elapsed = start_time.elapsed().as_secs_f64();

        if duplicates.is_empty() {
            println!("{}", "No duplicated file names found".green());
            println!("Took {}", format_duration_seconds(elapsed));
            return Ok(());
        }

        println!(
            "{}",
            format!("Found {} duplicated file(s) in target directories:", duplicates.len())
                .yellow()
                .bold()
        );
        println!("Took {}", format_duration_seconds(elapsed));
        for path in &duplicates {
            println!("{}", path_to_string(path));
        }

        if self.config.print {
            return Ok(());
        }

        Self::offer_cleanup(&duplicates)
    }

    /// Collect the base name of every file in the source directory.
    fn collect_source_names(&self) -> anyhow::Result<Vec<String>> {
        let walker = if self.config.source_recursive {
            WalkDir::new(&self.source)
        } else {
            WalkDir::new(&self.source).max_depth(1)
        };

        let mut names = Vec::new();
        for entry in walker {
            let entry =
                entry.with_context(|| format!("Failed to read source directory '{}'", self.source.display()))?;
            if entry.file_type().is_file() {
                names.push(normalized_file_stem(entry.path()));
            }
        }
        Ok(names)
    }

    /// Collect all files from the target directories, in the order the directories were given.
    ///
    /// Missing target directories are skipped with a warning.
    fn collect_target_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for target in &self.targets {
            if !target.is_dir() {
                print_warning!("Target directory '{}' does not exist, skipping", target.display());
                continue;
            }
            let walker = if self.config.target_recursive {
                WalkDir::new(target)
            } else {
                WalkDir::new(target).max_depth(1)
            };
            for entry in walker {
                let entry =
                    entry.with_context(|| format!("Failed to read target directory '{}'", target.display()))?;
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        }
        Ok(files)
    }

    /// Check all target files against the source name set.
    ///
    /// Returns the files whose base name duplicates at least one source name,
    /// in the order the files were collected.
    fn find_duplicates(source_names: &[String], target_files: &[PathBuf]) -> Vec<PathBuf> {
        #[cfg(test)]
        let progress_bar = ProgressBar::hidden();
        #[cfg(not(test))]
        let progress_bar = {
            let pb = ProgressBar::new(target_files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(PROGRESS_BAR_TEMPLATE)
                    .expect("Failed to set progress bar template")
                    .progress_chars(PROGRESS_BAR_CHARS),
            );
            pb
        };

        let mut duplicates = Vec::new();
        for path in target_files.iter().progress_with(progress_bar) {
            let target_name = normalized_file_stem(path);
            if source_names
                .iter()
                .any(|source_name| is_duplicate_name(&target_name, source_name))
            {
                duplicates.push(path.clone());
            }
        }
        duplicates
    }

    /// Ask whether the duplicated files should be moved away, and to where.
    ///
    /// Declining the confirmation or giving a blank destination leaves all files in place.
    fn offer_cleanup(duplicates: &[PathBuf]) -> anyhow::Result<()> {
        print!("{}", "Move the duplicated files to another directory? (yes/no): ".magenta());
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !is_affirmative(&answer) {
            println!("Cleanup cancelled");
            return Ok(());
        }

        print!("{}", "Directory to move the duplicated files to: ".magenta());
        std::io::stdout().flush()?;
        let mut directory = String::new();
        std::io::stdin().read_line(&mut directory)?;
        let destination = directory.trim();
        if destination.is_empty() {
            println!("No directory given, cleanup cancelled");
            return Ok(());
        }

        // Detection results are already printed, so a failed cleanup should not fail the run
        match Self::move_duplicates(duplicates, Path::new(destination)) {
            Ok(moved_count) => {
                println!("{}", format!("Moved {moved_count} file(s) to '{destination}'").green());
            }
            Err(e) => print_error!("{e}"),
        }
        Ok(())
    }

    /// Move the given files into the destination directory, creating it if needed.
    ///
    /// Name collisions are resolved by appending a running index to the file name.
    /// A file that cannot be moved is reported and skipped.
    /// Returns the number of files that were moved.
    fn move_duplicates(duplicates: &[PathBuf], destination: &Path) -> anyhow::Result<usize> {
        if !destination.exists() {
            std::fs::create_dir_all(destination)
                .with_context(|| format!("Failed to create directory '{}'", destination.display()))?;
            println!("Created directory: '{}'", destination.display());
        }

        let mut moved_count = 0;
        for path in duplicates {
            let file_name = path_to_filename_string(path);
            if file_name.is_empty() {
                print_error!("Could not get file name for path: {}", path.display());
                continue;
            }
            let new_path = get_unique_path(destination, &file_name);
            match std::fs::rename(path, &new_path) {
                Ok(()) => {
                    println!("Moved: {} -> {}", path_to_string(path), path_to_string(&new_path));
                    moved_count += 1;
                }
                Err(e) => print_error!("Failed to move '{}': {e}", path.display()),
            }
        }
        Ok(moved_count)
    }
}

/// Check if the given answer is an affirmative yes.
fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
