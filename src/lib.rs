pub mod matching;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::Shell;
use colored::{ColoredString, Colorize};
use unicode_normalization::UnicodeNormalization;

/// Format bool value as a coloured string.
#[must_use]
pub fn colorize_bool(value: bool) -> ColoredString {
    if value { "true".green() } else { "false".red() }
}

/// Convert `OsStr` to String with invalid Unicode handling.
pub fn os_str_to_string(name: &OsStr) -> String {
    name.to_str().map_or_else(
        || name.to_string_lossy().replace('\u{FFFD}', ""),
        std::string::ToString::to_string,
    )
}

/// Convert given path to string with invalid Unicode handling.
pub fn path_to_string(path: &Path) -> String {
    path.to_str().map_or_else(
        || path.to_string_lossy().to_string().replace('\u{FFFD}', ""),
        std::string::ToString::to_string,
    )
}

/// Convert given path to filename string with invalid Unicode handling.
#[must_use]
pub fn path_to_filename_string(path: &Path) -> String {
    os_str_to_string(path.file_name().unwrap_or_default())
}

/// Convert given path to file stem string with invalid Unicode handling.
#[must_use]
pub fn path_to_file_stem_string(path: &Path) -> String {
    os_str_to_string(path.file_stem().unwrap_or_default())
}

/// Get the file stem from a path with special characters retained instead of decomposed.
///
/// Rust uses Unicode NFD (Normalization Form Decomposed) by default,
/// which converts special chars like "å" to "a\u{30a}".
/// Use NFC (Normalization Form Composed) from the `unicode_normalization` crate
/// so names read from disk compare equal to composed input.
#[must_use]
pub fn normalized_file_stem(path: &Path) -> String {
    path_to_file_stem_string(path).nfc().collect()
}

/// Resolve the given path to an absolute directory path.
///
/// The path must point to an existing directory,
/// otherwise an error is returned.
#[inline]
pub fn resolve_directory_path(path: &Path) -> Result<PathBuf> {
    let directory = PathBuf::from(path_to_string(path).trim());
    if !directory.is_dir() {
        anyhow::bail!(
            "Directory does not exist or is not accessible: '{}'",
            directory.display()
        );
    }
    dunce::canonicalize(&directory)
        .with_context(|| format!("Failed to resolve directory path: '{}'", directory.display()))
}

/// Return a path for the given file name inside the directory that does not exist yet.
///
/// If the name is already taken, a running index is appended to the file stem
/// until a free name is found: `name (1).ext`, `name (2).ext`, and so on.
///
/// ```rust
/// use std::path::Path;
/// use dupe_sweep::get_unique_path;
///
/// let path = get_unique_path(Path::new("/nonexistent"), "report.txt");
/// assert_eq!(path, Path::new("/nonexistent/report.txt"));
/// ```
#[must_use]
pub fn get_unique_path(directory: &Path, file_name: &str) -> PathBuf {
    let path = directory.join(file_name);
    if !path.exists() {
        return path;
    }

    let stem = path_to_file_stem_string(Path::new(file_name));
    let extension = os_str_to_string(Path::new(file_name).extension().unwrap_or_default());
    let mut index: u32 = 1;
    loop {
        let name = if extension.is_empty() {
            format!("{stem} ({index})")
        } else {
            format!("{stem} ({index}).{extension}")
        };
        let candidate = directory.join(name);
        if !candidate.exists() {
            return candidate;
        }
        index += 1;
    }
}

/// Format duration from seconds as a human-readable string
#[must_use]
pub fn format_duration_seconds(seconds: f64) -> String {
    let secs = seconds as u64;
    if secs >= 3600 {
        format!("{}h {:02}m {:02}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{seconds:.1}s")
    }
}

#[inline]
pub fn print_error(message: &str) {
    eprintln!("{}", format!("Error: {message}").red());
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        $crate::print_error(&format!($($arg)*))
    };
}

#[inline]
pub fn print_warning(message: &str) {
    eprintln!("{}", message.yellow());
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        $crate::print_warning(&format!($($arg)*))
    };
}

#[inline]
pub fn print_bold(message: &str) {
    println!("{}", message.bold());
}

#[macro_export]
macro_rules! print_bold {
    ($($arg:tt)*) => {
        $crate::print_bold(&format!($($arg)*))
    };
}

/// Generate a shell completion script for the given shell to stdout.
pub fn generate_shell_completion(shell: Shell, mut command: Command, command_name: &str) {
    clap_complete::generate(shell, &mut command, command_name, &mut std::io::stdout());
}
