/*!
 * Utility functions for repo2txt
 */

use std::path::Path;

use once_cell::sync::Lazy;

/// Number of leading bytes sampled for binary detection
pub const HEAD_SIZE: usize = 1024;

/// Default patterns to ignore, replaced wholesale by `--ignore`
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Python virtualenvs
        ".venv",
        // Version Control
        ".git",
        ".gitignore",
        // Lock files
        "*.lock",
        // Editor settings
        ".editorconfig",
        // Local environment files
        ".env.*",
    ]
});

/// The default ignore list as a single comma-separated string
pub fn default_ignore_arg() -> String {
    DEFAULT_IGNORE.join(",")
}

/// Bytes that may appear in text: BEL, BS, TAB, LF, FF, CR, ESC and 0x20..=0xFF minus DEL
static TEXT_CHARS: [bool; 256] = text_chars();

const fn text_chars() -> [bool; 256] {
    let mut table = [false; 256];
    let mut byte = 0x20;
    while byte < 256 {
        table[byte] = true;
        byte += 1;
    }
    table[0x7f] = false;

    let controls = [7, 8, 9, 10, 12, 13, 27];
    let mut i = 0;
    while i < controls.len() {
        table[controls[i]] = true;
        i += 1;
    }
    table
}

/// Heuristically classify a byte sample as binary.
///
/// A sample is binary as soon as it holds one byte outside the text set.
/// The upper half of the byte range counts as text, so Latin-1 and UTF-8
/// content both pass; an empty sample is text.
pub fn is_binary(sample: &[u8]) -> bool {
    sample.iter().any(|&b| !TEXT_CHARS[usize::from(b)])
}

/// Path as shown to the user, with `strip_prefix` removed when it matches.
///
/// Matching is a plain string prefix test; leading separators left over
/// after stripping are dropped. Only cosmetic: traversal and ignore
/// matching always use the real path.
pub fn display_path(path: &Path, strip_prefix: &str) -> String {
    let path = path.to_string_lossy();
    if strip_prefix.is_empty() {
        return path.into_owned();
    }
    match path.strip_prefix(strip_prefix) {
        Some(rest) => rest.trim_start_matches('/').to_string(),
        None => path.into_owned(),
    }
}

/// Like [`display_path`], but a directory stripped down to nothing shows as `.`
pub fn display_dir(path: &Path, strip_prefix: &str) -> String {
    let shown = display_path(path, strip_prefix);
    if shown.is_empty() {
        ".".to_string()
    } else {
        shown
    }
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
