/*!
 * Core types and data structures for repo2txt
 */

use std::path::PathBuf;

/// Represents different types of filesystem entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Symbolic link, never followed
    Symlink,
    /// Directory containing other entries
    Directory,
    /// Regular file
    File,
    /// Sockets, FIFOs, devices
    Other,
}

/// One listed child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Entry name (final path component)
    pub name: String,
    /// Path used for filesystem access and ignore matching
    pub path: PathBuf,
    /// What the entry is, without following links
    pub kind: EntryKind,
}

/// Counters collected by a content dump pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpStats {
    /// Files whose bytes were written
    pub files_dumped: usize,
    /// File content bytes written, excluding headers and separators
    pub content_bytes: u64,
    /// Files skipped as binary
    pub skipped_binary: Vec<PathBuf>,
    /// Symbolic links skipped
    pub skipped_symlinks: Vec<PathBuf>,
    /// Recovered listing and read failures
    pub warnings: usize,
    /// Distinct directories entered
    pub directories: usize,
}

/// Everything a complete run produced, besides the output itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Lines in the rendered tree, zero when no tree was written
    pub tree_lines: usize,
    /// Content pass counters
    pub dump: DumpStats,
    /// Distinct paths with a memoized ignore verdict
    pub cached_paths: usize,
    /// Ignore lookups answered from the cache
    pub cache_hits: usize,
    /// Ignore lookups that ran the matcher
    pub cache_misses: usize,
}
