/*!
 * Directory listing shared by the tree and content passes
 */

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::patterns::{should_ignore, IgnorePatterns, MatchCache};
use crate::types::{Entry, EntryKind};

/// Lists directories for a single traversal pass.
///
/// Each pass builds its own scanner, so every pass has its own visited
/// set while the pattern cache may be shared between passes.
pub struct Scanner<'a> {
    /// Patterns for this run
    patterns: &'a IgnorePatterns,
    /// Shared verdict cache
    cache: &'a mut MatchCache,
    /// Canonical identities of directories already entered
    visited: HashSet<PathBuf>,
    /// Canonical path of a file that must never be listed (the output)
    excluded: Option<PathBuf>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with a fresh visited set
    pub fn new(patterns: &'a IgnorePatterns, cache: &'a mut MatchCache) -> Self {
        Self {
            patterns,
            cache,
            visited: HashSet::new(),
            excluded: None,
        }
    }

    /// Hide `path` from every listing, typically the dump's own output file
    pub fn exclude(mut self, path: Option<PathBuf>) -> Self {
        self.excluded = path;
        self
    }

    /// Number of distinct directories entered so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// List the filtered, sorted children of `dir`.
    ///
    /// Returns `Ok(None)` when the directory's canonical identity was
    /// already entered during this pass, and an error when `dir` cannot be
    /// read at all.
    pub fn list(&mut self, dir: &Path) -> io::Result<Option<Vec<Entry>>> {
        let identity = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        if !self.visited.insert(identity) {
            trace!("Already visited {}", dir.display());
            return Ok(None);
        }

        let mut entries = Vec::new();
        for result in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let dir_entry = match result {
                Ok(dir_entry) => dir_entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!("Warning: {}: {}", dir.display(), e);
                    continue;
                }
            };

            let path = dir_entry.path().to_path_buf();
            if should_ignore(&path.to_string_lossy(), self.patterns, self.cache) {
                continue;
            }

            let file_type = dir_entry.file_type();
            let kind = if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            if kind == EntryKind::File && self.is_excluded(&path, dir_entry.file_name()) {
                continue;
            }

            entries.push(Entry {
                name: dir_entry.file_name().to_string_lossy().into_owned(),
                path,
                kind,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Some(entries))
    }

    fn is_excluded(&self, path: &Path, name: &OsStr) -> bool {
        match &self.excluded {
            Some(excluded) if excluded.file_name() == Some(name) => fs::canonicalize(path)
                .map(|canonical| &canonical == excluded)
                .unwrap_or(false),
            _ => false,
        }
    }
}
