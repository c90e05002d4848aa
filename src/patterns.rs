/*!
 * Ignore-pattern loading and memoized matching
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};

/// Name of the per-project exclusion file
pub const PROJECT_IGNORE_FILE: &str = ".gitignore";

/// Read exclusion patterns from the project ignore file in `directory`.
///
/// Blank lines and `#` comments are dropped, each line is trimmed and loses
/// one trailing `/`. A missing or unreadable file yields no patterns.
pub fn load_project_ignore_file(directory: &Path) -> Vec<String> {
    let path = directory.join(PROJECT_IGNORE_FILE);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(_) => return Vec::new(),
    };

    let patterns: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.strip_suffix('/').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(
        "Loaded {} patterns from {}",
        patterns.len(),
        path.display()
    );
    patterns
}

/// Immutable set of glob patterns for one run.
///
/// Patterns follow shell `fnmatch` rules: `*` also matches `/`, a leading
/// `!` is an ordinary character and backslashes are literal. A pattern that
/// does not parse as a glob is matched literally.
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
    set: GlobSet,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl IgnorePatterns {
    /// Build a pattern set, dropping empty entries
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty())
            .collect();

        let mut builder = GlobSetBuilder::new();
        for glob in patterns.iter().filter_map(|p| compile(p)) {
            builder.add(glob);
        }
        let set = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build ignore pattern set: {}", e);
            GlobSet::empty()
        });

        Self { patterns, set }
    }

    /// Merge the configured list with the project ignore file of `root`
    pub fn for_run(configured: &[String], root: &Path, respect_gitignore: bool) -> Self {
        let mut merged = configured.to_vec();
        if respect_gitignore {
            merged.extend(load_project_ignore_file(root));
        }
        Self::new(merged)
    }

    /// Number of patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    fn matches(&self, path: &str) -> bool {
        if self.set.is_match(path) {
            return true;
        }
        Path::new(path)
            .file_name()
            .is_some_and(|name| self.set.is_match(name))
    }
}

fn compile(pattern: &str) -> Option<Glob> {
    let build = |source: &str| {
        GlobBuilder::new(source)
            .literal_separator(false)
            .backslash_escape(false)
            .build()
    };
    match build(pattern) {
        Ok(glob) => Some(glob),
        Err(e) => {
            debug!("Matching '{}' literally: {}", pattern, e);
            build(&globset::escape(pattern)).ok()
        }
    }
}

/// Memoized ignore verdicts keyed by the exact path string.
///
/// The pattern set never changes during a run, so entries are never
/// invalidated. Callers must pass paths in a consistent form.
#[derive(Debug, Default)]
pub struct MatchCache {
    verdicts: HashMap<String, bool>,
    hits: usize,
    misses: usize,
}

impl MatchCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized paths
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    /// Whether nothing has been memoized yet
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to run the matcher
    pub fn misses(&self) -> usize {
        self.misses
    }
}

/// Whether `path` or its basename matches any pattern, memoized in `cache`
pub fn should_ignore(path: &str, patterns: &IgnorePatterns, cache: &mut MatchCache) -> bool {
    if let Some(&verdict) = cache.verdicts.get(path) {
        cache.hits += 1;
        return verdict;
    }

    let verdict = patterns.matches(path);
    cache.misses += 1;
    cache.verdicts.insert(path.to_string(), verdict);
    verdict
}
