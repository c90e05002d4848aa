/*!
 * Output assembly: tree header block followed by the content dump
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::debug;

use crate::config::Config;
use crate::dumper::{ContentDumper, DumpOptions};
use crate::error::{DumpError, Result};
use crate::patterns::{IgnorePatterns, MatchCache};
use crate::scanner::Scanner;
use crate::tree::TreeRenderer;
use crate::types::RunStats;

const HEADER_TITLE: &str = "Dump tree for directory: ";
/// Dashes in the frame rule before the display name's share
const RULE_BASE: usize = 24;

/// Writes the dump described by a [`Config`]
pub struct DumpWriter {
    /// Writer configuration
    config: Config,
    /// Progress spinner updated per dumped file
    progress: Arc<ProgressBar>,
}

impl DumpWriter {
    /// Create a new dump writer
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Create the configured output file and write the dump into it
    pub fn write_to_file(&self) -> Result<RunStats> {
        let path = &self.config.output_file;
        let file = File::create(path).map_err(|e| DumpError::from(e).into_output(path))?;
        let excluded = fs::canonicalize(path).ok();

        let mut writer = BufWriter::new(file);
        let stats = self
            .write_excluding(&mut writer, excluded)
            .map_err(|e| e.into_output(path))?;
        writer
            .flush()
            .map_err(|e| DumpError::from(e).into_output(path))?;

        Ok(stats)
    }

    /// Write the dump into an arbitrary sink
    pub fn write<W: Write>(&self, sink: &mut W) -> Result<RunStats> {
        self.write_excluding(sink, None)
    }

    fn write_excluding<W: Write>(
        &self,
        sink: &mut W,
        excluded: Option<PathBuf>,
    ) -> Result<RunStats> {
        let config = &self.config;
        let patterns = IgnorePatterns::for_run(
            &config.ignore_patterns,
            &config.target_dir,
            config.respect_gitignore,
        );
        debug!("Using {} ignore patterns", patterns.pattern_count());

        // One cache for both passes; visited sets are per pass.
        let mut cache = MatchCache::new();
        let mut stats = RunStats::default();

        if config.writes_tree() {
            let scanner = Scanner::new(&patterns, &mut cache).exclude(excluded.clone());
            let tree = TreeRenderer::new(scanner, &config.strip_prefix).render(&config.target_dir);
            stats.tree_lines = tree.lines().count();

            sink.write_all(tree_header(&config.display_dir).as_bytes())?;
            sink.write_all(tree.as_bytes())?;
            sink.write_all(b"\n")?;
        }

        if !config.tree_only {
            let scanner = Scanner::new(&patterns, &mut cache).exclude(excluded);
            let options = DumpOptions {
                include_headers: config.embed,
                include_binary: config.include_binary,
                strip_prefix: config.strip_prefix.clone(),
            };
            stats.dump = ContentDumper::new(scanner, options, Arc::clone(&self.progress))
                .dump(&config.target_dir, sink)?;
        }

        stats.cached_paths = cache.len();
        stats.cache_hits = cache.hits();
        stats.cache_misses = cache.misses();
        Ok(stats)
    }
}

/// The framed title that opens the tree block
pub fn tree_header(display_dir: &str) -> String {
    let rule = "-".repeat(RULE_BASE + display_dir.chars().count());
    format!(
        "\n+-{rule}-+\n| {title}{dir} |\n+-{rule}-+\n",
        rule = rule,
        title = HEADER_TITLE,
        dir = display_dir
    )
}
