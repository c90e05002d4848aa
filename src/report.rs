/*!
 * Reporting functionality for repo2txt
 *
 * Renders the option echo printed before a run and the summary printed
 * after it, using the tabled library for consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::config::Config;
use crate::types::RunStats;
use crate::utils::format_file_size;

/// Statistics for a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Output file path
    pub output_file: String,
    /// Size of the output file in bytes
    pub output_bytes: u64,
    /// Time taken by the run
    pub duration: Duration,
    /// Counters collected while writing
    pub stats: RunStats,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Option")]
    key: String,

    #[tabled(rename = "Value")]
    value: String,
}

impl Row {
    fn new(key: &str, value: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Report generator for repo2txt runs
pub struct Reporter;

impl Reporter {
    /// Table echoing the resolved configuration
    pub fn options_table(config: &Config) -> String {
        let rows = vec![
            Row::new("directory", config.target_dir.display()),
            Row::new("output", config.output_file.display()),
            Row::new("tree", config.tree_only),
            Row::new("embed", config.embed),
            Row::new("binary", config.include_binary),
            Row::new("gitignore", config.respect_gitignore),
            Row::new("ignore", config.ignore_patterns.join(",")),
            Row::new("strip_prefix", &config.strip_prefix),
            Row::new("name", &config.display_dir),
        ];
        Self::render(rows)
    }

    /// Table summarizing a finished run
    pub fn summary(report: &RunReport) -> String {
        let dump = &report.stats.dump;
        let rows = vec![
            Row::new("Output File", &report.output_file),
            Row::new("Output Size", format_file_size(report.output_bytes)),
            Row::new("Process Time", format!("{:.4?}", report.duration)),
            Row::new("Tree Lines", report.stats.tree_lines),
            Row::new("Directories", dump.directories),
            Row::new("Files Dumped", dump.files_dumped),
            Row::new("Binary Files Skipped", dump.skipped_binary.len()),
            Row::new("Symlinks Skipped", dump.skipped_symlinks.len()),
            Row::new("Warnings", dump.warnings),
            Row::new(
                "Ignore Cache",
                format!(
                    "{} paths ({} hits / {} misses)",
                    report.stats.cached_paths, report.stats.cache_hits, report.stats.cache_misses
                ),
            ),
        ];
        Self::render(rows)
    }

    fn render(rows: Vec<Row>) -> String {
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}
