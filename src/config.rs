/*!
 * Configuration handling for repo2txt
 */

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::utils::default_ignore_arg;

/// Command-line arguments for repo2txt
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "repo2txt",
    version = crate::VERSION,
    disable_version_flag = true,
    about = "Dump any repo or directory's contents into a single text file.",
    long_about = "Writes a tree of a directory followed by the contents of every text file below it into one text file, ready to paste into a Large Language Model."
)]
pub struct Args {
    /// Directory to dump
    #[clap(short, long, required_unless_present = "generate")]
    pub directory: Option<PathBuf>,

    /// Generate tree only (no file contents)
    #[clap(short, long)]
    pub tree: bool,

    /// Embed the tree as dump file head
    #[clap(long, overrides_with = "no_embed")]
    pub embed: bool,

    /// Do not embed the tree or per-file path markers
    #[clap(long = "no-embed", overrides_with = "embed")]
    pub no_embed: bool,

    /// Dump binary files as well
    #[clap(short, long)]
    pub binary: bool,

    /// Use .gitignore file to exclude files
    #[clap(long, overrides_with = "no_gitignore")]
    pub gitignore: bool,

    /// Do not read the .gitignore file
    #[clap(long = "no-gitignore", overrides_with = "gitignore")]
    pub no_gitignore: bool,

    /// Custom patterns to ignore, separated by commas
    #[clap(short, long, default_value_t = default_ignore_arg())]
    pub ignore: String,

    /// Output file (default: <dirname>-dump.txt)
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Strip this prefix from displayed paths
    #[clap(short, long, default_value = "")]
    pub strip_prefix: String,

    /// Display name for the directory in header
    #[clap(short, long, default_value = "")]
    pub name: String,

    /// Print version
    #[clap(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Increase diagnostic verbosity (-V, -VV)
    #[clap(short = 'V', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[clap(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory to traverse
    pub target_dir: PathBuf,

    /// Output file path
    pub output_file: PathBuf,

    /// Write the tree only, no file contents
    pub tree_only: bool,

    /// Write the tree header and per-file path markers
    pub embed: bool,

    /// Dump files classified as binary
    pub include_binary: bool,

    /// Whether to read the project .gitignore
    pub respect_gitignore: bool,

    /// Configured ignore patterns (defaults or the user's list)
    pub ignore_patterns: Vec<String>,

    /// Prefix removed from displayed paths, without trailing `/`
    pub strip_prefix: String,

    /// Directory name shown in the tree header
    pub display_dir: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let target_dir = args.directory.unwrap_or_else(|| PathBuf::from("."));
        let strip_prefix = args.strip_prefix.trim_end_matches('/').to_string();

        let output_file = args
            .output
            .unwrap_or_else(|| default_output_file(&target_dir, args.tree));

        let display_dir = if !args.name.is_empty() {
            args.name
        } else if !strip_prefix.is_empty() {
            ".".to_string()
        } else {
            target_dir.to_string_lossy().into_owned()
        };

        Self {
            target_dir,
            output_file,
            tree_only: args.tree,
            embed: !args.no_embed,
            include_binary: args.binary,
            respect_gitignore: !args.no_gitignore,
            ignore_patterns: split_patterns(&args.ignore),
            strip_prefix,
            display_dir,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            Config,
            "{} is not a valid directory.",
            self.target_dir.display()
        );

        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }

    /// Whether the tree block is written
    pub fn writes_tree(&self) -> bool {
        self.tree_only || self.embed
    }
}

/// Split a comma-separated pattern list, dropping blanks
pub fn split_patterns(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// `<dirname>-dump.txt`, or `<dirname>-tree.txt` in tree-only mode
fn default_output_file(target_dir: &Path, tree_only: bool) -> PathBuf {
    let dir_name = fs::canonicalize(target_dir)
        .or_else(|_| std::path::absolute(target_dir))
        .ok()
        .and_then(|absolute| {
            absolute
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "root".to_string());
    let suffix = if tree_only { "tree" } else { "dump" };
    PathBuf::from(format!("{}-{}.txt", dir_name, suffix))
}
