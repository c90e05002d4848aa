/*!
 * repo2txt - Dump a repository or directory into a single text file
 *
 * This library renders a directory tree and the contents of the text files
 * below it into one artifact, for use as context for Large Language Models.
 */

pub mod config;
pub mod dumper;
pub mod error;
pub mod patterns;
pub mod report;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use dumper::{ContentDumper, DumpOptions};
pub use error::{DumpError, Result};
pub use patterns::{load_project_ignore_file, should_ignore, IgnorePatterns, MatchCache};
pub use report::{Reporter, RunReport};
pub use scanner::Scanner;
pub use tree::TreeRenderer;
pub use types::{DumpStats, Entry, EntryKind, RunStats};
pub use utils::{display_path, format_file_size, is_binary, DEFAULT_IGNORE};
pub use writer::DumpWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
