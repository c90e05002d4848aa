/*!
 * Streaming dump of file contents
 */

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::scanner::Scanner;
use crate::types::{DumpStats, EntryKind};
use crate::utils::{display_path, is_binary, HEAD_SIZE};

/// Size of the chunks copied after the head bytes
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Options for a content dump pass
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// Precede each file with a `--- Path: ... ---` marker
    pub include_headers: bool,
    /// Dump files classified as binary instead of skipping them
    pub include_binary: bool,
    /// Prefix removed from displayed paths
    pub strip_prefix: String,
}

/// Writes file contents straight to a sink in tree order.
///
/// Read failures are reported and skipped. Sink failures abort the pass.
pub struct ContentDumper<'a> {
    scanner: Scanner<'a>,
    options: DumpOptions,
    progress: Arc<ProgressBar>,
    /// Paths already handled in this pass
    done: HashSet<PathBuf>,
    stats: DumpStats,
}

impl<'a> ContentDumper<'a> {
    /// Create a dumper for one pass
    pub fn new(scanner: Scanner<'a>, options: DumpOptions, progress: Arc<ProgressBar>) -> Self {
        Self {
            scanner,
            options,
            progress,
            done: HashSet::new(),
            stats: DumpStats::default(),
        }
    }

    /// Dump everything below `root` into `sink`
    pub fn dump<W: Write>(mut self, root: &Path, sink: &mut W) -> Result<DumpStats> {
        self.dump_dir(root, sink)?;
        self.stats.directories = self.scanner.visited_count();
        Ok(self.stats)
    }

    fn dump_dir<W: Write>(&mut self, dir: &Path, sink: &mut W) -> Result<()> {
        let entries = match self.scanner.list(dir) {
            Ok(Some(entries)) => entries,
            Ok(None) => return Ok(()),
            Err(e) => {
                self.warn(dir, &e);
                return Ok(());
            }
        };

        for entry in entries {
            if !self.done.insert(entry.path.clone()) {
                continue;
            }

            match entry.kind {
                EntryKind::Symlink => {
                    info!("Skipping symlink {}", entry.path.display());
                    self.stats.skipped_symlinks.push(entry.path);
                }
                EntryKind::Directory => self.dump_dir(&entry.path, sink)?,
                EntryKind::File => self.dump_file(&entry.path, sink)?,
                EntryKind::Other => debug!("Skipping special file {}", entry.path.display()),
            }
        }

        Ok(())
    }

    fn dump_file<W: Write>(&mut self, path: &Path, sink: &mut W) -> Result<()> {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                self.warn(path, &e);
                return Ok(());
            }
        };

        let mut head = Vec::with_capacity(HEAD_SIZE);
        if let Err(e) = Read::by_ref(&mut file).take(HEAD_SIZE as u64).read_to_end(&mut head) {
            self.warn(path, &e);
            return Ok(());
        }

        if is_binary(&head) && !self.options.include_binary {
            info!("Skipping binary file {}", path.display());
            self.stats.skipped_binary.push(path.to_path_buf());
            return Ok(());
        }

        let shown = display_path(path, &self.options.strip_prefix);
        if self.options.include_headers {
            write!(sink, "\n\n--- Path: {} ---\n\n", shown)?;
        }
        info!("Dumping {}", shown);
        self.progress.set_message(shown);
        self.progress.inc(1);

        sink.write_all(&head)?;
        let mut written = head.len() as u64;

        let mut buffer = vec![0u8; CHUNK_SIZE];
        loop {
            match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    sink.write_all(&buffer[..n])?;
                    written += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.warn(path, &e);
                    break;
                }
            }
        }
        sink.write_all(b"\n")?;

        self.stats.files_dumped += 1;
        self.stats.content_bytes += written;
        Ok(())
    }

    fn warn(&mut self, path: &Path, error: &dyn std::fmt::Display) {
        warn!("Warning: {}: {}", path.display(), error);
        self.stats.warnings += 1;
    }
}
