/*!
 * Box-drawing tree rendering of a directory
 */

use std::path::Path;

use tracing::{info, warn};

use crate::scanner::Scanner;
use crate::types::EntryKind;
use crate::utils::display_dir;

/// Connector for every entry but the last one of a listing
pub const MID_CONNECTOR: &str = "├── ";
/// Connector for the last entry of a listing
pub const LAST_CONNECTOR: &str = "└── ";
const MID_INDENT: &str = "│  ";
const LAST_INDENT: &str = "   ";

/// Renders a directory as an indented tree, depth first, siblings sorted
pub struct TreeRenderer<'a> {
    scanner: Scanner<'a>,
    strip_prefix: &'a str,
}

impl<'a> TreeRenderer<'a> {
    /// Create a renderer for one pass
    pub fn new(scanner: Scanner<'a>, strip_prefix: &'a str) -> Self {
        Self {
            scanner,
            strip_prefix,
        }
    }

    /// Render the tree below `root`
    pub fn render(mut self, root: &Path) -> String {
        let mut out = String::new();
        self.render_into(root, "", &mut out);
        out
    }

    /// Append the lines for `dir` to `out`, each prefixed with `indent`
    pub fn render_into(&mut self, dir: &Path, indent: &str, out: &mut String) {
        let entries = match self.scanner.list(dir) {
            Ok(Some(entries)) => entries,
            Ok(None) => return,
            Err(e) => {
                warn!("Warning: {}: {}", dir.display(), e);
                return;
            }
        };

        info!(
            "Generating tree for {}: {} items...",
            display_dir(dir, self.strip_prefix),
            entries.len()
        );

        let last = entries.len().saturating_sub(1);
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == last;
            out.push_str(indent);
            out.push_str(if is_last { LAST_CONNECTOR } else { MID_CONNECTOR });
            out.push_str(&entry.name);

            match entry.kind {
                // Links are shown, never followed
                EntryKind::Symlink => out.push_str(" -> [symlink]\n"),
                EntryKind::Directory => {
                    out.push('\n');
                    let child_indent =
                        format!("{}{}", indent, if is_last { LAST_INDENT } else { MID_INDENT });
                    self.render_into(&entry.path, &child_indent, out);
                }
                EntryKind::File | EntryKind::Other => out.push('\n'),
            }
        }
    }
}
