//! Directory tree rendering.
//!
//! Produces the familiar box-drawing listing:
//!
//! ```text
//! /srv/app
//! ├── src
//! │   └── main.py
//! ├── .env (hidden)
//! └── app.py
//! ```
//!
//! Entries are sorted directories first, then by case-insensitive name.
//! Directories that cannot be read show up as a single error leaf instead of
//! stopping the walk.

pub mod hidden;

pub use hidden::is_hidden;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File the tree is written to when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "directory_tree.txt";

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// One directory entry as shown in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub path: PathBuf,
    /// Follows symlinks, so a link to a directory sorts with directories
    pub is_dir: bool,
    pub is_symlink: bool,
    pub hidden: bool,
}

impl TreeEntry {
    fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let path = entry.path();
        let is_symlink = entry
            .file_type()
            .map(|file_type| file_type.is_symlink())
            .unwrap_or(false);

        TreeEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: path.is_dir(),
            is_symlink,
            hidden: is_hidden(&path),
            path,
        }
    }

    /// Name with a `(hidden)` marker where applicable
    pub fn display_name(&self) -> String {
        if self.hidden {
            format!("{} (hidden)", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Entries of `dir`, sorted directories first and then case-insensitively.
pub fn list_entries(dir: &Path) -> io::Result<Vec<TreeEntry>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| TreeEntry::from_dir_entry(&e)))
        .collect::<io::Result<Vec<_>>>()?;

    entries.sort_by_cached_key(|entry| (!entry.is_dir, entry.name.to_lowercase()));
    Ok(entries)
}

/// Leaf line for a directory that could not be listed
pub fn error_leaf(prefix: &str, error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::PermissionDenied => format!("{}{}[Permission Denied]", prefix, LAST_BRANCH),
        _ => format!("{}{}[Error: {}]", prefix, LAST_BRANCH, error),
    }
}

/// Tree lines below `root`, without the root line itself.
pub fn generate_tree(root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    walk(root, "", &mut lines);
    lines
}

fn walk(dir: &Path, prefix: &str, lines: &mut Vec<String>) {
    let entries = match list_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "cannot list directory");
            lines.push(error_leaf(prefix, &e));
            return;
        }
    };

    let count = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{}{}{}", prefix, connector, entry.display_name()));

        // links are listed but never followed
        if entry.is_dir && !entry.is_symlink {
            let extension = if is_last { SPACE } else { PIPE };
            walk(&entry.path, &format!("{}{}", prefix, extension), lines);
        }
    }
}

/// Full tree text: the root path on the first line, then the entries.
pub fn render_tree(root: &Path) -> String {
    let mut lines = vec![root.display().to_string()];
    lines.extend(generate_tree(root));
    lines.join("\n")
}

/// Write rendered tree text to `output`.
pub fn write_tree(output: &Path, tree: &str) -> io::Result<()> {
    fs::write(output, tree)
}
