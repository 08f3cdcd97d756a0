//! Source file enumeration.
//!
//! Walks a source root once per run and caches the resulting file list so
//! every package lookup scans the same files.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names that are never descended into.
pub const IGNORED_DIRS: &[&str] = &["node_modules", "build", "dist", ".git", ".next", ".nuxt"];

/// File extensions (without the dot) that are scanned for usage.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "json"];

/// Check if a directory entry below the root should be pruned.
fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Enumerates all source files under `root`, depth first.
///
/// Order follows the directory listing order of the filesystem, so it is
/// stable on one machine but not across platforms. A missing root yields an
/// empty list.
pub fn collect_source_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e))
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && has_source_extension(entry.path()))
        .map(DirEntry::into_path)
        .collect()
}

/// Lazily computed list of source files for one run.
///
/// The directory tree is walked on the first call to [`files`](Self::files)
/// and the same list is returned afterwards. There is no invalidation.
#[derive(Debug)]
pub struct SourceFileCache {
    root: PathBuf,
    files: OnceCell<Vec<PathBuf>>,
}

impl SourceFileCache {
    /// Create a cache for the given source root. Nothing is read yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: OnceCell::new(),
        }
    }

    /// The source root this cache enumerates.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the cached file list, walking the tree on first use.
    pub fn files(&self) -> &[PathBuf] {
        self.files.get_or_init(|| {
            let files = collect_source_files(&self.root);
            debug!(root = %self.root.display(), count = files.len(), "scanned source files");
            files
        })
    }

    /// Returns true once the tree has been walked.
    pub fn is_populated(&self) -> bool {
        self.files.get().is_some()
    }
}
