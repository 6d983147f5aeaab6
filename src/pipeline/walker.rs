//! Input tree traversal and output path mirroring.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::image::{SourceFormat, OUTPUT_EXTENSION};

/// One conversion: an input file and where its PNG counterpart goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FileTask {
    /// Mirror `path` from `input_root` into `output_root` with a `.png` extension.
    ///
    /// Returns `None` if `path` is not below `input_root`.
    #[must_use]
    pub fn new(input_root: &Path, output_root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(input_root).ok()?;
        if relative.as_os_str().is_empty() {
            return None;
        }

        Some(Self {
            input: path.to_path_buf(),
            output: replace_extension(&output_root.join(relative)),
        })
    }
}

/// Swap everything after the last dot of the file name for `.png`.
///
/// Unlike [`Path::with_extension`], a dot-file such as `.bmp` becomes `.png`.
fn replace_extension(path: &Path) -> PathBuf {
    match path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
    {
        Some((stem, _)) => path.with_file_name(format!("{stem}.{OUTPUT_EXTENSION}")),
        None => path.with_extension(OUTPUT_EXTENSION),
    }
}

/// Outcome of visiting one walk entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkItem {
    /// An eligible file and its mirrored output.
    Convert(FileTask),
    /// A file without the source format's extension.
    Skip(PathBuf),
}

/// Whether a non-directory entry should be converted for `format`.
#[must_use]
pub fn is_eligible(path: &Path, format: SourceFormat) -> bool {
    format.matches_path(path)
}

/// Walk `input_root` in file-name order, yielding one item per non-directory entry.
///
/// If `output_root` exists and lies inside `input_root` it is pruned so
/// freshly written outputs are never picked up as inputs. Roots are compared
/// after canonicalization, so differently spelled paths still match.
pub fn walk<'a>(
    input_root: &'a Path,
    output_root: &'a Path,
    format: SourceFormat,
) -> impl Iterator<Item = Result<WalkItem>> + 'a {
    let canonical_output = fs::canonicalize(output_root).ok();

    WalkDir::new(input_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_output_root(entry, canonical_output.as_deref()))
        .filter_map(move |entry| match entry {
            Err(err) => Some(Err(Error::from(err))),
            Ok(entry) => visit(&entry, input_root, output_root, format).map(Ok),
        })
}

fn is_output_root(entry: &DirEntry, canonical_output: Option<&Path>) -> bool {
    let Some(output_root) = canonical_output else {
        return false;
    };

    entry.depth() > 0
        && entry.file_type().is_dir()
        && fs::canonicalize(entry.path()).is_ok_and(|path| path == output_root)
}

fn visit(
    entry: &DirEntry,
    input_root: &Path,
    output_root: &Path,
    format: SourceFormat,
) -> Option<WalkItem> {
    if entry.file_type().is_dir() {
        return None;
    }

    let path = entry.path();
    if !is_eligible(path, format) {
        tracing::debug!("Skipping {}", path.display());
        return Some(WalkItem::Skip(path.to_path_buf()));
    }

    FileTask::new(input_root, output_root, path).map(WalkItem::Convert)
}
