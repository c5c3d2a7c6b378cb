//! Rename files and directories with a copy-and-delete fallback
//!
//! `std::fs::rename` fails across filesystems (and in some minimal container
//! images). [`rename`] tries it first and falls back to copying the data and
//! deleting the original.

use crate::error::FsError;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Result type for filesystem helpers
pub type Result<T> = std::result::Result<T, FsError>;

/// Whether `path` exists and is a regular file (symlinks followed).
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Whether `path` exists and is a directory (symlinks followed).
pub fn folder_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Move `src` to `dst`, file or directory.
///
/// A plain `rename(2)` is attempted first. When it fails:
///
/// - a directory is merged into `dst` with [`rename_dir`]
/// - a file whose destination already exists and whose file name is listed in
///   `ignore_existing` is left where it is
/// - any other file is moved with [`rename_file`]
///
/// # Errors
///
/// [`FsError::Stat`] if `src` cannot be inspected, otherwise whatever the
/// fallback reports.
///
/// # Examples
///
/// ```no_run
/// use utilkit::rename;
///
/// // Keep an existing config.yml in /data instead of overwriting it
/// rename("/tmp/staging", "/data", &["config.yml"])?;
/// # Ok::<(), utilkit::FsError>(())
/// ```
pub fn rename(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    ignore_existing: &[&str],
) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    match fs::rename(src, dst) {
        Ok(()) => return Ok(()),
        Err(err) => debug!(
            src = %src.display(),
            dst = %dst.display(),
            error = %err,
            "rename failed, falling back to copy"
        ),
    }

    let metadata = fs::metadata(src).map_err(|source| FsError::Stat {
        path: src.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        return rename_dir(src, dst, ignore_existing);
    }

    let ignored = src
        .file_name()
        .is_some_and(|name| ignore_existing.iter().any(|i| name == OsStr::new(i)));
    if ignored && file_exists(dst) {
        info!(src = %src.display(), "destination exists, leaving file in place");
        return Ok(());
    }

    rename_file(src, dst)
}

/// Move a single file by copying its bytes and deleting the original.
///
/// `dst` is created or truncated.
pub fn rename_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    let mut input = File::open(src).map_err(|source| FsError::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;
    let mut output = File::create(dst).map_err(|source| FsError::CreateDest {
        path: dst.to_path_buf(),
        source,
    })?;

    io::copy(&mut input, &mut output).map_err(|source| FsError::Copy {
        path: dst.to_path_buf(),
        source,
    })?;
    drop(input);
    drop(output);

    fs::remove_file(src).map_err(|source| FsError::RemoveSource {
        path: src.to_path_buf(),
        source,
    })?;

    debug!(src = %src.display(), dst = %dst.display(), "moved file");
    Ok(())
}

/// Merge the tree under `src` into `dst`, moving every file.
///
/// Directories are recreated under `dst` as needed. A file whose destination
/// already exists is skipped if its path relative to `src` (for example
/// `conf/app.yml`) is listed in `ignore_existing`; other existing files are
/// overwritten. Source directories left empty afterwards are removed, those
/// still holding skipped files are kept.
pub fn rename_dir(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    ignore_existing: &[&str],
) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    create_dir(dst)?;

    let entries = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for entry in entries {
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&target)?;
            continue;
        }

        if file_exists(&target) && is_ignored(relative, ignore_existing) {
            info!(path = %relative.display(), "destination exists, leaving file in place");
            continue;
        }

        rename_file(entry.path(), &target)?;
    }

    remove_empty_dirs(src);
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| FsError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn is_ignored(relative: &Path, ignore_existing: &[&str]) -> bool {
    ignore_existing
        .iter()
        .any(|i| Path::new(i.trim_start_matches('/')) == relative)
}

fn remove_empty_dirs(root: &Path) {
    let dirs = WalkDir::new(root)
        .contents_first(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_dir());

    for dir in dirs {
        // Non-empty directories still hold skipped files
        if fs::remove_dir(dir.path()).is_err() {
            debug!(path = %dir.path().display(), "keeping non-empty source directory");
        }
    }
}
