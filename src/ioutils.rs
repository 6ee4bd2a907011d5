use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Copies a single file, creating the destination's parent directories first.
pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path.as_ref(), dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Recursively copies the contents of `source_dir` into `dest_dir`.
///
/// Existing files in `dest_dir` with the same relative path are replaced, callers
/// guard against that by only copying into directories that did not exist.
pub fn copy_dir_all<P: AsRef<Path>>(source_dir: P, dest_dir: P) -> Result<()> {
    let source_dir = source_dir.as_ref();
    let dest_dir = dest_dir.as_ref();

    create_dir_all(dest_dir)?;
    for dir_entry in WalkDir::new(source_dir).min_depth(1) {
        let entry = dir_entry?;
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|e| Error::IoError(std::io::Error::other(e.to_string())))?;
        let target = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            log::trace!("Copying '{}' to '{}'", entry.path().display(), target.display());
            copy_file(entry.path(), target.as_path())?;
        }
    }
    Ok(())
}

/// Copies a file or a whole directory tree to `dest_path`.
pub fn copy_path<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let source_path = source_path.as_ref();
    if source_path.is_dir() {
        copy_dir_all(source_path, dest_path.as_ref())
    } else {
        copy_file(source_path, dest_path.as_ref())
    }
}

pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(path.as_ref()).map_err(Error::IoError)
}
