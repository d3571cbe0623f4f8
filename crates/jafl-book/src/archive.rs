//! Book archives.
//!
//! Every `*.zip` file in the root directory is one book, numbered from 1 in
//! name order. An archive is unpacked into a directory named after it,
//! unless that directory already exists.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use jafl_common::warn_once;
use zip::ZipArchive;

use crate::error::BookError;

const ARCHIVE_EXTENSION: &str = "zip";

/// The book archives in `root`, sorted by file name.
///
/// # Errors
///
/// Fails when `root` cannot be listed.
pub fn find_archives(root: &Path) -> Result<Vec<PathBuf>, BookError> {
    let mut archives: Vec<PathBuf> = fs::read_dir(root)
        .map_err(BookError::io(root))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == ARCHIVE_EXTENSION)
        })
        .collect();
    archives.sort();
    Ok(archives)
}

/// Directory a book archive is unpacked into: the archive path without its
/// extension.
#[must_use]
pub fn book_dir(archive: &Path) -> PathBuf {
    archive.with_extension("")
}

/// Unpack `archive` into [`book_dir`] unless that directory exists.
///
/// Returns the book directory.
///
/// # Errors
///
/// Fails when the archive cannot be read or a file cannot be written.
pub fn ensure_extracted(archive: &Path) -> Result<PathBuf, BookError> {
    let dir = book_dir(archive);
    if dir.is_dir() {
        log::debug!(target: "jafl::book", "located {}", dir.display());
    } else {
        log::info!(target: "jafl::book", "extracting {}", archive.display());
        let count = extract_archive(archive, &dir)?;
        log::info!(target: "jafl::book", "extracted {count} files into {}", dir.display());
    }
    Ok(dir)
}

/// Unpack every file of `archive` into `dest`.
///
/// Entries whose path would leave `dest` are skipped with a warning.
/// Returns the number of files written.
///
/// # Errors
///
/// Fails when the archive cannot be read or a file cannot be written.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<usize, BookError> {
    let zip_error = |source| BookError::Zip {
        path: archive.to_path_buf(),
        source,
    };

    let file = File::open(archive).map_err(BookError::io(archive))?;
    let mut zip = ZipArchive::new(file).map_err(zip_error)?;
    fs::create_dir_all(dest).map_err(BookError::io(dest))?;

    let mut extracted = 0;
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(zip_error)?;
        let Some(relative) = entry.enclosed_name() else {
            warn_once(
                "Archive",
                &format!(
                    "skipping entry '{}' of {}: path leaves the book directory",
                    entry.name(),
                    archive.display()
                ),
            );
            continue;
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(BookError::io(&out_path))?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(BookError::io(parent))?;
        }
        let mut out_file = File::create(&out_path).map_err(BookError::io(&out_path))?;
        let _ = io::copy(&mut entry, &mut out_file).map_err(BookError::io(&out_path))?;
        log::debug!(target: "jafl::book", "extracted {}", out_path.display());
        extracted += 1;
    }
    Ok(extracted)
}
