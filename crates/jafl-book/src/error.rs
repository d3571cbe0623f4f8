//! Errors of the book pipeline. Every variant names the file involved.

use std::io;
use std::path::PathBuf;

use jafl_markup::ParseError;
use jafl_render::AdventurersError;
use thiserror::Error;

/// A book could not be built.
#[derive(Debug, Error)]
pub enum BookError {
    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// An archive could not be read.
    #[error("{}: {source}", .path.display())]
    Zip {
        /// The archive.
        path: PathBuf,
        /// Underlying error.
        source: zip::result::ZipError,
    },

    /// A markup file could not be converted.
    #[error("{}: {source}", .path.display())]
    Parse {
        /// The markup file.
        path: PathBuf,
        /// Underlying error.
        source: ParseError,
    },

    /// `Adventurers.xml` could not be loaded.
    #[error("{}: {source}", .path.display())]
    Adventurers {
        /// The adventurers file.
        path: PathBuf,
        /// Underlying error.
        source: AdventurersError,
    },

    /// `--book` asked for a book that has no archive.
    #[error("book {requested} requested but only {available} book archive(s) found")]
    NoSuchBook {
        /// Requested book number.
        requested: usize,
        /// Number of archives found.
        available: usize,
    },
}

impl BookError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
