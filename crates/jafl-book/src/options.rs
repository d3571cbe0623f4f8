//! Resolved configuration of one build.

use std::path::PathBuf;

use jafl_render::Menu;

use crate::order::FileOrder;

/// Default root directory.
pub const DEFAULT_ROOT: &str = ".";

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "output.html";

/// Everything [`build`](crate::build) and [`run`](crate::run) need to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Directory holding the book archives and the shared pages.
    pub root: PathBuf,
    /// HTML file to write.
    pub output: PathBuf,
    /// Convert only this book (1-based) instead of all of them.
    pub book: Option<usize>,
    /// Order of the files inside each book.
    pub file_order: FileOrder,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, DEFAULT_OUTPUT)
    }
}

impl BuildOptions {
    /// Build every book found in `root` into `output`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            book: None,
            file_order: FileOrder::default(),
        }
    }

    /// Only build `book`.
    #[must_use]
    pub fn with_book(mut self, book: Option<usize>) -> Self {
        self.book = book;
        self
    }

    /// Use a different file order.
    #[must_use]
    pub fn with_file_order(mut self, file_order: FileOrder) -> Self {
        self.file_order = file_order;
        self
    }

    /// Menu printed on every page: one book's links with `--book`, all of
    /// them otherwise.
    #[must_use]
    pub const fn menu(&self) -> Menu {
        match self.book {
            Some(book) => Menu::Single(book),
            None => Menu::Omnibus,
        }
    }
}
