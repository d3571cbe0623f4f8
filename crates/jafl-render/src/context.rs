//! State shared by every rendering rule.

use std::path::{Path, PathBuf};

use jafl_dom::Element;
use jafl_markup::ElementRenderer;

use crate::books::Menu;
use crate::error::RenderError;
use crate::professions::ProfessionTable;
use crate::rules;

/// Everything the rules need to know about the book being converted.
///
/// Built once per book and only read while rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    book: String,
    menu: Menu,
    image_dir: PathBuf,
    professions: ProfessionTable,
}

impl RenderContext {
    /// Context for `book`, with the omnibus menu, images resolved against
    /// the working directory and no professions.
    #[must_use]
    pub fn new(book: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            ..Self::default()
        }
    }

    /// Use a different navigation menu.
    #[must_use]
    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menu = menu;
        self
    }

    /// Resolve `<image file>` against `dir`.
    #[must_use]
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Use the given starting professions.
    #[must_use]
    pub fn with_professions(mut self, professions: ProfessionTable) -> Self {
        self.professions = professions;
        self
    }

    /// Identifier of the book, the prefix of every section anchor.
    #[must_use]
    pub fn book(&self) -> &str {
        &self.book
    }

    /// The navigation menu.
    #[must_use]
    pub const fn menu(&self) -> Menu {
        self.menu
    }

    /// Directory that image files are resolved against.
    #[must_use]
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// The starting professions.
    #[must_use]
    pub const fn professions(&self) -> &ProfessionTable {
        &self.professions
    }

    /// Anchor of `section` in `book`, or in the current book when `book` is
    /// missing or empty.
    #[must_use]
    pub fn anchor(&self, section: &str, book: Option<&str>) -> String {
        let book = book.filter(|book| !book.is_empty()).unwrap_or(&self.book);
        format!("{book}-{section}")
    }
}

impl ElementRenderer for RenderContext {
    type Error = RenderError;

    fn render(&self, element: &Element) -> Result<String, Self::Error> {
        rules::render_element(element, self)
    }
}
