//! Order in which the files of a book are converted.

use std::cmp::Ordering;
use std::path::Path;

/// File converted before every other file of a book.
pub const FIRST_FILE: &str = "New.xml";

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// How [`compare_file_names`] orders file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOrder {
    /// Name that always sorts first.
    pub first: String,
    /// Sort image files after the other non-numeric names.
    pub images_last: bool,
}

impl Default for FileOrder {
    fn default() -> Self {
        Self {
            first: FIRST_FILE.to_string(),
            images_last: false,
        }
    }
}

/// Compare two file names.
///
/// The designated first file comes first. Names whose stem is a number
/// (`12.xml`) come last, in numeric order. Everything else sits in between,
/// sorted lexicographically, with images moved to the end of that group
/// when [`FileOrder::images_last`] is set.
#[must_use]
pub fn compare_file_names(a: &str, b: &str, order: &FileOrder) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a == order.first {
        return Ordering::Less;
    }
    if b == order.first {
        return Ordering::Greater;
    }

    match (numeric_stem(a), numeric_stem(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) if order.images_last => is_image(a)
            .cmp(&is_image(b))
            .then_with(|| a.cmp(b)),
        (None, None) => a.cmp(b),
    }
}

/// Sort file names in place with [`compare_file_names`].
pub fn sort_file_names(names: &mut [String], order: &FileOrder) {
    names.sort_by(|a, b| compare_file_names(a, b, order));
}

fn numeric_stem(name: &str) -> Option<u64> {
    Path::new(name).file_stem()?.to_str()?.parse().ok()
}

fn is_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|image| ext.eq_ignore_ascii_case(image))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_stems() {
        assert_eq!(numeric_stem("12.xml"), Some(12));
        assert_eq!(numeric_stem("12"), Some(12));
        assert_eq!(numeric_stem("12a.xml"), None);
        assert_eq!(numeric_stem(".xml"), None);
    }

    #[test]
    fn image_extensions_ignore_case() {
        assert!(is_image("Sokara.JPG"));
        assert!(is_image("cover.png"));
        assert!(!is_image("New.xml"));
        assert!(!is_image("jpg"));
    }
}
