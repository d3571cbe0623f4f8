//! Per-book constants and the navigation menu.

use std::fmt;

use jafl_common::linkify;

/// Region covered by each book, indexed by book number. Index 0 is unused.
const REGIONS: [&str; 7] = [
    "",
    "Sokara",
    "Golnir",
    "Violet Ocean",
    "Great Steppes",
    "Uttaku",
    "Akatsurai",
];

/// Title of each book, indexed by book number. Index 0 is unused.
const TITLES: [&str; 7] = [
    "",
    "The War-Torn Kingdom",
    "Cities of Gold and Glory",
    "Over the Blood-Dark Sea",
    "The Plains of Howling Darkness",
    "The Court of Hidden Faces",
    "Lords of the Rising Sun",
];

/// Number of books in the series.
pub const BOOK_COUNT: usize = REGIONS.len() - 1;

/// Region name for a book number, or `""` when the number is out of range.
#[must_use]
pub fn region(book: usize) -> &'static str {
    REGIONS.get(book).copied().unwrap_or_default()
}

/// Title for a book number, or `""` when the number is out of range.
#[must_use]
pub fn title(book: usize) -> &'static str {
    TITLES.get(book).copied().unwrap_or_default()
}

const OMNIBUS_MENU: &str = r##"<div class="menu" id="menu">
	<table>
		<tr>
			<th colspan="4"><a href="#sheet">Adventure Sheet</a></th>
			<th colspan="4"><a href="#manifest">Ship's Manifest</a></th>
		</tr>
		<tr>
			<th colspan="2">Codewords:</th>
			<td><a href="#cd1">A</a></td>
			<td><a href="#cd2">B</a></td>
			<td><a href="#cd3">C</a></td>
			<td><a href="#cd4">D</a></td>
			<td><a href="#cd5">E</a></td>
			<td><a href="#cd6">F</a></td>
		</tr>
		<tr>
			<th colspan="1">Maps:</th>
			<td><a href="#map-world">World</a></td>
			<td><a href="#map-sokara">Sokara</a></td>
			<td><a href="#map-golnir">Golnir</a></td>
			<td><a href="#map-violet-ocean">Violet Ocean</a></td>
			<td><a href="#map-great-steppes">Great Steppes</a></td>
			<td><a href="#map-uttaku">Uttaku</a></td>
			<td><a href="#map-akatsurai">Akatsurai</a></td>
		</tr>
	</table>
</div>
"##;

/// Which navigation menu heads every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    /// Links to every book's codewords and maps.
    #[default]
    Omnibus,
    /// Links for a single book.
    Single(usize),
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Omnibus => f.write_str(OMNIBUS_MENU),
            Self::Single(book) => {
                let region = region(book);
                write!(
                    f,
                    r##"<div class="menu" id="menu">
	<table>
		<tr>
			<th><a href="#sheet">Adventure Sheet</a></th>
			<th><a href="#manifest">Ship's Manifest</a></th>
			<th><a href="#cd{book}">Codewords</a></th>
			<th><a href="#map-world">World Map</a></th>
			<th><a href="#map-{slug}">{region} Map</a></th>
		</tr>
	</table>
</div>
"##,
                    slug = linkify(region),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_tables() {
        assert_eq!(region(3), "Violet Ocean");
        assert_eq!(title(6), "Lords of the Rising Sun");
        assert_eq!(region(0), "");
        assert_eq!(title(42), "");
        assert_eq!(BOOK_COUNT, 6);
    }

    #[test]
    fn single_book_menu_links_its_region() {
        let menu = Menu::Single(4).to_string();
        assert!(menu.contains(r##"<a href="#cd4">Codewords</a>"##));
        assert!(menu.contains(r##"<a href="#map-great-steppes">Great Steppes Map</a>"##));
    }
}
