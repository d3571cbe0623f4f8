//! Assembly of the final document.
//!
//! Layout of the output, top to bottom: `HEAD`, cover, rules, quick rules,
//! world map, the converted books, adventure sheet, ship's manifest and
//! codeword pages. Every shared page is optional.

use std::fs;
use std::path::Path;

use jafl_common::{clear_warnings, warn_once};
use jafl_render::{BOOK_COUNT, RenderContext};

use crate::archive::{ensure_extracted, find_archives};
use crate::convert::{convert_book, convert_file, map_attachment};
use crate::error::BookError;
use crate::options::BuildOptions;

/// Document head linking the stylesheets and pinning the menu to every
/// printed page.
pub const HEAD: &str = r#"<head>
	<link rel="stylesheet" href="flands.css">
	<link rel="stylesheet" href="personal.css">

	<style>
		@media print {
			@page {
				@top-center {
					content: element(menu);
				}
			}
		}

		#menu {
			position: running(header);
		}
	</style>
</head>"#;

/// Cover page, placed before everything else.
pub const COVER_FILE: &str = "Cover.html";
/// Adventure sheet, placed after the books.
pub const SHEET_FILE: &str = "Sheet.html";
/// Ship's manifest, placed after the adventure sheet.
pub const MANIFEST_FILE: &str = "Manifest.html";
/// Map of the whole world.
pub const WORLD_MAP_FILE: &str = "global.jpg";
/// Full rules, in markup.
pub const RULES_FILE: &str = "Rules.xml";
/// Quick rules, in markup.
pub const QUICK_RULES_FILE: &str = "QuickRules.xml";

/// Anchor prefix of the sections in the rules files.
const RULES_BOOK: &str = "rules";

fn codewords_file(book: usize) -> String {
    format!("Codewords{book}.html")
}

/// Build the whole document.
///
/// # Errors
///
/// Fails when `--book` names a missing book, or when a book or rules file
/// cannot be extracted, read or converted.
pub fn build(options: &BuildOptions) -> Result<String, BookError> {
    clear_warnings();
    let root = options.root.as_path();
    let archives = find_archives(root)?;
    if let Some(requested) = options.book
        && !(1..=archives.len()).contains(&requested)
    {
        return Err(BookError::NoSuchBook {
            requested,
            available: archives.len(),
        });
    }
    if archives.is_empty() {
        warn_once(
            "Book",
            &format!("no book archives found in {}", root.display()),
        );
    }

    let menu = options.menu();
    let mut books = String::new();
    for (index, archive) in archives.iter().enumerate() {
        let number = index + 1;
        if options.book.is_some_and(|book| book != number) {
            continue;
        }
        let dir = ensure_extracted(archive)?;
        books.push_str(&convert_book(&dir, number, menu, &options.file_order)?);
        log::info!(target: "jafl::book", "book {number} done");
    }

    let rules_ctx = RenderContext::new(RULES_BOOK)
        .with_menu(menu)
        .with_image_dir(root);

    let mut document = String::from(HEAD);
    document.push_str(&include_page(root, COVER_FILE)?);
    document.push_str(&convert_optional(root, RULES_FILE, &rules_ctx)?);
    document.push_str(&convert_optional(root, QUICK_RULES_FILE, &rules_ctx)?);

    let world_map = root.join(WORLD_MAP_FILE);
    if world_map.is_file() {
        document.push_str(&map_attachment(&world_map.display().to_string(), "map-world"));
    } else {
        warn_once("Book", &format!("{} not found, skipped", world_map.display()));
    }

    document.push_str(&books);
    document.push_str(&include_page(root, SHEET_FILE)?);
    document.push_str(&include_page(root, MANIFEST_FILE)?);
    match options.book {
        Some(book) => document.push_str(&include_page(root, &codewords_file(book))?),
        None => {
            for book in 1..=BOOK_COUNT {
                document.push_str(&include_page(root, &codewords_file(book))?);
            }
        }
    }
    Ok(document)
}

/// Build the document and write it to [`BuildOptions::output`].
///
/// # Errors
///
/// See [`build`]; also fails when the output cannot be written.
pub fn run(options: &BuildOptions) -> Result<(), BookError> {
    let document = build(options)?;
    fs::write(&options.output, document).map_err(BookError::io(&options.output))?;
    log::info!(
        target: "jafl::book",
        "finished, output saved in {}",
        options.output.display()
    );
    Ok(())
}

/// A static HTML page from the root, or nothing when it does not exist.
fn include_page(root: &Path, name: &str) -> Result<String, BookError> {
    let path = root.join(name);
    if !path.is_file() {
        warn_once("Book", &format!("{} not found, skipped", path.display()));
        return Ok(String::new());
    }
    log::debug!(target: "jafl::book", "importing {}", path.display());
    fs::read_to_string(&path).map_err(BookError::io(&path))
}

/// A markup page from the root, converted, or nothing when it does not
/// exist.
fn convert_optional(root: &Path, name: &str, ctx: &RenderContext) -> Result<String, BookError> {
    let path = root.join(name);
    if !path.is_file() {
        warn_once("Book", &format!("{} not found, skipped", path.display()));
        return Ok(String::new());
    }
    log::debug!(target: "jafl::book", "converting {}", path.display());
    convert_file(&path, ctx)
}
