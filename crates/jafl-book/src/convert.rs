//! Conversion of markup files and whole book directories.

use std::fs;
use std::path::Path;

use jafl_common::{linkify, warn_once};
use jafl_markup::parse_document;
use jafl_render::{Menu, ProfessionTable, RenderContext, region, title};

use crate::error::BookError;
use crate::order::{FileOrder, sort_file_names};

/// File holding a book's starting professions.
pub const ADVENTURERS_FILE: &str = "Adventurers.xml";

const MARKUP_EXTENSION: &str = ".xml";

/// File names containing one of these are drafts and never converted.
const IGNORED_MARKERS: [&str; 2] = ["temp", "old"];

/// Parse and render one markup file.
///
/// # Errors
///
/// Fails when the file cannot be read or its markup is broken.
pub fn convert_file(path: &Path, ctx: &RenderContext) -> Result<String, BookError> {
    let input = fs::read_to_string(path).map_err(BookError::io(path))?;
    let doc = parse_document(&input, ctx).map_err(|source| BookError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(doc.output)
}

/// Load the professions of a book. A missing file gives an empty table.
///
/// # Errors
///
/// Fails when the file exists but cannot be read or parsed.
pub fn load_professions(dir: &Path) -> Result<ProfessionTable, BookError> {
    let path = dir.join(ADVENTURERS_FILE);
    if !path.is_file() {
        warn_once(
            "Book",
            &format!("{} not found, no starting professions", path.display()),
        );
        return Ok(ProfessionTable::new());
    }
    let xml = fs::read_to_string(&path).map_err(BookError::io(&path))?;
    ProfessionTable::from_adventurers_xml(&xml)
        .map_err(|source| BookError::Adventurers { path, source })
}

/// Convert every markup file of book `number`, stored in `dir`.
///
/// The book opens with its title page and region map, followed by the
/// files in [`FileOrder`]. Drafts, the adventurers file and files that are
/// not markup are skipped.
///
/// # Errors
///
/// Fails on the first file that cannot be read or converted.
pub fn convert_book(
    dir: &Path,
    number: usize,
    menu: Menu,
    order: &FileOrder,
) -> Result<String, BookError> {
    log::info!(target: "jafl::book", "converting book {number} from {}", dir.display());

    let professions = load_professions(dir)?;
    log::info!(
        target: "jafl::book",
        "loaded {} starting professions",
        professions.len()
    );
    let ctx = RenderContext::new(number.to_string())
        .with_menu(menu)
        .with_image_dir(dir)
        .with_professions(professions);

    let mut names: Vec<String> = fs::read_dir(dir)
        .map_err(BookError::io(dir))?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    sort_file_names(&mut names, order);

    let region = region(number);
    let mut content = book_title(title(number));
    content.push_str(&map_attachment(
        &dir.join(format!("{region}.JPG")).display().to_string(),
        &format!("map-{}", linkify(region)),
    ));

    for name in names {
        if is_skipped(&name) {
            log::debug!(target: "jafl::book", "ignored {name}");
            continue;
        }
        let path = dir.join(&name);
        content.push_str(&convert_file(&path, &ctx)?);
        log::debug!(target: "jafl::book", "converted {name}");
    }
    Ok(content)
}

fn is_skipped(name: &str) -> bool {
    name == ADVENTURERS_FILE
        || IGNORED_MARKERS.iter().any(|marker| name.contains(marker))
        || !name.ends_with(MARKUP_EXTENSION)
}

/// Title page of a book.
#[must_use]
pub fn book_title(title: &str) -> String {
    format!(
        r#"
<div class="page">
	<h1 class="title">{title}</h1>
</div>
"#
    )
}

/// Full-page map image.
#[must_use]
pub fn map_attachment(src: &str, id: &str) -> String {
    format!(
        r#"
<img src="{src}" id="{id}" class="page map"></img>

"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_names() {
        assert!(is_skipped("Adventurers.xml"));
        assert!(is_skipped("12-old.xml"));
        assert!(is_skipped("temp.xml"));
        assert!(is_skipped("Sokara.JPG"));
        assert!(!is_skipped("New.xml"));
        assert!(!is_skipped("12.xml"));
    }
}
