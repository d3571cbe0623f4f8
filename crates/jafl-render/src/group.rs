//! Re-parsing of `<group>` content.
//!
//! By the time a `<group>` closes, its children have already been rendered
//! into its content. That content is read again as XML: the inner markup of
//! its first element is what gets printed, and the first cross-reference
//! decides where the printed text links to.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Where a group's text points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupTarget {
    /// An unrendered `<goto>`; `book` defaults to the current book.
    Section {
        /// Target section name.
        section: String,
        /// Target book, when it differs from the current one.
        book: Option<String>,
    },
    /// Anchor of a link following the text, e.g. a rendered `<goto>`.
    Anchor(String),
}

/// What a `<group>` reduces to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPayload {
    /// Inner markup of the first element, trimmed.
    pub text: String,
    /// Where the text should link to.
    pub target: Option<GroupTarget>,
}

/// Extract the payload of a `<group>` from its rendered content.
///
/// The text is the inner markup of the first element. The target is the
/// first `<goto>` anywhere in the content, or the first `<a href="#...">`
/// after the first element; links inside the text already point somewhere.
/// Content with no element at all is returned trimmed, with no target.
///
/// # Errors
///
/// Fails when the content is not well-formed XML.
pub fn extract_group(content: &str) -> Result<GroupPayload, quick_xml::Error> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut depth = 0usize;
    let mut inner_start = None;
    let mut text = None;
    let mut target = None;

    loop {
        let before = offset(&reader);
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 && text.is_none() {
                    inner_start = Some(offset(&reader));
                } else if target.is_none() {
                    target = cross_reference(&e, text.is_some())?;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 && text.is_none() {
                    text = Some(String::new());
                } else if target.is_none() {
                    target = cross_reference(&e, text.is_some())?;
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0
                    && text.is_none()
                    && let Some(start) = inner_start
                {
                    let inner = content.get(start..before).unwrap_or_default();
                    text = Some(inner.trim().to_string());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(match text {
        Some(text) => GroupPayload { text, target },
        None => GroupPayload {
            text: content.trim().to_string(),
            target: None,
        },
    })
}

fn offset(reader: &Reader<&[u8]>) -> usize {
    usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX)
}

/// `<goto>` always counts; `<a>` only once the text has been read.
fn cross_reference(
    e: &BytesStart<'_>,
    past_text: bool,
) -> Result<Option<GroupTarget>, quick_xml::Error> {
    match e.name().as_ref() {
        b"goto" => {
            let Some(section) = attribute(e, "section")? else {
                return Ok(None);
            };
            let book = attribute(e, "book")?.filter(|book| !book.is_empty());
            Ok(Some(GroupTarget::Section { section, book }))
        }
        b"a" if past_text => Ok(attribute(e, "href")?
            .and_then(|href| href.strip_prefix('#').map(str::to_string))
            .map(GroupTarget::Anchor)),
        _ => Ok(None),
    }
}

fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, quick_xml::Error> {
    match e.try_get_attribute(key)? {
        Some(attr) => Ok(Some(String::from_utf8_lossy(&attr.value).into_owned())),
        None => Ok(None),
    }
}
