//! Tokenizer and parser for JAFL gamebook markup.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer / Parser** - a character-at-a-time state machine with nine
//!   modes that recognizes `<name attr="value">content</name>` markup
//! - **Element Stack** - the open elements, innermost last, backed by an
//!   arena [`ElementTree`](jafl_dom::ElementTree)
//! - **Render Seam** - every element is handed to an [`ElementRenderer`]
//!   exactly once, when its closing tag is matched
//!
//! # Grammar notes
//!
//! - Only U+0020 counts as a separator inside tags.
//! - `<?...>` and `<!...>` constructs are skipped, honoring nested `<`/`>`.
//! - There is no entity decoding, CDATA, or namespace handling.
//! - A `/` inside an opening tag closes the element that was just opened,
//!   because the name buffer still holds its name.

/// Parse errors and their diagnostic snapshot.
pub mod error;
/// The element-stack parser state machine.
pub mod parser;
/// The seam between parsing and rendering.
pub mod render;

pub use error::{Diagnostics, ParseError};
pub use parser::{MarkupParser, ParsedDocument, ParserState, TOP_LEVEL_TAG, parse_document};
pub use render::{ElementRenderer, Verbatim};
