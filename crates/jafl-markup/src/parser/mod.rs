//! Element-stack parser for JAFL markup.

/// Parser state machine implementation.
pub mod core;
/// Helper methods for state transitions, input, and the element stack.
pub mod helpers;

pub use self::core::{MarkupParser, ParsedDocument, ParserState, TOP_LEVEL_TAG, parse_document};
