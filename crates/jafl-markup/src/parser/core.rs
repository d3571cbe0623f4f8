use std::collections::VecDeque;

use jafl_dom::{ElementId, ElementTree};
use strum_macros::Display;

use crate::error::ParseError;
use crate::render::ElementRenderer;

/// Tag whose closure flushes straight to the output instead of a parent.
pub const TOP_LEVEL_TAG: &str = "section";

/// Number of consumed characters kept for error reports.
pub(super) const HISTORY_LENGTH: usize = 50;

/// The parser state machine. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParserState {
    /// Text between tags. The initial state.
    ReadingContent,
    /// Just read `<`.
    ExpectingElement,
    /// Reading the name of an opening tag.
    OpeningElement,
    /// Reading the name of a closing tag.
    ClosingElement,
    /// Inside an opening tag, between attributes.
    ExpectingAttribute,
    /// Reading an attribute name.
    ReadingAttribute,
    /// Read `=`, waiting for the opening quote.
    ExpectingValue,
    /// Inside a quoted attribute value.
    ReadingValue,
    /// Inside `<?...>` or `<!...>`.
    SkippingElement,
}

/// Result of a successful parse.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Every element that was opened, with its final content.
    pub tree: ElementTree,
    /// Rendered top-level units plus any text outside of elements.
    pub output: String,
}

/// Streaming parser over one markup document.
///
/// Consumes one character per step, keeps the open elements on a stack and
/// renders each element the moment its closing tag is matched.
pub struct MarkupParser {
    pub(super) state: ParserState,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) line: usize,
    pub(super) history: VecDeque<char>,

    /// Tag name buffer. Not cleared when an element is pushed, so that
    /// `<item/>` closes the element it just opened.
    pub(super) name: String,
    pub(super) attribute: String,
    pub(super) value: String,
    /// Nesting depth inside a skipped `<?`/`<!` construct.
    pub(super) skip_depth: usize,

    pub(super) tree: ElementTree,
    /// Open elements, outermost first.
    pub(super) stack: Vec<ElementId>,
    pub(super) output: String,
    pub(super) top_level_tag: String,
}

impl MarkupParser {
    /// Create a new parser for the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            state: ParserState::ReadingContent,
            input: input.into(),
            current_pos: 0,
            line: 1,
            history: VecDeque::with_capacity(HISTORY_LENGTH),
            name: String::new(),
            attribute: String::new(),
            value: String::new(),
            skip_depth: 0,
            tree: ElementTree::new(),
            stack: Vec::new(),
            output: String::new(),
            top_level_tag: TOP_LEVEL_TAG.to_string(),
        }
    }

    /// Use a different top-level tag than `section`.
    #[must_use]
    pub fn with_top_level_tag(mut self, tag: impl Into<String>) -> Self {
        self.top_level_tag = tag.into();
        self
    }

    /// The current mode.
    #[must_use]
    pub const fn state(&self) -> ParserState {
        self.state
    }

    /// Run the parser to completion.
    ///
    /// # Errors
    ///
    /// Fails on an empty tag, a mismatched closing tag, a rendering rule
    /// error, or input that ends while a tag or element is still open.
    pub fn run<R: ElementRenderer>(mut self, renderer: &R) -> Result<ParsedDocument, ParseError> {
        while let Some(c) = self.consume() {
            match self.state {
                ParserState::ReadingContent => self.handle_reading_content_state(c),
                ParserState::ExpectingElement => self.handle_expecting_element_state(c)?,
                ParserState::OpeningElement => self.handle_opening_element_state(c),
                ParserState::ClosingElement => self.handle_closing_element_state(c, renderer)?,
                ParserState::ExpectingAttribute => self.handle_expecting_attribute_state(c),
                ParserState::ReadingAttribute => self.handle_reading_attribute_state(c),
                ParserState::ExpectingValue => self.handle_expecting_value_state(c),
                ParserState::ReadingValue => self.handle_reading_value_state(c),
                ParserState::SkippingElement => self.handle_skipping_element_state(c),
            }
        }

        if self.state != ParserState::ReadingContent || !self.stack.is_empty() {
            return Err(ParseError::UnexpectedEof {
                diagnostics: self.diagnostics(),
            });
        }

        log::debug!(
            target: "jafl::markup",
            "parsed {} elements, {} bytes of output",
            self.tree.len(),
            self.output.len()
        );
        Ok(ParsedDocument {
            tree: self.tree,
            output: self.output,
        })
    }

    fn handle_reading_content_state(&mut self, c: char) {
        match c {
            '<' => self.switch_to(ParserState::ExpectingElement),
            _ => self.append_content(c),
        }
    }

    fn handle_expecting_element_state(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            ' ' => {}
            '?' | '!' => {
                self.skip_depth = 1;
                self.switch_to(ParserState::SkippingElement);
            }
            '>' => {
                return Err(ParseError::EmptyElement {
                    diagnostics: self.diagnostics(),
                });
            }
            '/' => {
                self.name.clear();
                self.switch_to(ParserState::ClosingElement);
            }
            _ => {
                self.name.clear();
                self.name.push(c);
                self.switch_to(ParserState::OpeningElement);
            }
        }
        Ok(())
    }

    fn handle_opening_element_state(&mut self, c: char) {
        match c {
            ' ' => {
                self.push_element();
                self.switch_to(ParserState::ExpectingAttribute);
            }
            '>' => {
                self.push_element();
                self.switch_to(ParserState::ReadingContent);
            }
            '/' => {
                self.push_element();
                self.switch_to(ParserState::ClosingElement);
            }
            _ => self.name.push(c),
        }
    }

    fn handle_closing_element_state<R: ElementRenderer>(
        &mut self,
        c: char,
        renderer: &R,
    ) -> Result<(), ParseError> {
        match c {
            ' ' => {}
            '>' => {
                let innermost = self.current_element_name();
                if innermost != Some(self.name.as_str()) {
                    return Err(ParseError::MismatchedClose {
                        expected: innermost.map(str::to_string),
                        found: self.name.clone(),
                        diagnostics: self.diagnostics(),
                    });
                }
                self.pop_element(renderer)?;
                self.name.clear();
                self.switch_to(ParserState::ReadingContent);
            }
            _ => self.name.push(c),
        }
        Ok(())
    }

    fn handle_expecting_attribute_state(&mut self, c: char) {
        match c {
            '>' => self.switch_to(ParserState::ReadingContent),
            ' ' => {}
            '/' => self.switch_to(ParserState::ClosingElement),
            _ => {
                self.attribute.clear();
                self.attribute.push(c);
                self.switch_to(ParserState::ReadingAttribute);
            }
        }
    }

    fn handle_reading_attribute_state(&mut self, c: char) {
        match c {
            '=' => self.switch_to(ParserState::ExpectingValue),
            _ => self.attribute.push(c),
        }
    }

    fn handle_expecting_value_state(&mut self, c: char) {
        if c == '"' {
            self.value.clear();
            self.switch_to(ParserState::ReadingValue);
        }
    }

    fn handle_reading_value_state(&mut self, c: char) {
        match c {
            '"' => {
                self.store_attribute();
                self.switch_to(ParserState::ExpectingAttribute);
            }
            _ => self.value.push(c),
        }
    }

    fn handle_skipping_element_state(&mut self, c: char) {
        match c {
            '<' => self.skip_depth += 1,
            '>' => {
                self.skip_depth = self.skip_depth.saturating_sub(1);
                if self.skip_depth == 0 {
                    self.switch_to(ParserState::ReadingContent);
                }
            }
            _ => {}
        }
    }
}

/// Parse a whole document with the given renderer.
///
/// # Errors
///
/// See [`MarkupParser::run`].
pub fn parse_document<R: ElementRenderer>(
    input: &str,
    renderer: &R,
) -> Result<ParsedDocument, ParseError> {
    MarkupParser::new(input).run(renderer)
}
