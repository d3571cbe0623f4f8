use std::fmt;

use thiserror::Error;

use crate::parser::ParserState;

/// Snapshot of the parser at the moment something went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    /// Byte offset just past the last consumed character.
    pub offset: usize,
    /// 1-based line of the last consumed character.
    pub line: usize,
    /// Mode the parser was in.
    pub mode: ParserState,
    /// Tag name buffer.
    pub name: String,
    /// Attribute name buffer.
    pub attribute: String,
    /// Attribute value buffer.
    pub value: String,
    /// Names of the open elements, outermost first.
    pub open_elements: Vec<String>,
    /// The last characters consumed, oldest first.
    pub history: String,
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[ Byte {} | Line {} | Mode {} ]",
            self.offset, self.line, self.mode
        )?;
        writeln!(
            f,
            "Buffer contents: [name: {}, attr: {}, value: {}]",
            self.name, self.attribute, self.value
        )?;
        writeln!(f, "Stack contents: [{}]", self.open_elements.join(", "))?;
        write!(f, "Last few characters: {}", self.history)
    }
}

/// Fatal markup errors. Any of them aborts the conversion of the file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// `<>` or `< >`: a tag with no name.
    #[error("element was opened and closed immediately\n{diagnostics}")]
    EmptyElement {
        /// Parser snapshot.
        diagnostics: Box<Diagnostics>,
    },

    /// A closing tag that does not match the innermost open element.
    #[error(
        "tried to close </{found}> but the innermost open element is {}\n{diagnostics}",
        .expected.as_deref().map_or_else(|| "nothing".to_string(), |name| format!("<{name}>"))
    )]
    MismatchedClose {
        /// Name of the innermost open element, if any.
        expected: Option<String>,
        /// Name found in the closing tag.
        found: String,
        /// Parser snapshot.
        diagnostics: Box<Diagnostics>,
    },

    /// Input ended inside a tag, inside a skipped construct, or with
    /// elements still open.
    #[error("unexpected end of input\n{diagnostics}")]
    UnexpectedEof {
        /// Parser snapshot.
        diagnostics: Box<Diagnostics>,
    },

    /// A rendering rule failed for a closed element.
    #[error("failed to render <{element}>: {source}\n{diagnostics}")]
    Render {
        /// Name of the element being rendered.
        element: String,
        /// Parser snapshot taken before the element was popped.
        diagnostics: Box<Diagnostics>,
        /// The rule's error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ParseError {
    /// The diagnostic snapshot carried by every variant.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            Self::EmptyElement { diagnostics }
            | Self::MismatchedClose { diagnostics, .. }
            | Self::UnexpectedEof { diagnostics }
            | Self::Render { diagnostics, .. } => diagnostics,
        }
    }
}
