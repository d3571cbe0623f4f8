//! Errors raised while rendering elements or loading professions.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// A rendering rule could not produce its fragment.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A section asked for a profession that `Adventurers.xml` does not
    /// define.
    #[error(
        "found no match for profession '{name}'; professions registered from Adventurers.xml: [{}]",
        .known.join(", ")
    )]
    UnknownProfession {
        /// The requested profession.
        name: String,
        /// Every registered profession, sorted.
        known: Vec<String>,
    },

    /// A profession whose ability line does not hold six scores.
    #[error("profession '{profession}' has {found} ability scores, expected 6")]
    Abilities {
        /// The profession.
        profession: String,
        /// How many scores were listed.
        found: usize,
    },

    /// The content of a `<group>` is not well-formed XML.
    #[error("malformed <group> content: {0}")]
    Group(#[from] quick_xml::Error),
}

/// `Adventurers.xml` could not be read.
#[derive(Debug, Error)]
pub enum AdventurersError {
    /// The document is not well-formed.
    #[error("malformed Adventurers.xml: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An attribute could not be parsed.
    #[error("malformed attribute in Adventurers.xml: {0}")]
    Attribute(#[from] AttrError),
}
