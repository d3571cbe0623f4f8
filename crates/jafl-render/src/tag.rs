//! The closed set of tag names that have a rendering rule.

use std::str::FromStr;

use strum_macros::{Display, EnumString};

/// Every tag name the converter knows how to render, plus a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TagKind {
    /// Top-level page unit.
    Section,

    // Item-like tags
    /// A weapon pickup or shop entry.
    Weapon,
    /// A piece of armor.
    Armor,
    /// A generic item.
    Item,
    /// A tool.
    Tool,
    /// A ship.
    Ship,
    /// A cargo unit.
    Cargo,
    /// Something for sale.
    Buy,
    /// Something the reader can sell.
    Sell,
    /// A trade offer.
    Trade,
    /// Something gained.
    Gain,
    /// Something lost.
    Lose,

    // Branch tags
    /// A choice leading to another section.
    Choice,
    /// A random outcome.
    Outcome,
    /// Where a successful roll leads.
    Success,
    /// Where a failed roll leads.
    Failure,

    // Grouping tags
    /// A shop table.
    Market,
    /// A table of choices.
    Choices,
    /// A table of outcomes.
    Outcomes,

    // Standalone descriptive tags
    /// An enemy stat line.
    Fight,
    /// A resurrection deal.
    Resurrection,
    /// A table header row.
    Header,
    /// A "turn to" reference.
    Goto,
    /// A dice roll.
    Random,
    /// A roll against the reader's Rank.
    RankCheck,
    /// An ability check.
    Difficulty,
    /// A tickbox instruction.
    Tick,
    /// A disease.
    Disease,
    /// An illustration.
    Image,
    /// A condition; its content is trimmed.
    If,

    /// Markup whose first element holds the text to display.
    Group,

    // Deleted tags
    /// Game-engine description, not printed.
    Desc,
    /// Game-engine stat adjustment, not printed.
    Adjust,
    /// Game-engine effect, not printed.
    Effect,

    /// Any other tag name.
    Unknown,
}

impl TagKind {
    /// Classify a tag name. Names are case-sensitive; anything without a
    /// rule maps to [`TagKind::Unknown`].
    #[must_use]
    pub fn of(name: &str) -> Self {
        Self::from_str(name).unwrap_or(Self::Unknown)
    }

    /// Tags that place their own cross-reference link, so the generic
    /// `section` link must not be added around them.
    #[must_use]
    pub const fn links_itself(self) -> bool {
        matches!(
            self,
            Self::Choice | Self::Outcome | Self::Success | Self::Failure | Self::Group
        )
    }
}
