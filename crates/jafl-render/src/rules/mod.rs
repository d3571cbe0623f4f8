//! Rendering rules, one family per file.
//!
//! [`render_element`] runs when an element closes. Its children have
//! already been rendered into its `content`, so every rule only looks at a
//! single element and the read-only [`RenderContext`].

mod branch;
mod items;
mod section;
mod standalone;

use jafl_common::note_verbose;
use jafl_dom::Element;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::group::{GroupTarget, extract_group};
use crate::tag::TagKind;
use crate::templates;

/// Render a closed element into its HTML fragment.
///
/// # Errors
///
/// Fails when a section names an unknown or malformed profession, or when
/// the content of a `<group>` is not well-formed.
pub fn render_element(element: &Element, ctx: &RenderContext) -> Result<String, RenderError> {
    if element.attr("hidden") == Some("t") {
        return Ok(String::new());
    }

    let kind = TagKind::of(&element.name);
    let out = match kind {
        TagKind::Section => section::render_section(element, ctx)?,

        TagKind::Weapon
        | TagKind::Armor
        | TagKind::Item
        | TagKind::Tool
        | TagKind::Ship
        | TagKind::Cargo
        | TagKind::Buy
        | TagKind::Sell
        | TagKind::Trade
        | TagKind::Gain
        | TagKind::Lose => items::render_item(element),

        TagKind::Choice | TagKind::Outcome | TagKind::Success | TagKind::Failure => {
            branch::render_branch(element, kind, ctx)
        }
        TagKind::Market | TagKind::Choices | TagKind::Outcomes => {
            branch::render_table(element, kind)
        }

        TagKind::Fight => standalone::render_fight(element),
        TagKind::Resurrection => standalone::render_resurrection(element),
        TagKind::Header => standalone::render_header(element),
        TagKind::Goto => standalone::render_goto(element),
        TagKind::Random => standalone::render_random(element),
        TagKind::RankCheck => standalone::render_rank_check(element),
        TagKind::Difficulty => standalone::render_difficulty(element),
        TagKind::Tick => standalone::render_tick(element),
        TagKind::Disease => standalone::render_disease(element),
        TagKind::Image => standalone::render_image(element, ctx),
        TagKind::If => element.content.trim().to_string(),

        TagKind::Group => render_group(element, ctx)?,

        TagKind::Desc | TagKind::Adjust | TagKind::Effect => return Ok(String::new()),

        TagKind::Unknown => {
            note_verbose(
                "Render",
                &format!("no rule for <{}>, kept as markup", element.name),
            );
            element.to_string()
        }
    };

    if kind.links_itself() {
        return Ok(out);
    }
    Ok(with_cross_reference(out, element, ctx))
}

/// Wrap `out` in a link when the element points at a section.
fn with_cross_reference(out: String, element: &Element, ctx: &RenderContext) -> String {
    match element.attr("section").filter(|section| !section.is_empty()) {
        Some(section) => templates::link(&ctx.anchor(section, element.attr("book")), &out),
        None => out,
    }
}

fn render_group(element: &Element, ctx: &RenderContext) -> Result<String, RenderError> {
    let payload = extract_group(&element.content)?;
    let out = match payload.target {
        Some(GroupTarget::Section { section, book }) => {
            templates::link(&ctx.anchor(&section, book.as_deref()), &payload.text)
        }
        Some(GroupTarget::Anchor(anchor)) => templates::link(&anchor, &payload.text),
        None => with_cross_reference(payload.text, element, ctx),
    };
    Ok(out)
}
