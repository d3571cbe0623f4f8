//! Tags that do not hold other tags. Each one prints its content when it has
//! some, and a canned phrase built from its attributes otherwise.

use jafl_common::capitalize;
use jafl_dom::Element;

use crate::context::RenderContext;
use crate::templates;

/// The content, or `fill()` when the content is blank.
fn autofill(element: &Element, fill: impl FnOnce() -> String) -> String {
    if element.has_content() {
        element.content.clone()
    } else {
        fill()
    }
}

pub(super) fn render_fight(element: &Element) -> String {
    autofill(element, || {
        templates::fight(
            element.attr_or_empty("name"),
            element.attr_or_empty("combat"),
            element.attr_or_empty("defence"),
            element.attr_or_empty("stamina"),
        )
    })
}

pub(super) fn render_resurrection(element: &Element) -> String {
    autofill(element, || {
        templates::resurrection(
            element.attr_or_empty("god"),
            element.attr_or_empty("book"),
            element.attr_or_empty("section"),
            element.attr_or_empty("text"),
        )
    })
}

pub(super) fn render_header(element: &Element) -> String {
    autofill(element, || {
        templates::header(&capitalize(element.attr_or_empty("type")))
    })
}

pub(super) fn render_goto(element: &Element) -> String {
    autofill(element, || templates::turn_to(element.attr_or_empty("section")))
}

pub(super) fn render_random(element: &Element) -> String {
    autofill(element, || templates::roll(element.attr_or_empty("dice")))
}

pub(super) fn render_rank_check(element: &Element) -> String {
    autofill(element, || templates::rank_check(element.attr_or_empty("dice")))
}

pub(super) fn render_difficulty(element: &Element) -> String {
    autofill(element, || {
        templates::check(
            element.attr_or_empty("ability"),
            element.attr_or_empty("level"),
        )
    })
}

pub(super) fn render_tick(element: &Element) -> String {
    autofill(element, || templates::TICK_THE_BOX.to_string())
}

pub(super) fn render_disease(element: &Element) -> String {
    autofill(element, || element.attr_or_empty("name").to_string())
}

/// Image paths are resolved against the book's directory.
pub(super) fn render_image(element: &Element, ctx: &RenderContext) -> String {
    autofill(element, || {
        let src = ctx.image_dir().join(element.attr_or_empty("file"));
        templates::image(&src.display().to_string())
    })
}
