use jafl_dom::Element;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::templates::{self, MAX_TICKBOXES, TICKBOX};

/// A whole page: menu, heading with tickboxes, then the content.
///
/// With a `profession` attribute the page opens with that profession's
/// stat block, and only the first word of the name goes into the anchor.
pub(super) fn render_section(
    element: &Element,
    ctx: &RenderContext,
) -> Result<String, RenderError> {
    let name = element.attr_or_empty("name");
    let boxes = element
        .attr("boxes")
        .and_then(|boxes| boxes.trim().parse::<usize>().ok())
        .unwrap_or(0)
        .min(MAX_TICKBOXES);
    let ticks = format!(" {TICKBOX}").repeat(boxes);

    let (id, content) = match element.attr("profession") {
        Some(profession) => {
            let stats = ctx.professions().lookup(profession)?.stat_block()?;
            let first_word = name.split_whitespace().next().unwrap_or_default();
            (ctx.anchor(first_word, None), stats + &element.content)
        }
        None => (ctx.anchor(name, None), element.content.clone()),
    };

    Ok(templates::section_page(
        &ctx.menu().to_string(),
        &id,
        name,
        &ticks,
        &content,
    ))
}
