use jafl_common::capitalize;
use jafl_dom::Element;

use crate::context::RenderContext;
use crate::tag::TagKind;
use crate::templates::{self, SHOP_HEADER};

/// `choice`, `outcome`, `success` and `failure`.
///
/// With a `section` attribute they become a table row linking to that
/// section. An `outcome` without one is still a row; the others fall back to
/// their content.
pub(super) fn render_branch(element: &Element, kind: TagKind, ctx: &RenderContext) -> String {
    if let Some(section) = element.attr("section") {
        let description = if element.has_content() {
            element.content.clone()
        } else {
            element
                .attr("range")
                .filter(|range| !range.is_empty())
                .map_or_else(|| capitalize(&element.name), str::to_string)
        };
        let target = templates::link(
            &ctx.anchor(section, element.attr("book")),
            &templates::turn_to(section),
        );
        return templates::branch_option(&description, &target);
    }

    if kind == TagKind::Outcome {
        templates::branch_option(element.attr_or_empty("range"), &element.content)
    } else {
        element.content.clone()
    }
}

/// `market`, `choices` and `outcomes` hold rows; wrap them in a table.
pub(super) fn render_table(element: &Element, kind: TagKind) -> String {
    if kind == TagKind::Market {
        templates::table(&element.name, &format!("{SHOP_HEADER}{}", element.content))
    } else {
        templates::table(&element.name, &element.content)
    }
}
