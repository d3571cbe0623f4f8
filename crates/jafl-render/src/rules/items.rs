use jafl_common::capitalize;
use jafl_dom::Element;

use crate::templates;

/// Attributes that may carry an item's name when `name` is missing, in
/// priority order.
const NAME_ATTRIBUTES: [&str; 10] = [
    "weapon", "armor", "item", "tool", "ship", "cargo", "stamina", "rank", "ability", "title",
];

/// Pickups and shop entries.
///
/// Non-blank content is printed as written. Otherwise the name is assembled
/// from the attributes. Elements with a `buy` or `sell` price become a shop
/// table row.
pub(super) fn render_item(element: &Element) -> String {
    let name = if element.has_content() {
        element.content.clone()
    } else {
        item_name(element)
    };

    let buy = element.attr("buy");
    let sell = element.attr("sell");
    if buy.is_none() && sell.is_none() {
        return name;
    }
    templates::shop_item(&name, price(buy), price(sell))
}

fn price(price: Option<&str>) -> &str {
    price.filter(|price| !price.is_empty()).unwrap_or("-")
}

fn item_name(element: &Element) -> String {
    let base = element
        .attr("name")
        .filter(|name| !name.is_empty())
        .or_else(|| {
            NAME_ATTRIBUTES
                .iter()
                .find_map(|key| element.attr(key).filter(|value| !value.is_empty()))
        })
        .map(str::to_string)
        .or_else(|| element.attr("shards").map(|shards| format!("{shards} shards")))
        .unwrap_or_else(|| element.name.clone());
    let base = capitalize(&base);

    let mut properties = Vec::new();
    if let Some(capacity) = ship_capacity(&base) {
        properties.push(format!("capacity: {capacity}"));
    }
    if let Some(crew) = element.attr("initialCrew") {
        properties.push(format!("initial crew: {crew}"));
    }
    match (element.attr("bonus"), element.attr("ability")) {
        (Some(bonus), Some(ability)) => properties.push(format!("+{bonus} to {ability}")),
        (Some(bonus), None) => properties.push(format!("+{bonus}")),
        (None, Some(ability)) => properties.push(format!("to {ability}")),
        (None, None) => {}
    }

    let name = if properties.is_empty() {
        base
    } else {
        format!("{base} ({})", properties.join(", "))
    };
    templates::item(&name)
}

/// Cargo capacity of the ship types the game tracks internally.
fn ship_capacity(name: &str) -> Option<u8> {
    match name.to_lowercase().as_str() {
        "barque" => Some(1),
        "brigantine" => Some(2),
        "galleon" => Some(3),
        _ => None,
    }
}
