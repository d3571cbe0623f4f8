//! HTML fragments produced by the rendering rules.
//!
//! Every fragment is a small function around a `format!` literal so the
//! markup stays readable in one place.

/// Glyph used for section tickboxes.
pub const TICKBOX: &str = "◻";

/// Most tickboxes a section heading can carry.
pub const MAX_TICKBOXES: usize = 100;

/// Header row of a `market` table.
pub const SHOP_HEADER: &str = r#"<tr class="shop-header">
<th colspan="4">Item</th>
<th colspan="1">Buy Price</th>
<th colspan="1">Sell Price</th>
</tr>"#;

/// Canned text of an empty `<tick>`.
pub const TICK_THE_BOX: &str = "tick the box";

/// A full section page.
#[must_use]
pub fn section_page(menu: &str, id: &str, name: &str, ticks: &str, content: &str) -> String {
    format!(
        r#"
<div class="page">
{menu}
<h2 id="{id}"><span class="section-title">{name}</span><span class="tickboxes">{ticks}</span></h2>
{content}
</div>
"#
    )
}

/// Link to an anchor on another page.
#[must_use]
pub fn link(target: &str, text: &str) -> String {
    format!(r##"<a href="#{target}">{text}</a>"##)
}

/// The "Turn to" phrase.
#[must_use]
pub fn turn_to(section: &str) -> String {
    format!(r#"<span class="turn-to">► Turn to {section}</span>"#)
}

/// One row of a shop table.
#[must_use]
pub fn shop_item(name: &str, buy: &str, sell: &str) -> String {
    format!(
        r#"<tr class="shop-item">
	<td colspan="4" class="shop-item-name">{name}</td>
	<td colspan="1" class="shop-item-buy-price">{buy}</td>
	<td colspan="1" class="shop-item-sell-price">{sell}</td>
</tr>"#
    )
}

/// A full-width header row.
#[must_use]
pub fn header(text: &str) -> String {
    format!(
        r#"<tr>
<th colspan="6">{text}</th>
</tr>"#
    )
}

/// One row of a choices or outcomes table.
#[must_use]
pub fn branch_option(description: &str, target: &str) -> String {
    format!(
        r#"<tr class="branch-option">
	<th>{description}</th>
	<td>{target}</td>
</tr>"#
    )
}

/// A table of the given class.
#[must_use]
pub fn table(class: &str, rows: &str) -> String {
    format!(
        r#"<table class="{class}">
{rows}
</table>"#
    )
}

/// Resurrection deal.
#[must_use]
pub fn resurrection(god: &str, book: &str, section: &str, text: &str) -> String {
    format!(
        r#"<span class="resurrection">Resurrection of {god}: Book {book}, Section {section} ({text})</span>"#
    )
}

/// Dice roll.
#[must_use]
pub fn roll(dice: &str) -> String {
    format!("roll {dice} dice")
}

/// Roll against the reader's Rank.
#[must_use]
pub fn rank_check(dice: &str) -> String {
    format!("{} and try to do lower than your Rank", roll(dice))
}

/// Ability check against a difficulty.
#[must_use]
pub fn check(ability: &str, level: &str) -> String {
    format!("make a {ability} check against a difficulty of {level}")
}

/// Item name in the item font.
#[must_use]
pub fn item(name: &str) -> String {
    format!(r#"<span class="item">{name}</span>"#)
}

/// Inline illustration.
#[must_use]
pub fn image(src: &str) -> String {
    format!(r#"<img src="{src}"></img>"#)
}

/// Enemy stat table.
#[must_use]
pub fn fight(name: &str, combat: &str, defence: &str, stamina: &str) -> String {
    format!(
        r#"<table class="fight">
<tr>
<th colspan="3">{name}</th>
</tr>
<tr>
<td>Combat: {combat}</td>
<td>Defence: {defence}</td>
<td>Stamina: {stamina}</td>
</tr>
</table>"#
    )
}

/// Starting stats of a profession. `abilities` is Charisma, Combat, Magic,
/// Sanctity, Scouting, Thievery in that order; `equipment` holds the
/// pre-rendered [`equipment_row`]s.
#[must_use]
pub fn stats_sheet(
    profession: &str,
    abilities: [&str; 6],
    stamina: &str,
    rank: &str,
    gold: &str,
    equipment: &str,
) -> String {
    let [cha, com, mag, san, sco, thi] = abilities;
    format!(
        r#"<h3 class="profession">
{profession}
</h3>
<table class="stats-sheet">
<tr>
<th>Charisma</th>
<th>Combat</th>
<th>Magic</th>
<th>Sanctity</th>
<th>Scouting</th>
<th>Thievery</th>
</tr>
<tr>
<td>{cha}</td>
<td>{com}</td>
<td>{mag}</td>
<td>{san}</td>
<td>{sco}</td>
<td>{thi}</td>
</tr>
<tr>
<th colspan="2">Stamina</th>
<th colspan="2">Rank</th>
<th colspan="2">Gold</th>
</tr>
<tr>
<td colspan="2">{stamina}</td>
<td colspan="2">{rank}</td>
<td colspan="2">{gold}</td>
</tr>
<tr>
<th colspan="6">Starting equipment</th>
</tr>
{equipment}
</table>"#
    )
}

/// One line of starting equipment.
#[must_use]
pub fn equipment_row(kind: &str, name: &str) -> String {
    format!(
        r#"<tr>
<th colspan="2">{kind}</th>
<td class="item" colspan="4">{name}</td>
</tr>"#
    )
}
