//! Integration tests for the tag rendering rules.

use jafl_dom::Element;
use jafl_markup::parse_document;
use jafl_render::templates::{MAX_TICKBOXES, TICKBOX};
use jafl_render::{Menu, RenderContext, RenderError, render_element};
use pretty_assertions::assert_eq;

/// Helper to render a single element in book 1
fn render(element: &Element) -> String {
    render_element(element, &RenderContext::new("1")).unwrap()
}

/// Helper to build an element from attribute pairs
fn element(name: &str, attributes: &[(&str, &str)]) -> Element {
    attributes
        .iter()
        .fold(Element::new(name), |element, (key, value)| {
            element.with_attribute(*key, *value)
        })
}

// ========== hidden, deleted and unknown tags ==========

#[test]
fn test_hidden_elements_render_nothing() {
    let hidden = element("item", &[("hidden", "t"), ("name", "sword"), ("section", "4")]);
    assert_eq!(render(&hidden), "");
}

#[test]
fn test_hidden_needs_the_exact_value() {
    let shown = element("tick", &[("hidden", "true")]);
    assert_eq!(render(&shown), "tick the box");
}

#[test]
fn test_deleted_tags_render_nothing() {
    for name in ["desc", "adjust", "effect"] {
        let deleted = element(name, &[("section", "3")]).with_content("engine data");
        assert_eq!(render(&deleted), "", "<{name}> should be deleted");
    }
}

#[test]
fn test_unknown_tags_round_trip() {
    let unknown = element("foo", &[("a", "1")]).with_content("bar");
    assert_eq!(render(&unknown), "\n<foo a=\"1\">\n\tbar\n</foo>");
}

// ========== items ==========

#[test]
fn test_bare_item_is_named_after_its_tag() {
    assert_eq!(render(&element("item", &[])), r#"<span class="item">Item</span>"#);
}

#[test]
fn test_item_name_is_capitalized() {
    let sword = element("item", &[("name", "sword")]);
    assert_eq!(render(&sword), r#"<span class="item">Sword</span>"#);
}

#[test]
fn test_item_name_from_type_attribute() {
    let trade = element("trade", &[("weapon", "spear"), ("title", "ignored")]);
    assert_eq!(render(&trade), r#"<span class="item">Spear</span>"#);
}

#[test]
fn test_item_name_from_shards() {
    let crew = element("gain", &[("shards", "50"), ("crew", "good")]);
    assert_eq!(render(&crew), r#"<span class="item">50 Shards</span>"#);
}

#[test]
fn test_item_properties() {
    let ship = element("ship", &[("name", "galleon"), ("initialCrew", "average")]);
    assert_eq!(
        render(&ship),
        r#"<span class="item">Galleon (capacity: 3, initial crew: average)</span>"#
    );

    let amulet = element(
        "item",
        &[("name", "magic amulet"), ("bonus", "1"), ("ability", "magic")],
    );
    assert_eq!(
        render(&amulet),
        r#"<span class="item">Magic Amulet (+1 to magic)</span>"#
    );

    let armor = element("armor", &[("name", "leather"), ("bonus", "1")]);
    assert_eq!(render(&armor), r#"<span class="item">Leather (+1)</span>"#);
}

#[test]
fn test_item_ability_without_bonus() {
    let amulet = element("item", &[("name", "amulet"), ("ability", "magic")]);
    assert_eq!(render(&amulet), r#"<span class="item">Amulet (to magic)</span>"#);
}

#[test]
fn test_item_content_wins() {
    let rope = element("item", &[("name", "rope"), ("bonus", "2")]).with_content("a coil of rope");
    assert_eq!(render(&rope), "a coil of rope");
}

#[test]
fn test_shop_row_uses_dash_for_missing_prices() {
    let row = render(&element("item", &[("buy", "5")]));
    assert_eq!(
        row,
        "<tr class=\"shop-item\">\n\
         \t<td colspan=\"4\" class=\"shop-item-name\"><span class=\"item\">Item</span></td>\n\
         \t<td colspan=\"1\" class=\"shop-item-buy-price\">5</td>\n\
         \t<td colspan=\"1\" class=\"shop-item-sell-price\">-</td>\n\
         </tr>"
    );

    let empty_buy = render(&element("weapon", &[("name", "sword"), ("buy", ""), ("sell", "40")]));
    assert!(empty_buy.contains(r#"<td colspan="1" class="shop-item-buy-price">-</td>"#));
    assert!(empty_buy.contains(r#"<td colspan="1" class="shop-item-sell-price">40</td>"#));
}

#[test]
fn test_items_link_to_their_section() {
    let sword = element("weapon", &[("name", "sword"), ("section", "5")]);
    assert_eq!(
        render(&sword),
        r##"<a href="#1-5"><span class="item">Sword</span></a>"##
    );

    let elsewhere = element("weapon", &[("name", "sword"), ("section", "5"), ("book", "3")]);
    assert!(render(&elsewhere).starts_with(r##"<a href="#3-5">"##));
}

// ========== branches and tables ==========

#[test]
fn test_choice_row_links_to_section() {
    let choice = element("choice", &[("section", "12")]);
    assert_eq!(
        render(&choice),
        "<tr class=\"branch-option\">\n\
         \t<th>Choice</th>\n\
         \t<td><a href=\"#1-12\"><span class=\"turn-to\">► Turn to 12</span></a></td>\n\
         </tr>"
    );
}

#[test]
fn test_branch_description_priority() {
    let described = element("choice", &[("section", "3"), ("range", "1-2")]).with_content("Go west");
    assert!(render(&described).contains("<th>Go west</th>"));

    let ranged = element("outcome", &[("section", "3"), ("range", "1-2")]);
    assert!(render(&ranged).contains("<th>1-2</th>"));

    let other_book = element("success", &[("section", "3"), ("book", "2")]);
    let row = render(&other_book);
    assert!(row.contains("<th>Success</th>"));
    assert!(row.contains(r##"<a href="#2-3">"##));
}

#[test]
fn test_branches_without_section() {
    let outcome = element("outcome", &[("range", "1-3")]).with_content("You win");
    assert_eq!(
        render(&outcome),
        "<tr class=\"branch-option\">\n\t<th>1-3</th>\n\t<td>You win</td>\n</tr>"
    );

    let failure = element("failure", &[]).with_content("You fall.");
    assert_eq!(render(&failure), "You fall.");
}

#[test]
fn test_tables() {
    let choices = Element::new("choices").with_content("rows");
    assert_eq!(render(&choices), "<table class=\"choices\">\nrows\n</table>");

    let market = render(&Element::new("market").with_content("rows"));
    assert!(market.starts_with("<table class=\"market\">\n<tr class=\"shop-header\">"));
    assert!(market.ends_with("</tr>rows\n</table>"));
}

// ========== descriptive tags ==========

#[test]
fn test_descriptive_autofill() {
    assert_eq!(render(&element("random", &[("dice", "2")])), "roll 2 dice");
    assert_eq!(
        render(&element("rankcheck", &[("dice", "3")])),
        "roll 3 dice and try to do lower than your Rank"
    );
    assert_eq!(
        render(&element("difficulty", &[("ability", "SCOUTING"), ("level", "10")])),
        "make a SCOUTING check against a difficulty of 10"
    );
    assert_eq!(render(&element("tick", &[])), "tick the box");
    assert_eq!(render(&element("disease", &[("name", "Lichen Fever")])), "Lichen Fever");
    assert_eq!(
        render(&element("header", &[("type", "weapons")])),
        "<tr>\n<th colspan=\"6\">Weapons</th>\n</tr>"
    );
}

#[test]
fn test_descriptive_content_is_kept() {
    let random = element("random", &[("dice", "2")]).with_content("Roll two dice");
    assert_eq!(render(&random), "Roll two dice");
}

#[test]
fn test_fight_and_resurrection() {
    let fight = render(&element(
        "fight",
        &[("name", "Ogre"), ("combat", "5"), ("defence", "8"), ("stamina", "15")],
    ));
    assert!(fight.starts_with("<table class=\"fight\">\n<tr>\n<th colspan=\"3\">Ogre</th>"));
    assert!(fight.contains("<td>Combat: 5</td>\n<td>Defence: 8</td>\n<td>Stamina: 15</td>"));

    let resurrection = element(
        "resurrection",
        &[("god", "Tyrnai"), ("book", "1"), ("section", "100"), ("text", "200 shards")],
    );
    assert_eq!(
        render(&resurrection),
        r##"<a href="#1-100"><span class="resurrection">Resurrection of Tyrnai: Book 1, Section 100 (200 shards)</span></a>"##
    );
}

#[test]
fn test_goto_links_to_its_section() {
    assert_eq!(
        render(&element("goto", &[("section", "7")])),
        r##"<a href="#1-7"><span class="turn-to">► Turn to 7</span></a>"##
    );
}

#[test]
fn test_image_resolves_against_image_dir() {
    let ctx = RenderContext::new("1").with_image_dir("book1");
    let image = element("image", &[("file", "map.jpg")]);
    let path = std::path::Path::new("book1").join("map.jpg");
    assert_eq!(
        render_element(&image, &ctx).unwrap(),
        format!("<img src=\"{}\"></img>", path.display())
    );
}

#[test]
fn test_if_is_trimmed() {
    let condition = Element::new("if").with_content("\n  if you have the codeword  \n");
    assert_eq!(render(&condition), "if you have the codeword");
}

// ========== sections ==========

#[test]
fn test_section_page() {
    let section = element("section", &[("name", "7"), ("boxes", "2")]).with_content("text");
    let page = render(&section);

    assert!(page.starts_with("\n<div class=\"page\">\n<div class=\"menu\" id=\"menu\">"));
    assert!(page.contains(
        "<h2 id=\"1-7\"><span class=\"section-title\">7</span><span class=\"tickboxes\"> ◻ ◻</span></h2>\ntext\n</div>\n"
    ));
}

#[test]
fn test_section_with_invalid_boxes() {
    let section = element("section", &[("name", "7"), ("boxes", "two")]);
    assert!(render(&section).contains("<span class=\"tickboxes\"></span>"));
}

#[test]
fn test_section_tickboxes_are_capped() {
    for boxes in ["18446744073709551615", "99999999999"] {
        let section = element("section", &[("name", "7"), ("boxes", boxes)]);
        let page = render(&section);
        assert_eq!(page.matches(TICKBOX).count(), MAX_TICKBOXES);
    }
}

#[test]
fn test_section_uses_single_book_menu() {
    let ctx = RenderContext::new("2").with_menu(Menu::Single(2));
    let page = render_element(&element("section", &[("name", "1")]), &ctx).unwrap();
    assert!(page.contains(r##"<a href="#map-golnir">Golnir Map</a>"##));
    assert!(page.contains(r#"<h2 id="2-1">"#));
}

#[test]
fn test_section_with_unknown_profession() {
    let section = element("section", &[("name", "Priest"), ("profession", "Priest")]);
    let err = render_element(&section, &RenderContext::new("1")).unwrap_err();
    assert!(matches!(err, RenderError::UnknownProfession { ref name, .. } if name == "Priest"));
}

// ========== group ==========

#[test]
fn test_group_prints_text_linked_to_following_goto() {
    let group = Element::new("group").with_content(
        "\n<text>\n\tVisit the inn\n</text><a href=\"#1-9\"><span class=\"turn-to\">► Turn to 9</span></a>",
    );
    assert_eq!(render(&group), r##"<a href="#1-9">Visit the inn</a>"##);
}

#[test]
fn test_group_without_target_uses_its_own_section() {
    let plain = Element::new("group").with_content("<text>Rest</text>");
    assert_eq!(render(&plain), "Rest");

    let linked = element("group", &[("section", "4")]).with_content("<text>Rest</text>");
    assert_eq!(render(&linked), r##"<a href="#1-4">Rest</a>"##);
}

#[test]
fn test_group_goto_with_ampersand_in_book() {
    let group = Element::new("group")
        .with_content(r#"<text>Inn</text><goto section="9" book="a&b"/>"#);
    assert_eq!(render(&group), r##"<a href="#a&b-9">Inn</a>"##);
}

#[test]
fn test_malformed_group_fails() {
    let broken = Element::new("group").with_content("<text>oops</txet>");
    let err = render_element(&broken, &RenderContext::new("1")).unwrap_err();
    assert!(matches!(err, RenderError::Group(_)));
}

// ========== whole documents ==========

#[test]
fn test_two_sections_with_cross_references() {
    let input = r#"<section name="1">Go on. <choices><choice section="2">Left</choice></choices></section>
<section name="2">The end. <goto section="1"/></section>"#;
    let doc = parse_document(input, &RenderContext::new("1")).unwrap();

    assert!(doc.output.contains(r#"<h2 id="1-1">"#));
    assert!(doc.output.contains(
        "<table class=\"choices\">\n<tr class=\"branch-option\">\n\t<th>Left</th>\n\t<td><a href=\"#1-2\"><span class=\"turn-to\">► Turn to 2</span></a></td>\n</tr>\n</table>"
    ));
    assert!(doc.output.contains(r#"<h2 id="1-2">"#));
    assert!(doc.output.contains(
        r##"The end. <a href="#1-1"><span class="turn-to">► Turn to 1</span></a>"##
    ));
    assert_eq!(doc.output.matches("<div class=\"page\">").count(), 2);
}

#[test]
fn test_group_inside_a_document() {
    let input = r#"<section name="3"><group><text>Visit the inn</text><goto section="9"/></group></section>"#;
    let doc = parse_document(input, &RenderContext::new("1")).unwrap();
    assert!(doc.output.contains(r##"<a href="#1-9">Visit the inn</a>"##));
    assert!(!doc.output.contains("Turn to 9"));
}
