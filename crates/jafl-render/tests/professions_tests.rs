//! Integration tests for the profession table and the `Adventurers.xml`
//! loader.

use jafl_dom::Element;
use jafl_render::{
    AdventurersError, Equipment, Profession, ProfessionTable, RenderContext, RenderError,
    render_element,
};
use pretty_assertions::assert_eq;

const ADVENTURERS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<adventurers>
  <stamina amount="9"/>
  <rank amount="1"/>
  <gold amount="16"/>
  <abilities>
    <profession name="Priest">4 2 3 6 4 2</profession>
    <profession name="Wayfarer">2 5 2 3 6 4</profession>
  </abilities>
  <items>
    <weapon name="mace" profession="Priest"/>
    <weapon name="spear" profession="Wayfarer"/>
    <armor name="leather armor" bonus="1"/>
  </items>
  <starting>
    <adventurer name="Marana" profession="Priest">A priestess of Alvir and Valmir.</adventurer>
    <adventurer name="Chalor" profession="Wayfarer">
      A wanderer of the steppes.
    </adventurer>
  </starting>
</adventurers>"#;

/// Helper to load the sample table
fn table() -> ProfessionTable {
    ProfessionTable::from_adventurers_xml(ADVENTURERS).unwrap()
}

// ========== loading ==========

#[test]
fn test_one_entry_per_adventurer() {
    let table = table();
    assert_eq!(table.len(), 2);
    assert_eq!(table.names(), vec!["Priest", "Wayfarer"]);
}

#[test]
fn test_profession_fields() {
    let table = table();
    let priest = table.lookup("Priest").unwrap();

    assert_eq!(priest.person_name, "Marana");
    assert_eq!(priest.description, "A priestess of Alvir and Valmir.");
    assert_eq!(
        (priest.stamina.as_str(), priest.rank.as_str(), priest.gold.as_str()),
        ("9", "1", "16")
    );
    assert_eq!(priest.abilities, vec!["4", "2", "3", "6", "4", "2"]);
    assert_eq!(
        priest.equipment,
        vec![
            Equipment {
                name: "mace".to_string(),
                kind: "weapon".to_string(),
                bonus: String::new(),
            },
            Equipment {
                name: "leather armor".to_string(),
                kind: "armor".to_string(),
                bonus: "1".to_string(),
            },
        ]
    );

    let wayfarer = table.lookup("Wayfarer").unwrap();
    assert_eq!(wayfarer.description, "A wanderer of the steppes.");
    assert_eq!(wayfarer.equipment[0].name, "spear");
}

#[test]
fn test_malformed_adventurers_file() {
    let err = ProfessionTable::from_adventurers_xml("<adventurers><gold></adventurers>")
        .unwrap_err();
    assert!(matches!(err, AdventurersError::Xml(_)));
}

// ========== lookup ==========

#[test]
fn test_unknown_profession_lists_known_ones() {
    let err = table().lookup("Troubadour").unwrap_err();
    match &err {
        RenderError::UnknownProfession { name, known } => {
            assert_eq!(name, "Troubadour");
            assert_eq!(known, &vec!["Priest".to_string(), "Wayfarer".to_string()]);
        }
        other => panic!("Expected UnknownProfession, got {other:?}"),
    }
    assert!(err.to_string().contains("[Priest, Wayfarer]"));
}

// ========== stat blocks ==========

#[test]
fn test_stat_block() {
    let table = table();
    let block = table.lookup("Priest").unwrap().stat_block().unwrap();

    assert!(block.starts_with("<h3 class=\"profession\">\nPriest\n</h3>\n<table class=\"stats-sheet\">"));
    assert!(block.contains(
        "<td>4</td>\n<td>2</td>\n<td>3</td>\n<td>6</td>\n<td>4</td>\n<td>2</td>"
    ));
    assert!(block.contains(
        "<td colspan=\"2\">9</td>\n<td colspan=\"2\">1</td>\n<td colspan=\"2\">16</td>"
    ));
    assert!(block.contains(
        "<tr>\n<th colspan=\"2\">Weapon</th>\n<td class=\"item\" colspan=\"4\">Mace</td>\n</tr>"
    ));
    assert!(block.contains("<td class=\"item\" colspan=\"4\">Leather Armor (+1)</td>"));
    assert!(block.ends_with("</tr>\n</table>"));
}

#[test]
fn test_stat_block_needs_six_abilities() {
    let profession = Profession {
        name: "Mystic".to_string(),
        abilities: vec!["1".to_string(); 5],
        ..Profession::default()
    };
    let err = profession.stat_block().unwrap_err();
    assert!(matches!(err, RenderError::Abilities { found: 5, .. }));
}

#[test]
fn test_profession_section() {
    let ctx = RenderContext::new("1").with_professions(table());
    let section = Element::new("section")
        .with_attribute("name", "Priest (Marana)")
        .with_attribute("profession", "Priest")
        .with_content("Your story begins.");
    let page = render_element(&section, &ctx).unwrap();

    assert!(page.contains(r#"<h2 id="1-Priest"><span class="section-title">Priest (Marana)</span>"#));
    let stats = page.find("stats-sheet").unwrap();
    let story = page.find("Your story begins.").unwrap();
    assert!(stats < story);
}
