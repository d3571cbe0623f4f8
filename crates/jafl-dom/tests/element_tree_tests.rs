//! Tests for the arena element tree.

use jafl_dom::{Element, ElementId, ElementTree};

// ========== alloc ==========

#[test]
fn test_alloc_links_parent_and_children() {
    let mut tree = ElementTree::new();
    let section = tree.alloc(Element::new("section"), None);
    let choices = tree.alloc(Element::new("choices"), Some(section));
    let a = tree.alloc(Element::new("choice"), Some(choices));
    let b = tree.alloc(Element::new("choice"), Some(choices));

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.children(section), &[choices]);
    assert_eq!(tree.children(choices), &[a, b]);
    assert_eq!(tree.parent(a), Some(choices));
    assert_eq!(tree.parent(section), None);
}

#[test]
fn test_roots_in_document_order() {
    let mut tree = ElementTree::new();
    let first = tree.alloc(Element::new("section"), None);
    let _ = tree.alloc(Element::new("p"), Some(first));
    let second = tree.alloc(Element::new("section"), None);

    let roots: Vec<ElementId> = tree.roots().collect();
    assert_eq!(roots, vec![first, second]);
}

#[test]
fn test_unknown_id_is_harmless() {
    let tree = ElementTree::new();
    assert!(tree.is_empty());
    assert!(tree.get(ElementId(3)).is_none());
    assert!(tree.children(ElementId(3)).is_empty());
    assert_eq!(tree.parent(ElementId(3)), None);
}

// ========== element ==========

#[test]
fn test_element_attribute_helpers() {
    let element = Element::new("item")
        .with_attribute("name", "sword")
        .with_content("  \n ");

    assert_eq!(element.attr("name"), Some("sword"));
    assert_eq!(element.attr("bonus"), None);
    assert_eq!(element.attr_or_empty("bonus"), "");
    assert!(!element.has_content());
}

#[test]
fn test_element_content_is_mutable_through_tree() {
    let mut tree = ElementTree::new();
    let id = tree.alloc(Element::new("section"), None);
    tree.element_mut(id).unwrap().content.push_str("Hello");

    assert_eq!(tree.element(id).unwrap().content, "Hello");
    assert_eq!(tree.find_by_name("section"), Some(id));
}

#[test]
fn test_tree_serializes_to_json() {
    let mut tree = ElementTree::new();
    let _ = tree.alloc(Element::new("goto").with_attribute("section", "2"), None);

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["nodes"][0]["element"]["name"], "goto");
    assert_eq!(json["nodes"][0]["element"]["attributes"]["section"], "2");
}

#[test]
fn test_display_serializes_unknown_markup() {
    let element = Element::new("foo")
        .with_attribute("b", "2")
        .with_attribute("a", "1")
        .with_content("bar");

    assert_eq!(element.to_string(), "\n<foo a=\"1\" b=\"2\">\n\tbar\n</foo>");
}
