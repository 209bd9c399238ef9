//! Heuristic semantic classification of design nodes.
//!
//! Classification walks [`RULES`] top to bottom and the first match wins.
//! Order is load-bearing: "Table" contains "tab" and therefore classifies as
//! [`ComponentType::Tabs`], and "Sidenav" hits the navbar keywords before the
//! sidebar ones. Reordering the table changes results.

use figura_document::{RawNode, model::NodeType};
use figura_ir::{ComponentType, InteractivityHint};

/// What a rule looks at.
pub enum Matcher {
    /// The node is of this kind.
    Kind(NodeType),
    /// A structural predicate over the node and its lowercased label.
    Structural(fn(&RawNode, &str) -> bool),
    /// The lowercased label contains any of these substrings.
    Keywords(&'static [&'static str]),
}

/// One `(predicate, result)` entry of the classifier.
pub struct Rule {
    pub matcher: Matcher,
    pub result: ComponentType,
}

impl Rule {
    const fn keywords(words: &'static [&'static str], result: ComponentType) -> Self {
        Self {
            matcher: Matcher::Keywords(words),
            result,
        }
    }

    const fn structural(predicate: fn(&RawNode, &str) -> bool, result: ComponentType) -> Self {
        Self {
            matcher: Matcher::Structural(predicate),
            result,
        }
    }

    fn matches(&self, node: &RawNode, label: &str) -> bool {
        match &self.matcher {
            Matcher::Kind(kind) => node.node_type == *kind,
            Matcher::Structural(predicate) => predicate(node, label),
            Matcher::Keywords(words) => words.iter().any(|word| label.contains(word)),
        }
    }
}

/// A vector primitive that reads as a rule line.
fn is_straight(node: &RawNode) -> bool {
    if node.node_type == NodeType::Line {
        return true;
    }
    node.absolute_bounding_box
        .is_some_and(|bbox| (bbox.width <= 1.0) != (bbox.height <= 1.0))
}

/// The classifier, in priority order.
pub static RULES: &[Rule] = &[
    // Structural rules.
    Rule {
        matcher: Matcher::Kind(NodeType::Text),
        result: ComponentType::Text,
    },
    Rule::structural(
        |node, _| node.node_type == NodeType::Rectangle && node.has_image_fill(),
        ComponentType::Image,
    ),
    Rule::structural(
        |node, label| node.node_type == NodeType::Ellipse && label.contains("avatar"),
        ComponentType::Avatar,
    ),
    Rule::structural(
        |node, label| node.node_type.is_vector() && label.contains("icon"),
        ComponentType::Icon,
    ),
    Rule::structural(
        |node, label| {
            node.node_type.is_vector()
                && (label.contains("divider") || label.contains("separator") || is_straight(node))
        },
        ComponentType::Divider,
    ),
    Rule::structural(|node, _| node.node_type.is_vector(), ComponentType::Icon),
    // Label keywords.
    Rule::keywords(&["button", "btn", "cta"], ComponentType::Button),
    Rule::keywords(&["input", "text field", "textfield"], ComponentType::Input),
    Rule::keywords(&["textarea", "text area"], ComponentType::Textarea),
    Rule::keywords(&["select", "dropdown", "combobox"], ComponentType::Select),
    Rule::keywords(&["checkbox", "check box"], ComponentType::Checkbox),
    Rule::keywords(&["switch", "toggle"], ComponentType::Switch),
    Rule::keywords(&["card"], ComponentType::Card),
    Rule::keywords(&["dialog", "modal", "popup"], ComponentType::Dialog),
    Rule::keywords(&["avatar", "profile pic"], ComponentType::Avatar),
    Rule::keywords(&["badge", "tag", "chip"], ComponentType::Badge),
    Rule::keywords(&["alert", "toast", "notification"], ComponentType::Alert),
    Rule::keywords(&["tab"], ComponentType::Tabs),
    Rule::keywords(
        &["accordion", "collapsible", "expand"],
        ComponentType::Accordion,
    ),
    Rule::keywords(&["table"], ComponentType::Table),
    Rule::keywords(&["nav", "header", "topbar", "appbar"], ComponentType::Navbar),
    Rule::keywords(&["sidebar", "drawer", "sidenav"], ComponentType::Sidebar),
    Rule::keywords(&["footer"], ComponentType::Footer),
    Rule::keywords(&["hero", "banner", "jumbotron"], ComponentType::Hero),
    Rule::keywords(&["link", "anchor"], ComponentType::Link),
    Rule::keywords(&["label", "caption"], ComponentType::Label),
    Rule::keywords(
        &["image", "img", "photo", "thumbnail"],
        ComponentType::Image,
    ),
    Rule::keywords(&["divider", "separator", "hr"], ComponentType::Divider),
    // Anything that groups other nodes.
    Rule::structural(|node, _| node.node_type.is_container(), ComponentType::Container),
];

/// Assign a semantic role to a raw node.
pub fn classify(node: &RawNode) -> ComponentType {
    let label = node.name.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(node, &label))
        .map_or(ComponentType::Unknown, |rule| rule.result)
}

/// Whether nodes of this type respond to user input.
pub fn is_interactive(component_type: ComponentType) -> bool {
    matches!(
        component_type,
        ComponentType::Button
            | ComponentType::Input
            | ComponentType::Textarea
            | ComponentType::Select
            | ComponentType::Checkbox
            | ComponentType::Switch
            | ComponentType::Dialog
            | ComponentType::Tabs
            | ComponentType::Accordion
            | ComponentType::Link
            | ComponentType::Navbar
            | ComponentType::Sidebar
    )
}

/// The kind of interaction nodes of this type most likely expect.
pub fn interactivity_hint(component_type: ComponentType) -> Option<InteractivityHint> {
    match component_type {
        ComponentType::Button | ComponentType::Link | ComponentType::Card => {
            Some(InteractivityHint::Click)
        }
        ComponentType::Input | ComponentType::Textarea | ComponentType::Select => {
            Some(InteractivityHint::Input)
        }
        ComponentType::Checkbox | ComponentType::Switch => Some(InteractivityHint::Toggle),
        ComponentType::Navbar | ComponentType::Sidebar | ComponentType::Tabs => {
            Some(InteractivityHint::Navigation)
        }
        _ => None,
    }
}
