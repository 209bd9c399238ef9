//! The shared component emitter.
//!
//! One engine lowers IR to markup for every target. A backend only supplies
//! a [`TargetRenderer`]: its markup spelling, its library mapping table and
//! the file wrapper around the rendered template.

use figura_core::Target;
use figura_ir::{ComponentType, IrNode, Size};
use tracing::debug;

use crate::{
    ImportCollector,
    mapping::{CardParts, LibraryMapping, MappingTable},
    markup::{Attr, Element, Markup, MarkupStyle},
    style::{TokenMap, node_classes},
};

/// Label used by a button wrapper that has no text of its own.
const DEFAULT_BUTTON_LABEL: &str = "Button";

/// The per-target capability the emitter is parameterized by.
pub trait TargetRenderer {
    fn target(&self) -> Target;

    fn markup_style(&self) -> MarkupStyle;

    fn mappings(&self) -> &MappingTable;

    /// Wrap a printed template in the target's component file.
    fn wrap(&self, name: &str, template: &str, imports: &ImportCollector) -> String;
}

/// Lowers one IR subtree to a complete component source file.
pub struct ComponentEmitter<'a> {
    renderer: &'a dyn TargetRenderer,
    tokens: Option<&'a TokenMap>,
}

impl<'a> ComponentEmitter<'a> {
    pub fn new(renderer: &'a dyn TargetRenderer) -> Self {
        Self {
            renderer,
            tokens: None,
        }
    }

    pub fn with_tokens(mut self, tokens: Option<&'a TokenMap>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Emit `node` as a component named `name`.
    ///
    /// Emission never fails and is deterministic.
    pub fn emit(&self, node: &IrNode, name: &str) -> String {
        let pruned = prune_decorative(node);
        let imports = self.collect_imports(&pruned);
        let style = self.renderer.markup_style();
        let template = style.print(&self.lower(&pruned, &style));

        debug!(
            target_name = %self.renderer.target(),
            component = name,
            imports = imports.symbols().count(),
            "emitted component"
        );
        self.renderer.wrap(name, &template, &imports)
    }

    /// Library imports for the component types present in `node`.
    pub fn collect_imports(&self, node: &IrNode) -> ImportCollector {
        let mut imports = ImportCollector::new();
        for ty in node.component_types() {
            if let Some(mapping) = self.renderer.mappings().get(ty) {
                for symbol in mapping.imports {
                    imports.add(mapping.module, symbol);
                }
            }
        }
        imports
    }

    fn lower(&self, node: &IrNode, style: &MarkupStyle) -> Markup {
        let classes = node_classes(node, self.tokens).to_string();
        let mappings = self.renderer.mappings();
        let class_attr = style.class_attr;

        match node.component_type {
            ComponentType::Text => {
                let mut p = Element::new("p").class(class_attr, &classes);
                if let Some(text) = node.text() {
                    p.push_child(Markup::text(text));
                }
                p.into()
            }
            ComponentType::Divider => match mappings.get(ComponentType::Divider) {
                Some(mapping) => mapping.element(class_attr, &classes).into(),
                None => Element::new("hr").class(class_attr, &classes).into(),
            },
            ComponentType::Image => Element::new("img")
                .class(class_attr, &classes)
                .attr(Attr::value("src", node.asset_url.as_deref().unwrap_or("")))
                .attr(Attr::value("alt", node.name.as_str()))
                .into(),
            ty => match mappings.get(ty) {
                Some(mapping) => match (ty, mappings.card_parts()) {
                    (ComponentType::Card, Some(parts)) => {
                        self.lower_card(node, mapping, parts, &classes, style)
                    }
                    _ => self.lower_mapped(node, mapping, &classes, style),
                },
                None => Element::new("div")
                    .class(class_attr, &classes)
                    .children_from(self.lower_children(&node.children, style))
                    .into(),
            },
        }
    }

    fn lower_children(&self, children: &[IrNode], style: &MarkupStyle) -> Vec<Markup> {
        children
            .iter()
            .map(|child| self.lower(child, style))
            .collect()
    }

    fn lower_mapped(
        &self,
        node: &IrNode,
        mapping: &LibraryMapping,
        classes: &str,
        style: &MarkupStyle,
    ) -> Markup {
        let mut element = mapping.element(style.class_attr, classes);

        if node.component_type == ComponentType::Button {
            let label = node.first_text().unwrap_or(DEFAULT_BUTTON_LABEL);
            return element.child(Markup::text(label)).into();
        }

        if !mapping.children_slot {
            if let Some(text) = node.first_text() {
                element.push_attr(Attr::value("placeholder", text));
            }
            return element.into();
        }

        element
            .children_from(self.lower_children(&node.children, style))
            .into()
    }

    fn lower_card(
        &self,
        card: &IrNode,
        mapping: &LibraryMapping,
        parts: &CardParts,
        classes: &str,
        style: &MarkupStyle,
    ) -> Markup {
        let slots = CardSlots::split(card);

        let mut element = mapping.element(style.class_attr, classes);

        if let Some(header) = slots.header {
            let title = header.first_text().unwrap_or(card.name.as_str());
            element.push_child(
                parts
                    .header
                    .element()
                    .child(parts.title.element().child(Markup::text(title))),
            );
        }

        if !slots.content.is_empty() {
            let content = slots
                .content
                .iter()
                .map(|child| self.lower(child, style));
            element.push_child(parts.content.element().children_from(content));
        }
        if let Some(footer) = slots.footer {
            element.push_child(parts.footer.element().child(self.lower(footer, style)));
        }
        element.into()
    }
}

/// A card's children split by label.
#[derive(Debug)]
pub struct CardSlots<'a> {
    pub header: Option<&'a IrNode>,
    pub footer: Option<&'a IrNode>,
    pub content: Vec<&'a IrNode>,
}

impl<'a> CardSlots<'a> {
    /// The first child labelled "header" is the header; the first other
    /// child labelled "footer" is the footer; everything else is content.
    pub fn split(card: &'a IrNode) -> Self {
        let label_has = |node: &IrNode, needle: &str| node.name.to_lowercase().contains(needle);

        let header = card
            .children
            .iter()
            .position(|child| label_has(child, "header"));
        let footer = card
            .children
            .iter()
            .enumerate()
            .position(|(i, child)| Some(i) != header && label_has(child, "footer"));

        Self {
            header: header.map(|i| &card.children[i]),
            footer: footer.map(|i| &card.children[i]),
            content: card
                .children
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != header && Some(*i) != footer)
                .map(|(_, child)| child)
                .collect(),
        }
    }
}

/// A copy of `node` without invisible or decorative descendants.
///
/// Decorative means a leaf with no text that is either an icon/unknown
/// node or a container hugging its content vertically. Leaf status is taken
/// from the input tree. The root itself is always kept.
pub fn prune_decorative(node: &IrNode) -> IrNode {
    let mut root = node.clone();
    prune_children(&mut root);
    root
}

fn prune_children(node: &mut IrNode) {
    node.children
        .retain(|child| child.visible && !is_decorative(child));
    for child in &mut node.children {
        prune_children(child);
    }
}

/// True for a textless leaf that carries no content worth emitting.
pub fn is_decorative(node: &IrNode) -> bool {
    if !node.is_leaf() || node.text().is_some() {
        return false;
    }
    match node.component_type {
        ComponentType::Icon | ComponentType::Unknown => true,
        ComponentType::Container => matches!(
            (node.dimensions.width, node.dimensions.height),
            (Size::Auto, Size::Auto) | (Size::Fill, Size::Auto)
        ),
        _ => false,
    }
}
