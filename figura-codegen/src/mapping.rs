//! Component-library mapping tables.
//!
//! Each backend declares a static [`MappingTable`] that replaces semantic
//! component types with a library wrapper element. Types without an entry
//! fall through to generic markup.

use figura_ir::ComponentType;

use crate::markup::{Attr, Element};

/// A default property a wrapper is emitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prop {
    /// `name="value"`
    Value(&'static str, &'static str),
    /// A bare attribute such as `collapsible`.
    Flag(&'static str),
}

impl Prop {
    fn to_attr(self) -> Attr {
        match self {
            Prop::Value(name, value) => Attr::value(name, value),
            Prop::Flag(name) => Attr::flag(name),
        }
    }
}

/// How one component type renders in a given library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryMapping {
    /// Element or component tag.
    pub tag: &'static str,
    /// Attribute directives written right after the tag (`hlmBtn`).
    pub directives: &'static [&'static str],
    /// Module the wrapper symbols are imported from.
    pub module: &'static str,
    /// Symbols to import when this type appears in a subtree.
    pub imports: &'static [&'static str],
    pub props: &'static [Prop],
    /// Whether the wrapper takes child content. Wrappers without a slot
    /// always self-close.
    pub children_slot: bool,
}

impl LibraryMapping {
    /// An element for this wrapper: tag, directives, class, then props.
    pub fn element(&self, class_attr: &str, classes: &str) -> Element {
        let mut element = Element::new(self.tag);
        for directive in self.directives {
            element.push_attr(Attr::flag(*directive));
        }
        element.push_class(class_attr, classes);
        for prop in self.props {
            element.push_attr(prop.to_attr());
        }
        element
    }
}

/// A tag plus directive flags, used for card sub-parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartElement {
    pub tag: &'static str,
    pub directives: &'static [&'static str],
}

impl PartElement {
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            directives: &[],
        }
    }

    pub const fn with_directive(tag: &'static str, directives: &'static [&'static str]) -> Self {
        Self { tag, directives }
    }

    pub fn element(&self) -> Element {
        let mut element = Element::new(self.tag);
        for directive in self.directives {
            element.push_attr(Attr::flag(*directive));
        }
        element
    }
}

/// The sub-part wrappers a card is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardParts {
    pub header: PartElement,
    pub title: PartElement,
    pub content: PartElement,
    pub footer: PartElement,
}

/// A target's full mapping table.
#[derive(Debug, Clone, Copy)]
pub struct MappingTable {
    entries: &'static [(ComponentType, LibraryMapping)],
    card_parts: Option<CardParts>,
}

impl MappingTable {
    pub const fn new(entries: &'static [(ComponentType, LibraryMapping)]) -> Self {
        Self {
            entries,
            card_parts: None,
        }
    }

    pub const fn with_card_parts(mut self, parts: CardParts) -> Self {
        self.card_parts = Some(parts);
        self
    }

    /// The mapping for `ty`, if the library provides one.
    pub fn get(&self, ty: ComponentType) -> Option<&LibraryMapping> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == ty)
            .map(|(_, mapping)| mapping)
    }

    pub fn card_parts(&self) -> Option<&CardParts> {
        self.card_parts.as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ComponentType, LibraryMapping)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
