//! Semantic component roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic role assigned to a design node by the classifier.
///
/// The set is closed: emitters match on it exhaustively, and anything the
/// classifier cannot place becomes [`ComponentType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Button,
    Input,
    Textarea,
    Select,
    Checkbox,
    Switch,
    Card,
    Dialog,
    Avatar,
    Badge,
    Alert,
    Tabs,
    Accordion,
    Table,
    Navbar,
    Sidebar,
    Footer,
    Hero,
    Icon,
    Image,
    Divider,
    Label,
    Link,
    Container,
    Text,
    Unknown,
}

impl ComponentType {
    /// Every variant, in declaration order.
    pub const ALL: [ComponentType; 26] = [
        ComponentType::Button,
        ComponentType::Input,
        ComponentType::Textarea,
        ComponentType::Select,
        ComponentType::Checkbox,
        ComponentType::Switch,
        ComponentType::Card,
        ComponentType::Dialog,
        ComponentType::Avatar,
        ComponentType::Badge,
        ComponentType::Alert,
        ComponentType::Tabs,
        ComponentType::Accordion,
        ComponentType::Table,
        ComponentType::Navbar,
        ComponentType::Sidebar,
        ComponentType::Footer,
        ComponentType::Hero,
        ComponentType::Icon,
        ComponentType::Image,
        ComponentType::Divider,
        ComponentType::Label,
        ComponentType::Link,
        ComponentType::Container,
        ComponentType::Text,
        ComponentType::Unknown,
    ];

    /// Returns the lowercase identifier used in serialized IR.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Button => "button",
            ComponentType::Input => "input",
            ComponentType::Textarea => "textarea",
            ComponentType::Select => "select",
            ComponentType::Checkbox => "checkbox",
            ComponentType::Switch => "switch",
            ComponentType::Card => "card",
            ComponentType::Dialog => "dialog",
            ComponentType::Avatar => "avatar",
            ComponentType::Badge => "badge",
            ComponentType::Alert => "alert",
            ComponentType::Tabs => "tabs",
            ComponentType::Accordion => "accordion",
            ComponentType::Table => "table",
            ComponentType::Navbar => "navbar",
            ComponentType::Sidebar => "sidebar",
            ComponentType::Footer => "footer",
            ComponentType::Hero => "hero",
            ComponentType::Icon => "icon",
            ComponentType::Image => "image",
            ComponentType::Divider => "divider",
            ComponentType::Label => "label",
            ComponentType::Link => "link",
            ComponentType::Container => "container",
            ComponentType::Text => "text",
            ComponentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of user interaction a node most likely expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractivityHint {
    Click,
    Input,
    Toggle,
    Navigation,
}
