//! The IR node tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    Border, ComponentType, CornerRadii, Dimensions, Fill, InteractivityHint, Layout, Shadow,
    TextStyle,
};

/// One node of the canonical design tree.
///
/// Children are owned exclusively by their parent, so the tree is acyclic by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrNode {
    pub id: String,
    pub name: String,
    pub component_type: ComponentType,
    pub visible: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Fill>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub borders: Vec<Border>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shadows: Vec<Shadow>,
    #[serde(default)]
    pub radii: CornerRadii,
    pub opacity: f64,
    #[serde(default)]
    pub clip_content: bool,

    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub dimensions: Dimensions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,

    /// Filled in after parsing by asset resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,

    #[serde(default)]
    pub is_interactive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactivity_hint: Option<InteractivityHint>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IrNode>,
}

impl IrNode {
    /// A visible, fully opaque node with default style and no children.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: ComponentType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type,
            visible: true,
            fills: Vec::new(),
            borders: Vec::new(),
            shadows: Vec::new(),
            radii: CornerRadii::default(),
            opacity: 1.0,
            clip_content: false,
            layout: Layout::default(),
            dimensions: Dimensions::default(),
            text_content: None,
            text_style: None,
            asset_url: None,
            is_interactive: false,
            interactivity_hint: None,
            children: Vec::new(),
        }
    }

    /// Set the text content (builder style).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Append children (builder style).
    pub fn with_children(mut self, children: impl IntoIterator<Item = IrNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Own text content, if non-empty.
    pub fn text(&self) -> Option<&str> {
        self.text_content.as_deref().filter(|t| !t.is_empty())
    }
}

/// Where a tree came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMeta {
    pub file_name: String,
    pub last_modified: String,
    pub root_node_id: String,
}

/// A parsed design subtree plus its provenance and component catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrDesignTree {
    pub meta: SourceMeta,
    pub root: IrNode,
    /// Component id → component name, in document order.
    #[serde(default)]
    pub components: IndexMap<String, String>,
}

impl IrDesignTree {
    pub fn new(meta: SourceMeta, root: IrNode) -> Self {
        Self {
            meta,
            root,
            components: IndexMap::new(),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a tree previously written by [`IrDesignTree::to_json_pretty`].
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Attach a resolved asset URL to every node with `id`.
    ///
    /// Returns how many nodes were patched.
    pub fn patch_asset_url(&mut self, id: &str, url: &str) -> usize {
        self.root.patch_asset_url(id, url)
    }
}
