//! Serde models of the design service's JSON.
//!
//! Only the fields the compiler reads are modelled. Every enum carries an
//! `Other` catch-all so new values from the service degrade instead of
//! failing the whole response.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Response of `GET /files/{key}/nodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNodesResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Requested id → subtree. The service answers `null` for ids it does not know.
    #[serde(default)]
    pub nodes: IndexMap<String, Option<NodeEntry>>,
}

impl FileNodesResponse {
    /// The entry for `id`, if present and non-null.
    pub fn node(&self, id: &str) -> Option<&NodeEntry> {
        self.nodes.get(id).and_then(Option::as_ref)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub document: RawNode,
    #[serde(default)]
    pub components: IndexMap<String, ComponentMeta>,
    #[serde(default)]
    pub styles: IndexMap<String, StyleMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMeta {
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMeta {
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub style_type: String,
    #[serde(default)]
    pub description: String,
}

/// Response of `GET /images/{key}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub images: IndexMap<String, Option<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Star,
    Line,
    RegularPolygon,
    BooleanOperation,
    Slice,
    #[serde(other)]
    Other,
}

impl NodeType {
    /// Vector primitives drawn from paths rather than boxes.
    pub fn is_vector(&self) -> bool {
        matches!(
            self,
            NodeType::Vector
                | NodeType::Star
                | NodeType::Line
                | NodeType::Ellipse
                | NodeType::RegularPolygon
                | NodeType::BooleanOperation
        )
    }

    /// Node kinds that group other nodes.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeType::Frame
                | NodeType::Group
                | NodeType::Section
                | NodeType::Component
                | NodeType::ComponentSet
                | NodeType::Instance
        )
    }
}

/// A node of the design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<RawNode>,

    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    #[serde(default)]
    pub stroke_dashes: Vec<f64>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    pub opacity: Option<f64>,
    pub corner_radius: Option<f64>,
    pub rectangle_corner_radii: Option<[f64; 4]>,
    pub clips_content: Option<bool>,

    pub layout_mode: Option<LayoutMode>,
    pub primary_axis_align_items: Option<AxisAlign>,
    pub counter_axis_align_items: Option<AxisAlign>,
    pub layout_wrap: Option<LayoutWrap>,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub item_spacing: Option<f64>,
    pub layout_sizing_horizontal: Option<SizingMode>,
    pub layout_sizing_vertical: Option<SizingMode>,
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,

    pub characters: Option<String>,
    pub style: Option<TypeStyle>,
    pub component_id: Option<String>,
}

fn default_true() -> bool {
    true
}

impl RawNode {
    /// A bare node of the given kind, mostly useful for building fixtures.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            visible: true,
            children: Vec::new(),
            absolute_bounding_box: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: None,
            stroke_dashes: Vec::new(),
            effects: Vec::new(),
            opacity: None,
            corner_radius: None,
            rectangle_corner_radii: None,
            clips_content: None,
            layout_mode: None,
            primary_axis_align_items: None,
            counter_axis_align_items: None,
            layout_wrap: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            item_spacing: None,
            layout_sizing_horizontal: None,
            layout_sizing_vertical: None,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            characters: None,
            style: None,
            component_id: None,
        }
    }

    pub fn has_image_fill(&self) -> bool {
        self.fills
            .iter()
            .any(|paint| paint.visible && paint.paint_type == PaintType::Image)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Channels in the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: RawColor,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub opacity: Option<f64>,
    pub color: Option<RawColor>,
    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
    pub image_ref: Option<String>,
}

impl Paint {
    pub fn solid(color: RawColor) -> Self {
        Self {
            paint_type: PaintType::Solid,
            visible: true,
            opacity: None,
            color: Some(color),
            gradient_stops: Vec::new(),
            image_ref: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub color: Option<RawColor>,
    pub offset: Option<Vector>,
    #[serde(default)]
    pub radius: f64,
    pub spread: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    Baseline,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    NoWrap,
    Wrap,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    Fixed,
    Hug,
    Fill,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    Left,
    Center,
    Right,
    Justified,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Original,
    Upper,
    Lower,
    Title,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecorationKind {
    None,
    Underline,
    Strikethrough,
    #[serde(other)]
    Other,
}

/// Typography of a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_weight: Option<f64>,
    pub font_size: Option<f64>,
    pub line_height_px: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    pub text_case: Option<TextCase>,
    pub text_decoration: Option<TextDecorationKind>,
    pub italic: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "name": "Marketing Site",
        "lastModified": "2024-05-01T10:00:00Z",
        "version": "123",
        "nodes": {
            "1:2": {
                "document": {
                    "id": "1:2",
                    "name": "Hero",
                    "type": "FRAME",
                    "layoutMode": "HORIZONTAL",
                    "primaryAxisAlignItems": "SPACE_BETWEEN",
                    "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1, "a": 1}}],
                    "children": [
                        {"id": "1:3", "name": "Title", "type": "TEXT", "characters": "Hello",
                         "style": {"fontFamily": "Inter", "fontWeight": 700, "fontSize": 48,
                                   "textCase": "UPPER"}},
                        {"id": "1:4", "name": "Sparkle", "type": "WASHI_TAPE", "visible": false}
                    ]
                },
                "components": {"c:1": {"key": "k", "name": "Button"}},
                "styles": {}
            },
            "9:9": null
        }
    }"#;

    #[test]
    fn test_deserialize_nodes_response() {
        let response: FileNodesResponse = serde_json::from_str(RESPONSE).unwrap();

        assert_eq!(response.name, "Marketing Site");
        let entry = response.node("1:2").unwrap();
        assert_eq!(entry.document.node_type, NodeType::Frame);
        assert_eq!(entry.document.layout_mode, Some(LayoutMode::Horizontal));
        assert_eq!(
            entry.document.primary_axis_align_items,
            Some(AxisAlign::SpaceBetween)
        );
        assert_eq!(entry.components["c:1"].name, "Button");

        let title = &entry.document.children[0];
        assert_eq!(title.characters.as_deref(), Some("Hello"));
        assert_eq!(title.style.as_ref().unwrap().text_case, Some(TextCase::Upper));
        assert!(title.visible);
    }

    #[test]
    fn test_unknown_values_degrade() {
        let response: FileNodesResponse = serde_json::from_str(RESPONSE).unwrap();
        let sparkle = &response.node("1:2").unwrap().document.children[1];
        assert_eq!(sparkle.node_type, NodeType::Other);
        assert!(!sparkle.visible);
    }

    #[test]
    fn test_null_node_is_absent() {
        let response: FileNodesResponse = serde_json::from_str(RESPONSE).unwrap();
        assert!(response.nodes.contains_key("9:9"));
        assert!(response.node("9:9").is_none());
        assert!(response.node("0:0").is_none());
    }

    #[test]
    fn test_images_response() {
        let images: ImagesResponse =
            serde_json::from_str(r#"{"err": null, "images": {"1:2": "https://cdn/a.png", "1:3": null}}"#)
                .unwrap();
        assert_eq!(images.images["1:2"].as_deref(), Some("https://cdn/a.png"));
        assert_eq!(images.images["1:3"], None);
    }

    #[test]
    fn test_has_image_fill_ignores_hidden_paint() {
        let mut node = RawNode::new("1", "Photo", NodeType::Rectangle);
        node.fills.push(Paint {
            paint_type: PaintType::Image,
            visible: false,
            opacity: None,
            color: None,
            gradient_stops: Vec::new(),
            image_ref: Some("ref".into()),
        });
        assert!(!node.has_image_fill());
        node.fills[0].visible = true;
        assert!(node.has_image_fill());
    }
}
