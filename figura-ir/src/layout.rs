//! Auto-layout and sizing records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
    Wrap,
    #[default]
    None,
}

/// Cross-axis alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignItems {
    #[default]
    Start,
    Center,
    End,
    Stretch,
    Baseline,
}

/// Main-axis distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    Between,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// How a node arranges its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub direction: Direction,
    pub align_items: AlignItems,
    pub justify_content: JustifyContent,
    pub gap: f64,
    pub padding: Padding,
    pub wrap: bool,
}

impl Layout {
    /// True when the node lays out its children on a flex axis.
    pub fn is_flex(&self) -> bool {
        self.direction != Direction::None
    }

    pub fn is_horizontal(&self) -> bool {
        self.direction == Direction::Horizontal
    }
}

/// Size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Fixed pixel size.
    Fixed(f64),
    /// Hug contents.
    Auto,
    /// Expand to fill the parent.
    Fill,
}

impl Default for Size {
    fn default() -> Self {
        Size::Fixed(0.0)
    }
}

impl Size {
    pub fn fixed(&self) -> Option<f64> {
        match self {
            Size::Fixed(px) => Some(*px),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: Size,
    pub height: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
}

impl Dimensions {
    pub fn new(width: Size, height: Size) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_serialization() {
        assert_eq!(serde_json::to_string(&Size::Auto).unwrap(), r#""auto""#);
        assert_eq!(
            serde_json::to_string(&Size::Fixed(200.0)).unwrap(),
            r#"{"fixed":200.0}"#
        );
        let fill: Size = serde_json::from_str(r#""fill""#).unwrap();
        assert_eq!(fill, Size::Fill);
    }

    #[test]
    fn test_layout_defaults() {
        let layout = Layout::default();
        assert!(!layout.is_flex());
        assert_eq!(layout.align_items, AlignItems::Start);
        assert_eq!(layout.justify_content, JustifyContent::Start);
        assert!(layout.padding.is_zero());
    }
}
