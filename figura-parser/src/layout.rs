//! Auto-layout and sizing conversion.
//!
//! Each source enum maps 1:1 onto the IR vocabulary. Absent or unrecognized
//! values fall back to `start` alignment, zero spacing and no flex axis.

use figura_document::{
    RawNode,
    model::{AxisAlign, LayoutMode, LayoutWrap, SizingMode},
};
use figura_ir::{AlignItems, Dimensions, Direction, JustifyContent, Layout, Padding, Size};

/// Lower the auto-layout fields of a node.
pub fn lower_layout(node: &RawNode) -> Layout {
    let wrap = node.layout_wrap == Some(LayoutWrap::Wrap);
    let direction = match node.layout_mode {
        Some(LayoutMode::Horizontal) => Direction::Horizontal,
        Some(LayoutMode::Vertical) => Direction::Vertical,
        _ if wrap => Direction::Wrap,
        _ => Direction::None,
    };

    Layout {
        direction,
        align_items: lower_counter_axis(node.counter_axis_align_items),
        justify_content: lower_primary_axis(node.primary_axis_align_items),
        gap: non_negative(node.item_spacing),
        padding: Padding {
            top: non_negative(node.padding_top),
            right: non_negative(node.padding_right),
            bottom: non_negative(node.padding_bottom),
            left: non_negative(node.padding_left),
        },
        wrap,
    }
}

fn lower_counter_axis(value: Option<AxisAlign>) -> AlignItems {
    match value {
        Some(AxisAlign::Center) => AlignItems::Center,
        Some(AxisAlign::Max) => AlignItems::End,
        Some(AxisAlign::Baseline) => AlignItems::Baseline,
        _ => AlignItems::Start,
    }
}

fn lower_primary_axis(value: Option<AxisAlign>) -> JustifyContent {
    match value {
        Some(AxisAlign::Center) => JustifyContent::Center,
        Some(AxisAlign::Max) => JustifyContent::End,
        Some(AxisAlign::SpaceBetween) => JustifyContent::Between,
        _ => JustifyContent::Start,
    }
}

fn non_negative(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

/// Lower sizing modes and constraints of a node.
///
/// `FILL` expands, `HUG` shrinks to content, anything else takes the fixed
/// bounding-box size.
pub fn lower_dimensions(node: &RawNode) -> Dimensions {
    let bbox = node.absolute_bounding_box;
    Dimensions {
        width: lower_size(node.layout_sizing_horizontal, bbox.map(|b| b.width)),
        height: lower_size(node.layout_sizing_vertical, bbox.map(|b| b.height)),
        min_width: node.min_width,
        max_width: node.max_width,
        min_height: node.min_height,
        max_height: node.max_height,
    }
}

fn lower_size(mode: Option<SizingMode>, extent: Option<f64>) -> Size {
    match mode {
        Some(SizingMode::Fill) => Size::Fill,
        Some(SizingMode::Hug) => Size::Auto,
        _ => Size::Fixed(non_negative(extent)),
    }
}
