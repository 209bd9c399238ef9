//! Paint, stroke, effect, radius and typography conversion.

use figura_document::{
    RawNode,
    model::{
        ColorStop, EffectType, Paint, PaintType, RawColor, TextAlignHorizontal, TextCase,
        TextDecorationKind, TypeStyle, Vector,
    },
};
use figura_ir::{
    Border, BorderStyle, Color, CornerRadii, Fill, GradientStop, Shadow, ShadowKind, TextAlign,
    TextDecoration, TextStyle, TextTransform,
};

/// Color used for shadows that carry no color of their own.
const DEFAULT_SHADOW_ALPHA: f64 = 0.25;

/// Convert a unit-interval color, folding in an extra paint opacity.
pub fn lower_color(color: &RawColor, opacity: Option<f64>) -> Color {
    Color::from_unit(color.r, color.g, color.b, color.a * opacity.unwrap_or(1.0))
}

fn lower_stops(stops: &[ColorStop], opacity: Option<f64>) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|stop| GradientStop {
            position: stop.position,
            color: lower_color(&stop.color, opacity),
        })
        .collect()
}

/// Convert one paint. Hidden paints, colorless solids and unsupported kinds
/// yield `None`.
pub fn lower_fill(paint: &Paint) -> Option<Fill> {
    if !paint.visible {
        return None;
    }
    match paint.paint_type {
        PaintType::Solid => paint.color.as_ref().map(|color| Fill::Solid {
            color: lower_color(color, paint.opacity),
        }),
        PaintType::GradientLinear => Some(Fill::GradientLinear {
            stops: lower_stops(&paint.gradient_stops, paint.opacity),
        }),
        PaintType::GradientRadial => Some(Fill::GradientRadial {
            stops: lower_stops(&paint.gradient_stops, paint.opacity),
        }),
        PaintType::Image => Some(Fill::Image {
            image_ref: paint.image_ref.clone(),
        }),
        PaintType::GradientAngular | PaintType::GradientDiamond | PaintType::Other => None,
    }
}

pub fn lower_fills(node: &RawNode) -> Vec<Fill> {
    node.fills.iter().filter_map(lower_fill).collect()
}

/// Visible colored strokes become borders sharing the node's stroke weight.
pub fn lower_borders(node: &RawNode) -> Vec<Border> {
    let width = node.stroke_weight.unwrap_or(1.0).max(0.0);
    let style = if node.stroke_dashes.iter().any(|dash| *dash > 0.0) {
        if node.stroke_dashes.iter().all(|dash| *dash <= width) {
            BorderStyle::Dotted
        } else {
            BorderStyle::Dashed
        }
    } else {
        BorderStyle::Solid
    };

    node.strokes
        .iter()
        .filter(|paint| paint.visible)
        .filter_map(|paint| {
            paint.color.as_ref().map(|color| Border {
                color: lower_color(color, paint.opacity),
                width,
                style,
            })
        })
        .collect()
}

pub fn lower_shadows(node: &RawNode) -> Vec<Shadow> {
    node.effects
        .iter()
        .filter(|effect| effect.visible)
        .filter_map(|effect| {
            let kind = match effect.effect_type {
                EffectType::DropShadow => ShadowKind::Drop,
                EffectType::InnerShadow => ShadowKind::Inner,
                _ => return None,
            };
            let offset = effect.offset.unwrap_or(Vector { x: 0.0, y: 0.0 });
            Some(Shadow {
                kind,
                color: effect.color.as_ref().map_or_else(
                    || Color::rgba(0, 0, 0, DEFAULT_SHADOW_ALPHA),
                    |color| lower_color(color, None),
                ),
                offset_x: offset.x,
                offset_y: offset.y,
                blur: effect.radius.max(0.0),
                spread: effect.spread.unwrap_or(0.0),
            })
        })
        .collect()
}

/// Per-corner radii win over the single corner radius.
pub fn lower_radii(node: &RawNode) -> CornerRadii {
    match node.rectangle_corner_radii {
        Some([top_left, top_right, bottom_right, bottom_left]) => CornerRadii {
            top_left: top_left.max(0.0),
            top_right: top_right.max(0.0),
            bottom_right: bottom_right.max(0.0),
            bottom_left: bottom_left.max(0.0),
        },
        None => CornerRadii::uniform(node.corner_radius.unwrap_or(0.0).max(0.0)),
    }
}

pub fn lower_text_style(style: &TypeStyle) -> TextStyle {
    let defaults = TextStyle::default();
    TextStyle {
        font_family: style.font_family.clone().unwrap_or_default(),
        font_weight: style
            .font_weight
            .map_or(defaults.font_weight, |weight| weight.round().clamp(1.0, 1000.0) as u16),
        font_size: style.font_size.unwrap_or(defaults.font_size),
        line_height: style.line_height_px.unwrap_or(defaults.line_height),
        letter_spacing: style.letter_spacing.unwrap_or(defaults.letter_spacing),
        text_align: match style.text_align_horizontal {
            Some(TextAlignHorizontal::Center) => TextAlign::Center,
            Some(TextAlignHorizontal::Right) => TextAlign::Right,
            Some(TextAlignHorizontal::Justified) => TextAlign::Justify,
            _ => TextAlign::Left,
        },
        text_transform: match style.text_case {
            Some(TextCase::Upper) => TextTransform::Uppercase,
            Some(TextCase::Lower) => TextTransform::Lowercase,
            Some(TextCase::Title) => TextTransform::Capitalize,
            _ => TextTransform::None,
        },
        text_decoration: match style.text_decoration {
            Some(TextDecorationKind::Underline) => TextDecoration::Underline,
            Some(TextDecorationKind::Strikethrough) => TextDecoration::LineThrough,
            _ => TextDecoration::None,
        },
        italic: style.italic.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use figura_document::model::{Effect, NodeType};

    use super::*;

    fn rgb(r: f64, g: f64, b: f64) -> RawColor {
        RawColor { r, g, b, a: 1.0 }
    }

    fn node() -> RawNode {
        RawNode::new("1:1", "Box", NodeType::Frame)
    }

    #[test]
    fn test_solid_fill_with_paint_opacity() {
        let mut paint = Paint::solid(rgb(0.0, 0.0, 0.0));
        paint.opacity = Some(0.5);

        let fill = lower_fill(&paint).unwrap();

        let color = fill.solid_color().unwrap();
        assert_eq!(color.hex(), "000000");
        assert_eq!(color.alpha(), 0.5);
    }

    #[test]
    fn test_hidden_and_unsupported_paints_are_dropped() {
        let mut hidden = Paint::solid(rgb(1.0, 0.0, 0.0));
        hidden.visible = false;
        assert!(lower_fill(&hidden).is_none());

        let mut angular = Paint::solid(rgb(1.0, 0.0, 0.0));
        angular.paint_type = PaintType::GradientAngular;
        assert!(lower_fill(&angular).is_none());

        let mut colorless = Paint::solid(rgb(1.0, 0.0, 0.0));
        colorless.color = None;
        assert!(lower_fill(&colorless).is_none());
    }

    #[test]
    fn test_linear_gradient_keeps_stop_order() {
        let mut paint = Paint::solid(rgb(0.0, 0.0, 0.0));
        paint.paint_type = PaintType::GradientLinear;
        paint.gradient_stops = vec![
            ColorStop {
                position: 0.0,
                color: rgb(1.0, 1.0, 1.0),
            },
            ColorStop {
                position: 1.0,
                color: rgb(0.0, 0.0, 0.0),
            },
        ];

        let Some(Fill::GradientLinear { stops }) = lower_fill(&paint) else {
            panic!("expected a linear gradient");
        };
        assert_eq!(stops[0].color.hex(), "ffffff");
        assert_eq!(stops[1].position, 1.0);
    }

    #[test]
    fn test_borders() {
        let mut node = node();
        node.strokes.push(Paint::solid(rgb(0.0, 0.0, 1.0)));
        let mut hidden = Paint::solid(rgb(1.0, 0.0, 0.0));
        hidden.visible = false;
        node.strokes.push(hidden);

        let borders = lower_borders(&node);
        assert_eq!(borders.len(), 1);
        assert_eq!(borders[0].width, 1.0);
        assert_eq!(borders[0].style, BorderStyle::Solid);

        node.stroke_weight = Some(2.0);
        node.stroke_dashes = vec![6.0, 4.0];
        assert_eq!(lower_borders(&node)[0].style, BorderStyle::Dashed);
        node.stroke_dashes = vec![2.0, 2.0];
        assert_eq!(lower_borders(&node)[0].style, BorderStyle::Dotted);
    }

    #[test]
    fn test_shadows() {
        let mut node = node();
        node.effects = vec![
            Effect {
                effect_type: EffectType::DropShadow,
                visible: true,
                color: None,
                offset: Some(Vector { x: 0.0, y: 4.0 }),
                radius: 6.0,
                spread: None,
            },
            Effect {
                effect_type: EffectType::LayerBlur,
                visible: true,
                color: None,
                offset: None,
                radius: 10.0,
                spread: None,
            },
        ];

        let shadows = lower_shadows(&node);

        assert_eq!(shadows.len(), 1);
        assert_eq!(shadows[0].kind, ShadowKind::Drop);
        assert_eq!(shadows[0].offset_y, 4.0);
        assert_eq!(shadows[0].blur, 6.0);
        assert_eq!(shadows[0].color.alpha(), 0.25);
    }

    #[test]
    fn test_radii() {
        let mut node = node();
        assert_eq!(lower_radii(&node), CornerRadii::uniform(0.0));

        node.corner_radius = Some(8.0);
        assert_eq!(lower_radii(&node), CornerRadii::uniform(8.0));

        node.rectangle_corner_radii = Some([8.0, 8.0, 0.0, 0.0]);
        let radii = lower_radii(&node);
        assert!(!radii.is_uniform());
        assert_eq!(radii.bottom_right, 0.0);
    }

    #[test]
    fn test_text_style() {
        let style = TypeStyle {
            font_family: Some("Inter".into()),
            font_weight: Some(600.0),
            font_size: Some(24.0),
            line_height_px: Some(32.0),
            letter_spacing: None,
            text_align_horizontal: Some(TextAlignHorizontal::Justified),
            text_case: Some(TextCase::Title),
            text_decoration: Some(TextDecorationKind::Strikethrough),
            italic: Some(true),
        };

        let lowered = lower_text_style(&style);

        assert_eq!(lowered.font_family, "Inter");
        assert_eq!(lowered.font_weight, 600);
        assert_eq!(lowered.font_size, 24.0);
        assert_eq!(lowered.text_align, TextAlign::Justify);
        assert_eq!(lowered.text_transform, TextTransform::Capitalize);
        assert_eq!(lowered.text_decoration, TextDecoration::LineThrough);
        assert!(lowered.italic);
        assert_eq!(lowered.letter_spacing, 0.0);
    }
}
