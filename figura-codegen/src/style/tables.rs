//! Typography, radius and shadow class tables.

use figura_ir::{CornerRadii, Shadow, ShadowKind, TextAlign, TextDecoration, TextTransform};

use super::number;

static FONT_SIZES: &[(f64, &str)] = &[
    (12.0, "text-xs"),
    (14.0, "text-sm"),
    (16.0, "text-base"),
    (18.0, "text-lg"),
    (20.0, "text-xl"),
    (24.0, "text-2xl"),
    (30.0, "text-3xl"),
    (36.0, "text-4xl"),
    (48.0, "text-5xl"),
    (60.0, "text-6xl"),
    (72.0, "text-7xl"),
    (96.0, "text-8xl"),
    (128.0, "text-9xl"),
];

static FONT_WEIGHTS: &[(u16, &str)] = &[
    (100, "font-thin"),
    (200, "font-extralight"),
    (300, "font-light"),
    (400, "font-normal"),
    (500, "font-medium"),
    (600, "font-semibold"),
    (700, "font-bold"),
    (800, "font-extrabold"),
    (900, "font-black"),
];

static RADII: &[(f64, &str)] = &[
    (2.0, "rounded-sm"),
    (4.0, "rounded"),
    (6.0, "rounded-md"),
    (8.0, "rounded-lg"),
    (12.0, "rounded-xl"),
    (16.0, "rounded-2xl"),
    (24.0, "rounded-3xl"),
    (9999.0, "rounded-full"),
];

/// How far a radius may be from a named step and still use it.
const RADIUS_TOLERANCE: f64 = 2.0;

pub fn font_size_class(size: f64) -> String {
    FONT_SIZES
        .iter()
        .find(|(px, _)| *px == size)
        .map_or_else(|| format!("text-[{}px]", number(size)), |(_, class)| (*class).to_string())
}

pub fn font_weight_class(weight: u16) -> String {
    FONT_WEIGHTS
        .iter()
        .find(|(value, _)| *value == weight)
        .map_or_else(|| format!("font-[{weight}]"), |(_, class)| (*class).to_string())
}

pub fn text_align_class(align: TextAlign) -> Option<&'static str> {
    match align {
        TextAlign::Left => None,
        TextAlign::Center => Some("text-center"),
        TextAlign::Right => Some("text-right"),
        TextAlign::Justify => Some("text-justify"),
    }
}

pub fn text_transform_class(transform: TextTransform) -> Option<&'static str> {
    match transform {
        TextTransform::None => None,
        TextTransform::Uppercase => Some("uppercase"),
        TextTransform::Lowercase => Some("lowercase"),
        TextTransform::Capitalize => Some("capitalize"),
    }
}

pub fn text_decoration_class(decoration: TextDecoration) -> Option<&'static str> {
    match decoration {
        TextDecoration::None => None,
        TextDecoration::Underline => Some("underline"),
        TextDecoration::LineThrough => Some("line-through"),
    }
}

/// One class for a uniform radius, otherwise one per non-zero corner.
pub fn radius_classes(radii: &CornerRadii) -> Vec<String> {
    if radii.is_uniform() {
        let radius = radii.top_left;
        if radius <= 0.0 {
            return Vec::new();
        }
        return vec![uniform_radius_class(radius)];
    }

    ["tl", "tr", "br", "bl"]
        .into_iter()
        .zip(radii.corners())
        .filter(|(_, radius)| *radius > 0.0)
        .map(|(corner, radius)| format!("rounded-{corner}-[{}px]", number(radius)))
        .collect()
}

fn uniform_radius_class(radius: f64) -> String {
    let closest = RADII.iter().fold(None, |best: Option<(f64, &'static str)>, (px, class)| {
        let distance = (px - radius).abs();
        match best {
            Some((best_distance, _)) if best_distance <= distance => best,
            _ => Some((distance, *class)),
        }
    });
    match closest {
        Some((distance, class)) if distance <= RADIUS_TOLERANCE => class.to_string(),
        _ => format!("rounded-[{}px]", number(radius)),
    }
}

/// Tier a shadow by blur and vertical offset.
pub fn shadow_class(shadow: &Shadow) -> &'static str {
    if shadow.kind == ShadowKind::Inner {
        return "shadow-inner";
    }
    let (blur, offset) = (shadow.blur, shadow.offset_y);
    if blur <= 3.0 && offset <= 1.0 {
        "shadow-sm"
    } else if blur <= 6.0 && offset <= 2.0 {
        "shadow"
    } else if blur <= 10.0 && offset <= 4.0 {
        "shadow-md"
    } else if blur <= 15.0 && offset <= 6.0 {
        "shadow-lg"
    } else if blur <= 25.0 && offset <= 10.0 {
        "shadow-xl"
    } else {
        "shadow-2xl"
    }
}
