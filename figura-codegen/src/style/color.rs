//! Color quantization onto the Tailwind palette.
//!
//! Lookup order for a color: design token, exact palette entry, nearest
//! palette entry within [`NEAREST_THRESHOLD`], arbitrary hex literal. Every
//! form carries a `/NN` opacity suffix when the color is translucent.

use std::fmt::Write;

use figura_ir::{Color, Fill};
use indexmap::IndexMap;

/// Largest Euclidean RGB distance that still snaps to a palette entry.
pub const NEAREST_THRESHOLD: f64 = 20.0;

/// A named Tailwind color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    rgb: u32,
}

const fn entry(name: &'static str, rgb: u32) -> PaletteColor {
    PaletteColor { name, rgb }
}

impl PaletteColor {
    pub fn color(&self) -> Color {
        let [_, r, g, b] = self.rgb.to_be_bytes();
        Color::rgb(r, g, b)
    }
}

/// White, black and the slate, gray, neutral, red, blue, green, yellow and
/// purple scales. Order decides ties.
pub static PALETTE: &[PaletteColor] = &[
    entry("white", 0xffffff),
    entry("black", 0x000000),
    entry("slate-50", 0xf8fafc),
    entry("slate-100", 0xf1f5f9),
    entry("slate-200", 0xe2e8f0),
    entry("slate-300", 0xcbd5e1),
    entry("slate-400", 0x94a3b8),
    entry("slate-500", 0x64748b),
    entry("slate-600", 0x475569),
    entry("slate-700", 0x334155),
    entry("slate-800", 0x1e293b),
    entry("slate-900", 0x0f172a),
    entry("slate-950", 0x020617),
    entry("gray-50", 0xf9fafb),
    entry("gray-100", 0xf3f4f6),
    entry("gray-200", 0xe5e7eb),
    entry("gray-300", 0xd1d5db),
    entry("gray-400", 0x9ca3af),
    entry("gray-500", 0x6b7280),
    entry("gray-600", 0x4b5563),
    entry("gray-700", 0x374151),
    entry("gray-800", 0x1f2937),
    entry("gray-900", 0x111827),
    entry("gray-950", 0x030712),
    entry("neutral-50", 0xfafafa),
    entry("neutral-100", 0xf5f5f5),
    entry("neutral-200", 0xe5e5e5),
    entry("neutral-300", 0xd4d4d4),
    entry("neutral-400", 0xa3a3a3),
    entry("neutral-500", 0x737373),
    entry("neutral-600", 0x525252),
    entry("neutral-700", 0x404040),
    entry("neutral-800", 0x262626),
    entry("neutral-900", 0x171717),
    entry("neutral-950", 0x0a0a0a),
    entry("red-50", 0xfef2f2),
    entry("red-100", 0xfee2e2),
    entry("red-200", 0xfecaca),
    entry("red-300", 0xfca5a5),
    entry("red-400", 0xf87171),
    entry("red-500", 0xef4444),
    entry("red-600", 0xdc2626),
    entry("red-700", 0xb91c1c),
    entry("red-800", 0x991b1b),
    entry("red-900", 0x7f1d1d),
    entry("red-950", 0x450a0a),
    entry("blue-50", 0xeff6ff),
    entry("blue-100", 0xdbeafe),
    entry("blue-200", 0xbfdbfe),
    entry("blue-300", 0x93c5fd),
    entry("blue-400", 0x60a5fa),
    entry("blue-500", 0x3b82f6),
    entry("blue-600", 0x2563eb),
    entry("blue-700", 0x1d4ed8),
    entry("blue-800", 0x1e40af),
    entry("blue-900", 0x1e3a8a),
    entry("blue-950", 0x172554),
    entry("green-50", 0xf0fdf4),
    entry("green-100", 0xdcfce7),
    entry("green-200", 0xbbf7d0),
    entry("green-300", 0x86efac),
    entry("green-400", 0x4ade80),
    entry("green-500", 0x22c55e),
    entry("green-600", 0x16a34a),
    entry("green-700", 0x15803d),
    entry("green-800", 0x166534),
    entry("green-900", 0x14532d),
    entry("green-950", 0x052e16),
    entry("yellow-50", 0xfefce8),
    entry("yellow-100", 0xfef9c3),
    entry("yellow-200", 0xfef08a),
    entry("yellow-300", 0xfde047),
    entry("yellow-400", 0xfacc15),
    entry("yellow-500", 0xeab308),
    entry("yellow-600", 0xca8a04),
    entry("yellow-700", 0xa16207),
    entry("yellow-800", 0x854d0e),
    entry("yellow-900", 0x713f12),
    entry("yellow-950", 0x422006),
    entry("purple-50", 0xfaf5ff),
    entry("purple-100", 0xf3e8ff),
    entry("purple-200", 0xe9d5ff),
    entry("purple-300", 0xd8b4fe),
    entry("purple-400", 0xc084fc),
    entry("purple-500", 0xa855f7),
    entry("purple-600", 0x9333ea),
    entry("purple-700", 0x7e22ce),
    entry("purple-800", 0x6b21a8),
    entry("purple-900", 0x581c87),
    entry("purple-950", 0x3b0764),
];

/// Design tokens: hex color → CSS custom property.
///
/// Keys are normalized to lowercase hex without `#`, values to a `--` name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    vars: IndexMap<String, String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hex: &str, var: &str) {
        let var = var.trim();
        let var = if var.starts_with("--") {
            var.to_string()
        } else {
            format!("--{var}")
        };
        self.vars.insert(normalize_hex(hex), var);
    }

    /// The custom property bound to `hex`, if any.
    pub fn get(&self, hex: &str) -> Option<&str> {
        self.vars.get(&normalize_hex(hex)).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// `(hex, custom property)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(hex, var)| (hex.as_str(), var.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = TokenMap::new();
        for (hex, var) in iter {
            map.insert(hex.as_ref(), var.as_ref());
        }
        map
    }
}

fn normalize_hex(hex: &str) -> String {
    hex.trim().trim_start_matches('#').to_ascii_lowercase()
}

/// The palette entry closest to `color`, with its distance.
pub fn nearest(color: &Color) -> Option<(&'static PaletteColor, f64)> {
    PALETTE
        .iter()
        .map(|entry| (entry, color.distance(&entry.color())))
        .fold(None, |best, (entry, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((entry, distance)),
        })
}

/// `prefix-…` utility class for `color`.
pub fn color_class(prefix: &str, color: &Color, tokens: Option<&TokenMap>) -> String {
    let mut class = String::from(prefix);
    match tokens.and_then(|tokens| tokens.get(color.hex())) {
        Some(var) => {
            let _ = write!(class, "-[var({var})]");
        }
        None => match nearest(color) {
            Some((entry, distance)) if distance < NEAREST_THRESHOLD => {
                let _ = write!(class, "-{}", entry.name);
            }
            _ => {
                let _ = write!(class, "-[#{}]", color.hex());
            }
        },
    }
    if color.is_translucent() {
        let _ = write!(class, "/{}", (color.alpha() * 100.0).round() as u32);
    }
    class
}

/// Background classes for a fill list.
///
/// Solids become `bg-*`; a linear gradient becomes `bg-gradient-to-r` with
/// `from-*`, `to-*` and, for three or more stops, `via-*` from the second
/// stop. Radial gradients and images produce nothing.
pub fn fill_classes(fills: &[Fill], tokens: Option<&TokenMap>) -> Vec<String> {
    let mut classes = Vec::new();
    for fill in fills {
        match fill {
            Fill::Solid { color } => classes.push(color_class("bg", color, tokens)),
            Fill::GradientLinear { stops } => {
                let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
                    continue;
                };
                classes.push("bg-gradient-to-r".to_string());
                classes.push(color_class("from", &first.color, tokens));
                classes.push(color_class("to", &last.color, tokens));
                if stops.len() > 2 {
                    classes.push(color_class("via", &stops[1].color, tokens));
                }
            }
            Fill::GradientRadial { .. } | Fill::Image { .. } => {}
        }
    }
    classes
}

#[cfg(test)]
mod tests {
    use figura_ir::GradientStop;

    use super::*;

    fn hex(value: &str) -> Color {
        Color::from_hex(value).unwrap()
    }

    #[test]
    fn test_palette_shape() {
        assert_eq!(PALETTE.len(), 90);
        assert_eq!(PALETTE[0].name, "white");
        assert_eq!(PALETTE[0].color().hex(), "ffffff");
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(color_class("bg", &hex("2563eb"), None), "bg-blue-600");
        assert_eq!(color_class("text", &hex("#000000"), None), "text-black");
    }

    #[test]
    fn test_near_match() {
        // One unit away from blue-600.
        assert_eq!(color_class("bg", &hex("2664eb"), None), "bg-blue-600");
    }

    #[test]
    fn test_far_color_is_arbitrary() {
        assert_eq!(color_class("bg", &hex("ff00ff"), None), "bg-[#ff00ff]");
    }

    #[test]
    fn test_alpha_suffix() {
        let translucent = Color::rgba(0, 0, 0, 0.5);
        assert_eq!(color_class("bg", &translucent, None), "bg-black/50");
        let odd = Color::rgba(255, 0, 255, 0.25);
        assert_eq!(color_class("border", &odd, None), "border-[#ff00ff]/25");
    }

    #[test]
    fn test_token_wins() {
        let tokens: TokenMap = [("#2563EB", "color-primary")].into_iter().collect();
        assert_eq!(tokens.get("2563eb"), Some("--color-primary"));
        assert_eq!(
            color_class("bg", &hex("2563eb"), Some(&tokens)),
            "bg-[var(--color-primary)]"
        );
        assert_eq!(
            color_class("text", &Color::rgba(0x25, 0x63, 0xeb, 0.8), Some(&tokens)),
            "text-[var(--color-primary)]/80"
        );
        // Colors outside the token table fall back to the palette.
        assert_eq!(color_class("bg", &hex("ffffff"), Some(&tokens)), "bg-white");
    }

    #[test]
    fn test_nearest_ties_resolve_to_first_entry() {
        let (entry, distance) = nearest(&hex("ffffff")).unwrap();
        assert_eq!(entry.name, "white");
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_fill_classes() {
        let fills = vec![
            Fill::Solid {
                color: hex("ffffff"),
            },
            Fill::GradientLinear {
                stops: vec![
                    GradientStop {
                        position: 0.0,
                        color: hex("2563eb"),
                    },
                    GradientStop {
                        position: 0.5,
                        color: hex("9333ea"),
                    },
                    GradientStop {
                        position: 1.0,
                        color: hex("000000"),
                    },
                ],
            },
            Fill::Image {
                image_ref: Some("ref".into()),
            },
        ];

        assert_eq!(
            fill_classes(&fills, None),
            [
                "bg-white",
                "bg-gradient-to-r",
                "from-blue-600",
                "to-black",
                "via-purple-600"
            ]
        );
    }

    #[test]
    fn test_empty_gradient_is_skipped() {
        let fills = vec![Fill::GradientLinear { stops: Vec::new() }];
        assert!(fill_classes(&fills, None).is_empty());
    }
}
