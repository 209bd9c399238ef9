//! Visual style records: colors, fills, borders, shadows, radii, text.

use serde::{Deserialize, Serialize};

/// An sRGB color with alpha.
///
/// The hex form is always derived from the channels; there is no way to
/// construct a `Color` whose `hex` disagrees with `r`, `g` and `b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColorRepr", into = "ColorRepr")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
    hex: String,
}

impl Color {
    /// Opaque color from 0–255 channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Color from 0–255 channels and a 0–1 alpha (clamped).
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) };
        Self {
            r,
            g,
            b,
            a,
            hex: format!("{r:02x}{g:02x}{b:02x}"),
        }
    }

    /// Color from unit-interval channels, as design tools report them.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::rgba(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), a)
    }

    /// Parse a 6-digit hex string, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// Lowercase `rrggbb`, without a leading `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// True when the alpha channel is below 1.
    pub fn is_translucent(&self) -> bool {
        self.a < 1.0
    }

    /// Euclidean distance to another color in RGB space, alpha ignored.
    pub fn distance(&self, other: &Color) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

fn unit_to_byte(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Wire form of [`Color`]. `hex` is written for readers and ignored on input.
#[derive(Serialize, Deserialize)]
struct ColorRepr {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hex: Option<String>,
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        Color::rgba(repr.r, repr.g, repr.b, repr.a)
    }
}

impl From<Color> for ColorRepr {
    fn from(color: Color) -> Self {
        ColorRepr {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
            hex: Some(color.hex),
        }
    }
}

/// A stop on a gradient ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub position: f64,
    pub color: Color,
}

/// A paint layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Fill {
    Solid {
        color: Color,
    },
    GradientLinear {
        stops: Vec<GradientStop>,
    },
    GradientRadial {
        stops: Vec<GradientStop>,
    },
    Image {
        #[serde(default, rename = "imageRef", skip_serializing_if = "Option::is_none")]
        image_ref: Option<String>,
    },
}

impl Fill {
    /// The color of a solid fill.
    pub fn solid_color(&self) -> Option<&Color> {
        match self {
            Fill::Solid { color } => Some(color),
            _ => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Fill::Image { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub color: Color,
    pub width: f64,
    pub style: BorderStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowKind {
    Drop,
    Inner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub kind: ShadowKind,
    pub color: Color,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
}

/// Corner radii in pixels, clockwise from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Same radius on all four corners.
    pub fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }

    /// Radii as `[top_left, top_right, bottom_right, bottom_left]`.
    pub fn corners(&self) -> [f64; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

/// Typography of a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_weight: u16,
    pub font_size: f64,
    pub line_height: f64,
    pub letter_spacing: f64,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default)]
    pub text_transform: TextTransform,
    #[serde(default)]
    pub text_decoration: TextDecoration,
    #[serde(default)]
    pub italic: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: String::new(),
            font_weight: 400,
            font_size: 16.0,
            line_height: 0.0,
            letter_spacing: 0.0,
            text_align: TextAlign::Left,
            text_transform: TextTransform::None,
            text_decoration: TextDecoration::None,
            italic: false,
        }
    }
}
