//! Spacing quantization and auto-layout classes.

use figura_ir::{AlignItems, Direction, JustifyContent, Layout, Padding};

/// Pixel value → Tailwind spacing step.
static SCALE: &[(i64, &str)] = &[
    (0, "0"),
    (1, "px"),
    (2, "0.5"),
    (4, "1"),
    (6, "1.5"),
    (8, "2"),
    (10, "2.5"),
    (12, "3"),
    (14, "3.5"),
    (16, "4"),
    (20, "5"),
    (24, "6"),
    (28, "7"),
    (32, "8"),
    (36, "9"),
    (40, "10"),
    (44, "11"),
    (48, "12"),
    (56, "14"),
    (64, "16"),
    (80, "20"),
    (96, "24"),
    (112, "28"),
    (128, "32"),
    (144, "36"),
    (160, "40"),
    (176, "44"),
    (192, "48"),
    (208, "52"),
    (224, "56"),
    (240, "60"),
    (256, "64"),
    (288, "72"),
    (320, "80"),
    (384, "96"),
];

/// Round `px` and map it onto the spacing scale, `[Npx]` when off-scale.
pub fn spacing(px: f64) -> String {
    let rounded = px.round() as i64;
    SCALE
        .iter()
        .find(|(value, _)| *value == rounded)
        .map_or_else(|| format!("[{rounded}px]"), |(_, step)| (*step).to_string())
}

/// Flex container classes for an auto-layout record.
///
/// No axis means no classes at all, padding included.
pub fn layout_classes(layout: &Layout) -> Vec<String> {
    if !layout.is_flex() {
        return Vec::new();
    }

    let mut classes = vec!["flex".to_string()];
    if layout.direction == Direction::Vertical {
        classes.push("flex-col".into());
    }
    if layout.wrap {
        classes.push("flex-wrap".into());
    }
    classes.push(
        match layout.align_items {
            AlignItems::Start => "items-start",
            AlignItems::Center => "items-center",
            AlignItems::End => "items-end",
            AlignItems::Stretch => "items-stretch",
            AlignItems::Baseline => "items-baseline",
        }
        .into(),
    );
    classes.push(
        match layout.justify_content {
            JustifyContent::Start => "justify-start",
            JustifyContent::Center => "justify-center",
            JustifyContent::End => "justify-end",
            JustifyContent::Between => "justify-between",
        }
        .into(),
    );
    if layout.gap > 0.0 {
        classes.push(format!("gap-{}", spacing(layout.gap)));
    }
    classes.extend(padding_classes(&layout.padding));
    classes
}

/// Shortest padding form: `p-*`, then `px-*`/`py-*`, then per side.
pub fn padding_classes(padding: &Padding) -> Vec<String> {
    if padding.is_zero() {
        return Vec::new();
    }
    let Padding {
        top,
        right,
        bottom,
        left,
    } = *padding;

    if top == right && right == bottom && bottom == left && top > 0.0 {
        return vec![format!("p-{}", spacing(top))];
    }
    if top == bottom && top > 0.0 && left == right && left > 0.0 {
        return vec![
            format!("px-{}", spacing(left)),
            format!("py-{}", spacing(top)),
        ];
    }

    [("pt", top), ("pr", right), ("pb", bottom), ("pl", left)]
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|(side, value)| format!("{side}-{}", spacing(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scale() {
        assert_eq!(spacing(0.0), "0");
        assert_eq!(spacing(1.0), "px");
        assert_eq!(spacing(16.0), "4");
        assert_eq!(spacing(15.6), "4");
        assert_eq!(spacing(384.0), "96");
        assert_eq!(spacing(18.0), "[18px]");
    }

    #[test]
    fn test_no_axis_means_no_classes() {
        let layout = Layout {
            gap: 8.0,
            padding: Padding::uniform(16.0),
            ..Layout::default()
        };
        assert!(layout_classes(&layout).is_empty());
    }

    #[test]
    fn test_vertical_layout() {
        let layout = Layout {
            direction: Direction::Vertical,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Between,
            gap: 24.0,
            padding: Padding::uniform(32.0),
            wrap: false,
        };
        assert_eq!(
            layout_classes(&layout),
            [
                "flex",
                "flex-col",
                "items-center",
                "justify-between",
                "gap-6",
                "p-8"
            ]
        );
    }

    #[test]
    fn test_horizontal_wrap() {
        let layout = Layout {
            direction: Direction::Horizontal,
            wrap: true,
            ..Layout::default()
        };
        assert_eq!(
            layout_classes(&layout),
            ["flex", "flex-wrap", "items-start", "justify-start"]
        );
    }

    #[test]
    fn test_padding_forms() {
        let axis = Padding {
            top: 8.0,
            right: 16.0,
            bottom: 8.0,
            left: 16.0,
        };
        assert_eq!(padding_classes(&axis), ["px-4", "py-2"]);

        let sides = Padding {
            top: 8.0,
            right: 0.0,
            bottom: 4.0,
            left: 0.0,
        };
        assert_eq!(padding_classes(&sides), ["pt-2", "pb-1"]);

        assert!(padding_classes(&Padding::default()).is_empty());
    }
}
