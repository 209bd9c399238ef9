//! Tailwind class computation.
//!
//! [`node_classes`] assembles the full class list of one IR node in a fixed
//! order: layout (with mobile stacking), dimensions, backgrounds, border,
//! radius, shadows, opacity, clipping, responsive overrides and, for text
//! nodes, typography. The converters it draws on live in the submodules.

pub mod color;
pub mod responsive;
pub mod spacing;
pub mod tables;

use std::fmt;

use figura_ir::{BorderStyle, ComponentType, IrNode, Size};
use indexmap::IndexSet;

pub use color::{TokenMap, color_class, fill_classes};
pub use responsive::{responsive_classes, stacks_on_mobile};
pub use spacing::{layout_classes, spacing};

use self::tables::{
    font_size_class, font_weight_class, radius_classes, shadow_class, text_align_class,
    text_decoration_class, text_transform_class,
};

/// Format a pixel quantity without a trailing `.0`, to at most two decimals.
pub(crate) fn number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// An ordered class list. Duplicates are dropped, keeping the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: IndexSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() {
            self.classes.insert(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<S> for ClassList {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for class in iter {
            self.push(class);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = ClassList::new();
        list.extend(iter);
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

/// Layout classes, rewritten to `flex flex-col md:flex-row …` when the node
/// stacks on mobile.
pub fn container_classes(node: &IrNode) -> Vec<String> {
    let layout = layout_classes(&node.layout);
    if !stacks_on_mobile(node) {
        return layout;
    }
    let mut classes = vec![
        "flex".to_string(),
        "flex-col".to_string(),
        "md:flex-row".to_string(),
    ];
    classes.extend(
        layout
            .into_iter()
            .filter(|class| class != "flex" && class != "flex-row"),
    );
    classes
}

/// Every class for `node`, in emission order.
pub fn node_classes(node: &IrNode, tokens: Option<&TokenMap>) -> ClassList {
    let mut classes: ClassList = container_classes(node).into_iter().collect();

    match node.dimensions.width {
        Size::Fill => classes.push("w-full"),
        Size::Auto => classes.push("w-fit"),
        Size::Fixed(_) => {}
    }
    match node.dimensions.height {
        Size::Fill => classes.push("h-full"),
        Size::Auto => classes.push("h-fit"),
        Size::Fixed(_) => {}
    }
    if let Some(min) = node.dimensions.min_width.filter(|w| *w > 0.0) {
        classes.push(format!("min-w-[{}px]", min.round()));
    }
    if let Some(max) = node.dimensions.max_width.filter(|w| *w > 0.0) {
        classes.push(format!("max-w-[{}px]", max.round()));
    }

    if !matches!(node.component_type, ComponentType::Text | ComponentType::Icon) {
        classes.extend(fill_classes(&node.fills, tokens));
    }

    if let Some(border) = node.borders.first() {
        classes.push("border");
        if border.width > 1.0 {
            classes.push(format!("border-[{}px]", number(border.width)));
        }
        match border.style {
            BorderStyle::Solid => {}
            BorderStyle::Dashed => classes.push("border-dashed"),
            BorderStyle::Dotted => classes.push("border-dotted"),
        }
        classes.push(color_class("border", &border.color, tokens));
    }

    classes.extend(radius_classes(&node.radii));
    classes.extend(node.shadows.iter().map(shadow_class));

    if node.opacity < 1.0 {
        classes.push(format!("opacity-{}", (node.opacity * 100.0).round() as u32));
    }
    if node.clip_content {
        classes.push("overflow-hidden");
    }

    classes.extend(responsive_classes(node));

    if node.component_type == ComponentType::Text {
        classes.extend(text_classes(node, tokens));
    }
    classes
}

/// Typography classes plus a foreground color from the first solid fill.
pub fn text_classes(node: &IrNode, tokens: Option<&TokenMap>) -> Vec<String> {
    let mut classes = Vec::new();
    if let Some(style) = &node.text_style {
        classes.push(font_size_class(style.font_size));
        classes.push(font_weight_class(style.font_weight));
        classes.extend(
            [
                text_align_class(style.text_align),
                text_transform_class(style.text_transform),
                text_decoration_class(style.text_decoration),
                style.italic.then_some("italic"),
            ]
            .into_iter()
            .flatten()
            .map(str::to_string),
        );
    }
    if let Some(color) = node.fills.first().and_then(|fill| fill.solid_color()) {
        classes.push(color_class("text", color, tokens));
    }
    classes
}
