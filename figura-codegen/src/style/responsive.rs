//! Mobile-first breakpoint overrides.
//!
//! Base classes describe the smallest viewport; everything emitted here is a
//! prefixed override that applies from a breakpoint upward.

use figura_ir::{Direction, IrNode, Size};

use super::number;

/// A horizontal row of two or more children collapses to a column on phones.
pub fn stacks_on_mobile(node: &IrNode) -> bool {
    node.layout.direction == Direction::Horizontal && node.children.len() >= 2
}

/// Breakpoint-prefixed overrides for a node.
pub fn responsive_classes(node: &IrNode) -> Vec<String> {
    let mut classes = Vec::new();
    let dims = &node.dimensions;

    if node.layout.is_horizontal() {
        classes.push("md:flex-row".to_string());
    }

    if let Some(max_width) = dims.max_width.filter(|w| *w > 0.0) {
        if max_width >= 1280.0 {
            classes.push(format!("xl:max-w-[{}px]", number(max_width)));
        } else if max_width >= 1024.0 {
            classes.push(format!("lg:max-w-[{}px]", number(max_width)));
        }
    }

    if let Size::Fixed(width) = dims.width
        && width >= 640.0
    {
        classes.push("sm:w-full".to_string());
        if width >= 768.0 {
            classes.push(format!("md:w-[{}px]", number(width)));
        }
    }

    classes
}

#[cfg(test)]
mod tests {
    use figura_ir::{ComponentType, Dimensions, Layout};

    use super::*;

    fn node(direction: Direction, children: usize) -> IrNode {
        let mut node = IrNode::new("1", "Row", ComponentType::Container);
        node.layout = Layout {
            direction,
            ..Layout::default()
        };
        node.children = (0..children)
            .map(|i| IrNode::new(format!("c{i}"), "Child", ComponentType::Container))
            .collect();
        node
    }

    #[test]
    fn test_stacking() {
        assert!(stacks_on_mobile(&node(Direction::Horizontal, 2)));
        assert!(!stacks_on_mobile(&node(Direction::Horizontal, 1)));
        assert!(!stacks_on_mobile(&node(Direction::Vertical, 3)));
    }

    #[test]
    fn test_horizontal_gets_row_override() {
        assert_eq!(
            responsive_classes(&node(Direction::Horizontal, 1)),
            ["md:flex-row"]
        );
        assert!(responsive_classes(&node(Direction::Wrap, 1)).is_empty());
    }

    #[test]
    fn test_width_overrides() {
        let mut wide = node(Direction::None, 0);
        wide.dimensions = Dimensions {
            max_width: Some(1280.0),
            ..Dimensions::new(Size::Fixed(1440.0), Size::Auto)
        };
        assert_eq!(
            responsive_classes(&wide),
            ["xl:max-w-[1280px]", "sm:w-full", "md:w-[1440px]"]
        );

        wide.dimensions = Dimensions {
            max_width: Some(1100.0),
            ..Dimensions::new(Size::Fixed(700.0), Size::Auto)
        };
        assert_eq!(responsive_classes(&wide), ["lg:max-w-[1100px]", "sm:w-full"]);

        wide.dimensions = Dimensions::new(Size::Fixed(320.0), Size::Fixed(40.0));
        assert!(responsive_classes(&wide).is_empty());
    }
}
