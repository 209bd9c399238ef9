//! Test fixtures for emitters.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use figura_ir::{
    Border, BorderStyle, Color, ComponentType, CornerRadii, Dimensions, Direction, Fill,
    InteractivityHint, IrNode, Layout, Padding, Size, TextStyle,
};

/// A 48px "Hello" heading.
pub fn hello_text() -> IrNode {
    let mut heading = IrNode::new("1:2", "Title", ComponentType::Text).with_text("Hello");
    heading.text_style = Some(TextStyle {
        font_family: "Inter".into(),
        font_size: 48.0,
        font_weight: 700,
        ..TextStyle::default()
    });
    heading.fills = vec![Fill::Solid {
        color: Color::rgb(17, 24, 39),
    }];
    heading
}

/// A primary button labelled "Submit".
pub fn submit_button() -> IrNode {
    let mut button = IrNode::new("1:3", "Submit Button", ComponentType::Button)
        .with_children([IrNode::new("1:4", "Label", ComponentType::Text).with_text("Submit")]);
    button.is_interactive = true;
    button.interactivity_hint = Some(InteractivityHint::Click);
    button.fills = vec![Fill::Solid {
        color: Color::rgb(37, 99, 235),
    }];
    button.radii = CornerRadii::uniform(8.0);
    button.layout = Layout {
        direction: Direction::Horizontal,
        padding: Padding {
            top: 8.0,
            right: 16.0,
            bottom: 8.0,
            left: 16.0,
        },
        ..Layout::default()
    };
    button.dimensions = Dimensions::new(Size::Auto, Size::Auto);
    button
}

/// A vertical section holding [`hello_text`] and [`submit_button`].
pub fn hello_submit() -> IrNode {
    let mut root = IrNode::new("1:1", "Hero Section", ComponentType::Container)
        .with_children([hello_text(), submit_button()]);
    root.layout = Layout {
        direction: Direction::Vertical,
        gap: 24.0,
        padding: Padding::uniform(32.0),
        ..Layout::default()
    };
    root.dimensions = Dimensions::new(Size::Fill, Size::Auto);
    root
}

/// A bordered card with header, body text and a footer button.
pub fn pricing_card() -> IrNode {
    let header = IrNode::new("2:2", "Card Header", ComponentType::Container)
        .with_children([IrNode::new("2:3", "Plan", ComponentType::Text).with_text("Pro")]);
    let body = IrNode::new("2:4", "Price", ComponentType::Text).with_text("$12 / month");
    let footer = IrNode::new("2:5", "Card Footer", ComponentType::Container)
        .with_children([submit_button()]);

    let mut card = IrNode::new("2:1", "Pricing Card", ComponentType::Card)
        .with_children([header, body, footer]);
    card.borders = vec![Border {
        color: Color::rgb(229, 231, 235),
        width: 1.0,
        style: BorderStyle::Solid,
    }];
    card.radii = CornerRadii::uniform(12.0);
    card
}
