//! Intermediate representation types for the figura design compiler.
//!
//! This crate provides the canonical, target-neutral description of a design
//! subtree. Every emitter consumes these types and nothing else, so they are
//! the single source of truth between parsing and code generation.
//!
//! # Architecture
//!
//! ```text
//! design document (JSON) → figura-parser (classify, convert) → figura-ir → emitters
//! ```
//!
//! The IR types are designed to be:
//! - Target-agnostic (no React/Vue/Angular concerns)
//! - Immutable once built, except for the late asset-URL patch in [`visit`]
//! - Losslessly serializable, so a parsed tree can be persisted and reloaded

mod component;
mod layout;
mod node;
mod style;
pub mod visit;

pub use component::{ComponentType, InteractivityHint};
pub use layout::{AlignItems, Dimensions, Direction, JustifyContent, Layout, Padding, Size};
pub use node::{IrDesignTree, IrNode, SourceMeta};
pub use style::{
    Border, BorderStyle, Color, CornerRadii, Fill, GradientStop, Shadow, ShadowKind, TextAlign,
    TextDecoration, TextStyle, TextTransform,
};
