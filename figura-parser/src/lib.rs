//! Design document → IR lowering for figura.
//!
//! # Architecture
//!
//! ```text
//! FileNodesResponse ─→ parse ─┬─ classify   (ordered rule table)
//!                             ├─ layout     (auto-layout, sizing)
//!                             └─ style      (paints, strokes, effects, text)
//!                                   ↓
//!                              IrDesignTree
//! ```
//!
//! Parsing is pure and synchronous. The only failure is a root id the
//! document does not contain; every other missing field takes its default.

pub mod classify;
mod error;
pub mod layout;
mod parser;
pub mod style;

pub use classify::{classify, interactivity_hint, is_interactive};
pub use error::ParseError;
pub use parser::parse;
