//! Shared emission engine for the figura design compiler.
//!
//! This crate turns IR subtrees into component source text. It owns every
//! piece that is the same across UI frameworks; backend crates
//! (`figura-codegen-react`, `figura-codegen-vue`, `figura-codegen-angular`)
//! only contribute a [`TargetRenderer`] and a mapping table.
//!
//! # Architecture
//!
//! ```text
//! IrNode → prune_decorative → lower (classes + mapping) → Markup → MarkupStyle::print
//!                                                                    ↓
//!                                    TargetRenderer::wrap(name, template, imports)
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder)
//! - [`style`] - Tailwind class computation (colors, spacing, typography, responsive)
//! - [`mapping`] - Component-library mapping tables
//! - [`markup`] - Target-neutral markup tree and printer
//! - [`emit`] - The shared emitter and its renderer capability trait
//! - [`page`] - Astro page assembly
//! - [`testing`] - Fixtures (feature-gated)

pub mod builder;
pub mod emit;
mod generator;
mod imports;
pub mod mapping;
pub mod markup;
pub mod page;
pub mod style;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use emit::{ComponentEmitter, TargetRenderer, prune_decorative};
pub use generator::{ComponentGenerator, GeneratedComponent};
pub use imports::ImportCollector;
pub use mapping::{CardParts, LibraryMapping, MappingTable, PartElement, Prop};
pub use page::{Activation, ChildComponent, assemble_page};
pub use style::{ClassList, TokenMap, node_classes};
