//! The figura design compiler.
//!
//! # Architecture
//!
//! ```text
//! figura.toml ─→ Manifest
//!                   ↓
//! DocumentClient::fetch_subtree ─→ parse ─→ resolve_assets ─→ IrDesignTree
//!                                                                ↓
//!                                   sections ─→ emit (per target) + assemble_page
//!                                                                ↓
//!                                                  components/sections/*, pages/*.astro
//! ```
//!
//! # Module Organization
//!
//! - [`ops`] - The operations behind each command (fetch, sections, generate)
//! - [`reports`] - Command results and their terminal rendering
//! - [`targets`] - Dispatch from [`Target`](figura_core::Target) to a backend

pub mod ops;
pub mod reports;
pub mod targets;

pub use targets::emit;
