//! Design document access for figura.
//!
//! This crate talks to the design service, models its JSON, and binds exported
//! asset URLs back onto a parsed IR tree.
//!
//! # Architecture
//!
//! ```text
//! DocumentClient ──fetch_subtree──→ FileNodesResponse ──(figura-parser)──→ IrDesignTree
//!       │                                                                      │
//!       └──export_assets──→ id → url ──────────── resolve_assets ─────────────┘
//! ```
//!
//! # Module Organization
//!
//! - [`model`] - Serde models of the service responses
//! - [`client`] - [`DocumentClient`] with its response cache
//! - [`transport`] - The HTTP seam ([`Transport`], [`HttpTransport`])
//! - [`assets`] - Late binding of asset URLs onto the IR
//! - [`testing`] - Scripted transport for tests (feature-gated)

pub mod assets;
mod cache;
pub mod client;
mod error;
pub mod model;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use assets::{AssetReport, asset_node_ids, resolve_assets};
pub use client::{AssetFormat, ClientConfig, DEFAULT_BASE_URL, DocumentClient};
pub use error::ClientError;
pub use model::{FileNodesResponse, NodeEntry, RawNode};
pub use transport::{HttpResponse, HttpTransport, Transport};
