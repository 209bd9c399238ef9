//! Project configuration for figura.
//!
//! A project is described by a `figura.toml` next to the generated output:
//!
//! ```toml
//! [source]
//! file_key = "x3CNT2Qe"
//! node_id = "530:5377"
//!
//! [output]
//! targets = ["react", "vue"]
//! page = "landing"
//!
//! [tokens]
//! "2563eb" = "--color-primary"
//!
//! [[sections]]
//! name = "HeroSection"
//! node_id = "530:5378"
//! activation = "lazy"
//! ```
//!
//! # Module Organization
//!
//! - [`Manifest`] and its tables: the deserialized file
//! - [`Error`]: parse and validation diagnostics with source spans

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    AssetsConfig, DEFAULT_CACHE_TTL_SECS, DEFAULT_TOKEN_ENV, MANIFEST_FILE, Manifest,
    OutputConfig, ParseContext, Section, SourceConfig, parse_manifest,
};
