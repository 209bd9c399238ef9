//! Core operations.
//!
//! This module contains the business logic for figura commands,
//! separated from CLI argument parsing and output rendering.

pub mod fetch;
pub mod generate;
pub mod sections;

pub use fetch::{FetchOptions, Fetched, access_token, fetch, read_tree, write_tree};
pub use generate::{GenerateOptions, generate, plan};
pub use sections::{PageSection, derived_sections, sections};
