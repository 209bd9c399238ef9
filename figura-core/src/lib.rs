//! Core utilities and types for the figura design compiler.
//!
//! This crate provides the small pieces shared by every other figura crate:
//! name conversion, the set of emission targets, and generated-file writing.

mod file;
mod target;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Emission targets
pub use target::Target;
// String utilities
pub use utils::{is_kebab_case, is_pascal_case, to_kebab_case, to_pascal_case};
