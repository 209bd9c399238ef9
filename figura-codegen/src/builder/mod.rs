//! Text building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building source text indented by two
//!   spaces per level, the convention of every frontend target

mod code_builder;

pub use code_builder::CodeBuilder;
