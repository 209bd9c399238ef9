//! Angular component emitter for figura.
//!
//! Emits standalone components (`app-<kebab-name>` selectors) with inline
//! templates built from [spartan-ui](https://www.spartan.ng) helm
//! directives and brain primitives.
//!
//! Templates are HTML rather than JSX: only void and custom elements may
//! self-close, and `@` is escaped because it opens a control-flow block.

mod generator;
mod mapping;

pub use generator::{Generator, escape_angular_text, escape_template_literal};
pub use mapping::SPARTAN;
