//! React component emitter for figura.
//!
//! Emits function components styled with Tailwind classes, replacing
//! recognized component types with [shadcn/ui](https://ui.shadcn.com)
//! wrappers imported from `@/components/ui/*`.
//!
//! # Usage
//!
//! ```ignore
//! use figura_codegen::ComponentGenerator;
//! use figura_codegen_react::Generator;
//!
//! let component = Generator::new().generate(&tree.root, "HeroSection");
//! assert_eq!(component.path, "HeroSection.tsx");
//! ```

mod generator;
mod mapping;

pub use generator::{Generator, escape_jsx_text};
pub use mapping::SHADCN;
