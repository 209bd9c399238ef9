//! Component generator trait.

use std::path::Path;

use figura_core::{File, Target};
use figura_ir::IrNode;

/// Trait for target-specific component generators.
///
/// Implement this trait to add support for emitting components for a new
/// UI framework.
pub trait ComponentGenerator {
    /// The framework this generator emits for.
    fn target(&self) -> Target;

    /// Extension of emitted files, without the leading dot.
    fn file_extension(&self) -> &'static str {
        self.target().extension()
    }

    /// Emit `node` as a component named `name`.
    fn generate(&self, node: &IrNode, name: &str) -> GeneratedComponent;
}

/// One emitted component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    pub name: String,
    /// File name relative to the sections directory.
    pub path: String,
    pub content: String,
}

impl GeneratedComponent {
    pub fn new(name: &str, extension: &str, content: String) -> Self {
        Self {
            name: name.to_string(),
            path: format!("{name}.{extension}"),
            content,
        }
    }

    /// A writable file under `dir`.
    pub fn to_file(&self, dir: &Path) -> File {
        File::new(dir.join(&self.path), self.content.as_str())
    }
}
