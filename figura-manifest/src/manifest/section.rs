use figura_codegen::Activation;
use figura_ir::IrNode;
use serde::Deserialize;

/// `[[sections]]`: one component of the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    /// Component name (PascalCase)
    pub name: String,

    /// Root node of the section
    pub node_id: String,

    /// Hydration mode; inferred from the subtree when absent
    #[serde(default)]
    pub activation: Option<Activation>,
}

impl Section {
    /// The configured activation, or the one `node` calls for.
    pub fn activation_for(&self, node: &IrNode) -> Activation {
        self.activation.unwrap_or_else(|| Activation::for_subtree(node))
    }
}
