//! Section extraction - splitting a page into components.

use std::collections::HashSet;

use eyre::{Result, eyre};
use figura_codegen::{Activation, prune_decorative};
use figura_core::to_pascal_case;
use figura_ir::{IrDesignTree, IrNode};
use figura_manifest::Manifest;

/// A subtree emitted as one component and mounted by the page.
#[derive(Debug, Clone)]
pub struct PageSection {
    pub name: String,
    pub node: IrNode,
    pub activation: Activation,
}

/// The page's sections: the manifest's `[[sections]]` when present,
/// otherwise [`derived_sections`].
pub fn sections(manifest: &Manifest, tree: &IrDesignTree) -> Result<Vec<PageSection>> {
    if !manifest.has_explicit_sections() {
        return Ok(derived_sections(&tree.root));
    }

    manifest
        .sections
        .iter()
        .map(|section| {
            let node = tree.root.find(&section.node_id).ok_or_else(|| {
                eyre!(
                    "Section '{}' refers to node '{}', which is not in the design",
                    section.name,
                    section.node_id
                )
            })?;
            Ok(PageSection {
                name: section.name.clone(),
                node: node.clone(),
                activation: section.activation_for(node),
            })
        })
        .collect()
}

/// One section per non-decorative child of `root`, named after its label.
///
/// Repeated names get a numeric suffix (`Feature`, `Feature2`, ...).
pub fn derived_sections(root: &IrNode) -> Vec<PageSection> {
    let mut names = UniqueNames::default();
    prune_decorative(root)
        .children
        .into_iter()
        .map(|node| PageSection {
            name: names.claim(to_pascal_case(&node.name)),
            activation: Activation::for_subtree(&node),
            node,
        })
        .collect()
}

#[derive(Debug, Default)]
struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    fn claim(&mut self, base: String) -> String {
        let mut name = base.clone();
        let mut suffix = 2;
        while !self.taken.insert(name.clone()) {
            name = format!("{base}{suffix}");
            suffix += 1;
        }
        name
    }
}
