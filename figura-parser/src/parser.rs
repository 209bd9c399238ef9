use figura_document::{FileNodesResponse, RawNode};
use figura_ir::{IrDesignTree, IrNode, SourceMeta};
use tracing::debug;

use crate::{
    ParseError,
    classify::{classify, interactivity_hint, is_interactive},
    layout::{lower_dimensions, lower_layout},
    style::{lower_borders, lower_fills, lower_radii, lower_shadows, lower_text_style},
};

/// Lower the subtree rooted at `root_id` into the IR.
///
/// Hidden children are dropped together with everything below them.
pub fn parse(doc: &FileNodesResponse, root_id: &str) -> Result<IrDesignTree, ParseError> {
    let entry = doc.node(root_id).ok_or_else(|| ParseError::MissingRoot {
        node_id: root_id.to_string(),
    })?;

    let root = lower_node(&entry.document);
    debug!(
        root = root_id,
        nodes = root.iter().count(),
        "parsed design subtree"
    );

    let mut tree = IrDesignTree::new(
        SourceMeta {
            file_name: doc.name.clone(),
            last_modified: doc.last_modified.clone(),
            root_node_id: root_id.to_string(),
        },
        root,
    );
    tree.components = entry
        .components
        .iter()
        .map(|(id, meta)| (id.clone(), meta.name.clone()))
        .collect();
    Ok(tree)
}

fn lower_node(raw: &RawNode) -> IrNode {
    let component_type = classify(raw);

    let mut node = IrNode::new(raw.id.clone(), raw.name.clone(), component_type);
    node.visible = raw.visible;
    node.fills = lower_fills(raw);
    node.borders = lower_borders(raw);
    node.shadows = lower_shadows(raw);
    node.radii = lower_radii(raw);
    node.opacity = raw.opacity.unwrap_or(1.0).clamp(0.0, 1.0);
    node.clip_content = raw.clips_content.unwrap_or(false);
    node.layout = lower_layout(raw);
    node.dimensions = lower_dimensions(raw);
    node.text_content = raw.characters.clone();
    node.text_style = raw.style.as_ref().map(lower_text_style);
    node.is_interactive = is_interactive(component_type);
    node.interactivity_hint = interactivity_hint(component_type);
    node.children = raw
        .children
        .iter()
        .filter(|child| child.visible)
        .map(lower_node)
        .collect();
    node
}

#[cfg(test)]
mod tests {
    use figura_document::model::{NodeEntry, NodeType};
    use figura_ir::ComponentType;
    use indexmap::IndexMap;

    use super::*;

    fn response(root: RawNode) -> FileNodesResponse {
        let mut nodes = IndexMap::new();
        nodes.insert(
            root.id.clone(),
            Some(NodeEntry {
                document: root,
                components: IndexMap::new(),
                styles: IndexMap::new(),
            }),
        );
        FileNodesResponse {
            name: "Site".into(),
            last_modified: "2024-01-01T00:00:00Z".into(),
            thumbnail_url: None,
            version: None,
            nodes,
        }
    }

    #[test]
    fn test_missing_root() {
        let doc = response(RawNode::new("1:1", "Page", NodeType::Frame));
        let err = parse(&doc, "2:2").unwrap_err();
        assert!(matches!(err, ParseError::MissingRoot { ref node_id } if node_id == "2:2"));
        assert_eq!(err.to_string(), "node '2:2' not found in design document");
    }

    #[test]
    fn test_hidden_subtree_is_dropped() {
        let mut hidden = RawNode::new("1:3", "Promo", NodeType::Frame);
        hidden.visible = false;
        hidden
            .children
            .push(RawNode::new("1:4", "Buy now button", NodeType::Frame));
        let mut root = RawNode::new("1:1", "Page", NodeType::Frame);
        root.children.push(RawNode::new("1:2", "Body", NodeType::Frame));
        root.children.push(hidden);

        let tree = parse(&response(root), "1:1").unwrap();

        let ids: Vec<&str> = tree.root.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["1:1", "1:2"]);
    }

    #[test]
    fn test_defaults_and_meta() {
        let tree = parse(&response(RawNode::new("1:1", "Page", NodeType::Frame)), "1:1").unwrap();

        assert_eq!(tree.meta.file_name, "Site");
        assert_eq!(tree.meta.root_node_id, "1:1");
        assert_eq!(tree.root.opacity, 1.0);
        assert_eq!(tree.root.component_type, ComponentType::Container);
        assert!(!tree.root.is_interactive);
        assert!(tree.root.text_style.is_none());
    }

    #[test]
    fn test_interactivity_is_attached() {
        let mut root = RawNode::new("1:1", "Page", NodeType::Frame);
        root.children
            .push(RawNode::new("1:2", "Submit Button", NodeType::Instance));

        let tree = parse(&response(root), "1:1").unwrap();

        let button = &tree.root.children[0];
        assert_eq!(button.component_type, ComponentType::Button);
        assert!(button.is_interactive);
        assert!(tree.root.contains_interactive());
    }
}
