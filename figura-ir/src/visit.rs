//! Tree traversal helpers.
//!
//! Everything here is read-only except [`IrNode::patch_asset_url`], the one
//! sanctioned mutation of a built tree.

use crate::{ComponentType, IrNode};

/// Pre-order, depth-first iterator over a subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a IrNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a IrNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl IrNode {
    /// Iterate over this node and all descendants in document order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// First node with the given id.
    pub fn find(&self, id: &str) -> Option<&IrNode> {
        self.iter().find(|node| node.id == id)
    }

    /// Distinct component types in the subtree, in first-seen order.
    pub fn component_types(&self) -> Vec<ComponentType> {
        let mut seen = Vec::new();
        for node in self.iter() {
            if !seen.contains(&node.component_type) {
                seen.push(node.component_type);
            }
        }
        seen
    }

    /// True if this node or any descendant is interactive.
    pub fn contains_interactive(&self) -> bool {
        self.iter().any(|node| node.is_interactive)
    }

    /// First non-empty text in the subtree, starting with this node.
    pub fn first_text(&self) -> Option<&str> {
        self.iter().find_map(IrNode::text)
    }

    /// True if the node paints an image.
    pub fn has_image_fill(&self) -> bool {
        self.fills.iter().any(|fill| fill.is_image())
    }

    /// Set `asset_url` on every node in the subtree whose id matches.
    ///
    /// Ids are expected to be unique, but a document can repeat them; all
    /// matches are patched and the count returned.
    pub fn patch_asset_url(&mut self, id: &str, url: &str) -> usize {
        let mut patched = 0;
        let mut stack: Vec<&mut IrNode> = vec![self];
        while let Some(node) = stack.pop() {
            if node.id == id {
                node.asset_url = Some(url.to_string());
                patched += 1;
            }
            stack.extend(node.children.iter_mut());
        }
        patched
    }
}

#[cfg(test)]
mod tests {
    use crate::{ComponentType, Fill, IrNode};

    fn tree() -> IrNode {
        IrNode::new("root", "Page", ComponentType::Container).with_children([
            IrNode::new("a", "Nav", ComponentType::Navbar).with_children([
                IrNode::new("a1", "Logo", ComponentType::Image),
                IrNode::new("a2", "Home", ComponentType::Link).with_text("Home"),
            ]),
            IrNode::new("b", "Hero", ComponentType::Hero)
                .with_children([IrNode::new("b1", "Heading", ComponentType::Text).with_text("Hi")]),
        ])
    }

    #[test]
    fn test_pre_order() {
        let root = tree();
        let ids: Vec<&str> = root.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "a", "a1", "a2", "b", "b1"]);
    }

    #[test]
    fn test_component_types_first_seen() {
        assert_eq!(
            tree().component_types(),
            vec![
                ComponentType::Container,
                ComponentType::Navbar,
                ComponentType::Image,
                ComponentType::Link,
                ComponentType::Hero,
                ComponentType::Text,
            ]
        );
    }

    #[test]
    fn test_first_text_and_find() {
        let root = tree();
        assert_eq!(root.first_text(), Some("Home"));
        assert_eq!(root.find("b").and_then(IrNode::first_text), Some("Hi"));
        assert!(root.find("missing").is_none());
    }

    #[test]
    fn test_contains_interactive() {
        let mut root = tree();
        assert!(!root.contains_interactive());
        root.children[0].children[1].is_interactive = true;
        assert!(root.contains_interactive());
    }

    #[test]
    fn test_patch_asset_url_hits_every_duplicate() {
        let mut root = tree();
        root.children[1]
            .children
            .push(IrNode::new("a1", "Logo copy", ComponentType::Image));

        let patched = root.patch_asset_url("a1", "https://cdn/logo.png");

        assert_eq!(patched, 2);
        let urls: Vec<_> = root
            .iter()
            .filter(|n| n.id == "a1")
            .map(|n| n.asset_url.as_deref())
            .collect();
        assert_eq!(urls, vec![Some("https://cdn/logo.png"); 2]);
        assert!(root.find("b1").unwrap().asset_url.is_none());
    }

    #[test]
    fn test_has_image_fill() {
        let mut node = IrNode::new("x", "Photo", ComponentType::Container);
        assert!(!node.has_image_fill());
        node.fills.push(Fill::Image { image_ref: None });
        assert!(node.has_image_fill());
    }
}
