use generational_arena::Index;
use termtree::Tree;

use crate::domain::TagRegistry;

/// Conversion of a hierarchy into a printable `termtree::Tree`.
pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

fn label(registry: &TagRegistry, idx: Index) -> String {
    registry
        .get_node(idx)
        .map(|node| format!("{} [{}: {}]", node.tag.id, node.tag.tag_type, node.tag.title))
        .unwrap_or_default()
}

fn build_tree(registry: &TagRegistry, node_idx: Index, parent_tree: &mut Tree<String>) {
    if let Some(node) = registry.get_node(node_idx) {
        for &child_idx in &node.children {
            let mut child_tree = Tree::new(label(registry, child_idx));
            build_tree(registry, child_idx, &mut child_tree);
            parent_tree.push(child_tree);
        }
    }
}

// A forest has several roots, so they hang below a synthetic node
impl TreeDisplay for TagRegistry {
    fn to_tree_string(&self) -> Tree<String> {
        let mut forest = Tree::new(format!("tags ({})", self.hierarchy().join(" > ")));
        for &root_idx in self.root_indices() {
            let mut tree = Tree::new(label(self, root_idx));
            build_tree(self, root_idx, &mut tree);
            forest.push(tree);
        }
        forest
    }
}
