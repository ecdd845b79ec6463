use rustc_hash::FxHashMap;

use super::Node;

/// Bidirectional table between location names and nodes.
///
/// Nodes are handed out densely in order of first appearance, so the `i`-th new name becomes `Node(i)`.
#[derive(Debug, Clone, Default)]
pub struct Locations {
    names: Vec<String>,
    index: FxHashMap<String, Node>,
}

impl Locations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node of `name`, registering it first if it is unknown.
    pub fn intern(&mut self, name: &str) -> Node {
        if let Some(node) = self.index.get(name) {
            return *node;
        }
        let node = Node::new(self.names.len());
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), node);
        node
    }

    pub fn node(&self, name: &str) -> Option<Node> {
        self.index.get(name).copied()
    }

    pub fn name(&self, node: Node) -> Option<&str> {
        self.names.get(node.id()).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        self.names.as_slice()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
