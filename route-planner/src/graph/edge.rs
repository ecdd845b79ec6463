use crate::Cost;

use super::Node;

/// An undirected connection between two locations.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Edge {
    cost: Cost,
    source: Node,
    sink: Node,
}

impl Edge {
    pub fn new(source: Node, sink: Node, cost: Cost) -> Self {
        Edge { source, sink, cost }
    }

    pub fn reversed(&self) -> Edge {
        Edge::new(self.sink, self.source, self.cost)
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn sink(&self) -> Node {
        self.sink
    }
}
