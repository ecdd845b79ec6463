use fixedbitset::FixedBitSet;

use crate::{matrix::DistanceMatrix, Cost};

use super::{Locations, Node};

/// An open route through the graph. Unlike a tour, it does not return to its first node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    nodes: Vec<Node>,
    cost: Cost,
}

impl Route {
    pub fn new(nodes: Vec<Node>, cost: Cost) -> Self {
        Self { nodes, cost }
    }

    /// Builds a route by summing the matrix distances along `nodes`.
    ///
    /// Returns `None` if two consecutive nodes are not connected or the sum overflows.
    pub fn with_cost_from(nodes: Vec<Node>, matrix: &DistanceMatrix) -> Option<Self> {
        let mut cost = Cost::zero();
        for e in nodes.windows(2) {
            cost = cost.checked_add(matrix.cost(e[0], e[1])?)?;
        }
        Some(Self::new(nodes, cost))
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    pub fn first(&self) -> Option<Node> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<Node> {
        self.nodes.last().copied()
    }

    /// Returns `true` if every node `0..n` appears exactly once.
    pub fn visits_all(&self, n: usize) -> bool {
        if self.nodes.len() != n {
            return false;
        }
        let mut visited = FixedBitSet::with_capacity(n);
        for node in &self.nodes {
            if node.id() >= n || visited.put(node.id()) {
                return false;
            }
        }
        true
    }

    pub fn reversed(&self) -> Route {
        let mut nodes = self.nodes.clone();
        nodes.reverse();
        Route::new(nodes, self.cost)
    }

    /// Location names along the route, in visiting order.
    pub fn names<'a>(&self, locations: &'a Locations) -> Vec<&'a str> {
        self.nodes
            .iter()
            .filter_map(|n| locations.name(*n))
            .collect()
    }
}
