use ndarray::Array2;

use crate::{
    graph::{AdjListGraph, Edges, Node},
    Cost,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathCost {
    Unreachable,
    Path(Cost),
}

impl PathCost {
    pub fn cost(&self) -> Option<Cost> {
        match self {
            PathCost::Unreachable => None,
            PathCost::Path(cost) => Some(*cost),
        }
    }
}

/// Dense matrix of direct distances between all pairs of locations.
///
/// Pairs without a listed connection are [`PathCost::Unreachable`]; the diagonal is zero.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    matrix: Array2<PathCost>,
}

impl DistanceMatrix {
    /// A matrix of `n` locations with no connections between them.
    pub fn unconnected(n: usize) -> Self {
        let mut d = Array2::from_elem((n, n), PathCost::Unreachable);
        for i in 0..n {
            d[[i, i]] = PathCost::Path(Cost::zero());
        }
        DistanceMatrix { matrix: d }
    }

    /// Densifies `graph` into an `n`×`n` matrix. Nodes of `graph` must be in `0..n`.
    pub fn from_graph(graph: &AdjListGraph, n: usize) -> Self {
        let mut matrix = Self::unconnected(n);
        for edge in graph.edges() {
            matrix.set(edge.source(), edge.sink(), edge.cost());
            matrix.set(edge.sink(), edge.source(), edge.cost());
        }
        log::debug!(
            "Built {}x{} distance matrix from {} edges.",
            n,
            n,
            graph.m()
        );
        matrix
    }

    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn get(&self, n1: Node, n2: Node) -> PathCost {
        self.matrix[[n1.id(), n2.id()]]
    }

    /// The distance from `n1` to `n2`, or `None` if they are not connected.
    pub fn cost(&self, n1: Node, n2: Node) -> Option<Cost> {
        self.get(n1, n2).cost()
    }

    /// Sets the distance in one direction only.
    pub fn set(&mut self, n1: Node, n2: Node, cost: Cost) {
        self.matrix[[n1.id(), n2.id()]] = PathCost::Path(cost);
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.matrix[[i, j]] == self.matrix[[j, i]]))
    }
}
