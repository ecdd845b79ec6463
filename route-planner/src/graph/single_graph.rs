use rustc_hash::FxHashMap;

use crate::Cost;

use super::{Edge, Edges, GraphSize, Neighbors, Node, Nodes};

/// Adjacency-list based representation of the undirected, weighted route graph.
#[derive(Debug, Clone, Default)]
pub struct AdjListGraph {
    /// This object maps each node to its neighbors with the corresponding distances.
    adj_list: FxHashMap<Node, FxHashMap<Node, Cost>>,
}

impl AdjListGraph {
    pub fn new() -> Self {
        AdjListGraph {
            adj_list: FxHashMap::default(),
        }
    }

    pub fn add_node(&mut self, node: Node) {
        self.adj_list.entry(node).or_default();
    }

    /// Adds an undirected edge. Returns the previous distance if the pair was already connected.
    pub fn add_edge(&mut self, source: Node, sink: Node, cost: Cost) -> Option<Cost> {
        self.add_edge_raw(Edge::new(source, sink, cost))
    }

    fn add_edge_raw(&mut self, edge: Edge) -> Option<Cost> {
        let previous = self.insert_directed(edge);
        self.insert_directed(edge.reversed());
        previous
    }

    fn insert_directed(&mut self, edge: Edge) -> Option<Cost> {
        self.adj_list
            .entry(edge.source())
            .or_default()
            .insert(edge.sink(), edge.cost())
    }

    /// Returns the distance between two nodes if they are connected.
    pub fn edge_cost(&self, node1: Node, node2: Node) -> Option<Cost> {
        self.adj_list
            .get(&node1)
            .and_then(|adj| adj.get(&node2))
            .copied()
    }

    pub fn contains_edge(&self, node1: Node, node2: Node) -> bool {
        self.edge_cost(node1, node2).is_some()
    }

    pub fn contains_node(&self, node: Node) -> bool {
        self.adj_list.contains_key(&node)
    }

    pub fn m(&self) -> usize {
        self.adj_list
            .values()
            .map(|edges| edges.len())
            .sum::<usize>()
            / 2
    }
}

impl GraphSize for AdjListGraph {
    fn n(&self) -> usize {
        self.adj_list.len()
    }
}

pub struct NeighborIter<'a> {
    adj_iter: Option<std::collections::hash_map::Keys<'a, Node, Cost>>,
}

impl<'a> Iterator for NeighborIter<'a> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.adj_iter.as_mut().and_then(|keys| keys.next().copied())
    }
}

impl<'a> Neighbors<'a> for AdjListGraph {
    type NeighborIter = NeighborIter<'a>;

    fn neighbors(&'a self, node: Node) -> Self::NeighborIter {
        NeighborIter {
            adj_iter: self.adj_list.get(&node).map(|m| m.keys()),
        }
    }
}

impl<'a> Nodes<'a> for AdjListGraph {
    type NodeIter =
        std::iter::Copied<std::collections::hash_map::Keys<'a, Node, FxHashMap<Node, Cost>>>;

    fn nodes(&'a self) -> Self::NodeIter {
        self.adj_list.keys().copied()
    }
}

pub struct EdgeIter<'a> {
    base_iter: std::collections::hash_map::Iter<'a, Node, FxHashMap<Node, Cost>>,
    sink_iter: Option<(Node, std::collections::hash_map::Iter<'a, Node, Cost>)>,
}

impl<'a> Iterator for EdgeIter<'a> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, sink_iter)) = &mut self.sink_iter {
                if let Some((sink, cost)) = sink_iter.next() {
                    if *source < *sink {
                        return Some(Edge::new(*source, *sink, *cost));
                    } else {
                        continue;
                    }
                }
            }
            // sink_iter empty or not initialized
            if let Some((node, map)) = self.base_iter.next() {
                self.sink_iter = Some((*node, map.iter()))
            } else {
                return None;
            }
        }
    }
}

impl<'a> Edges<'a> for AdjListGraph {
    type EdgeIter = EdgeIter<'a>;

    /// Every undirected edge exactly once, oriented from the smaller to the larger node.
    fn edges(&'a self) -> Self::EdgeIter {
        EdgeIter {
            base_iter: self.adj_list.iter(),
            sink_iter: None,
        }
    }
}
