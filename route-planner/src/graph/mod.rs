mod edge;
mod location;
mod node;
mod route;
mod single_graph;

pub use edge::*;
pub use location::Locations;
pub use node::*;
pub use route::Route;
pub use single_graph::AdjListGraph;

pub trait Connected<'a>: Component<'a> + DetStartNode<'a> + GraphSize {
    /// An empty graph counts as connected.
    fn connected(&'a self) -> bool {
        match self.start_node() {
            Some(start) => self.component_of(start).len() == self.n(),
            None => true,
        }
    }
}

impl<'a, G> Connected<'a> for G where G: Component<'a> + DetStartNode<'a> + GraphSize {}

pub trait Neighbors<'a> {
    type NeighborIter: Iterator<Item = Node>;

    fn neighbors(&'a self, node: Node) -> Self::NeighborIter;
}

pub trait Nodes<'a> {
    type NodeIter: Iterator<Item = Node>;

    fn nodes(&'a self) -> Self::NodeIter;
}

pub trait Edges<'a> {
    type EdgeIter: Iterator<Item = Edge>;

    fn edges(&'a self) -> Self::EdgeIter;
}

pub trait DetStartNode<'a> {
    fn start_node(&'a self) -> Option<Node>;
}

impl<'a, G> DetStartNode<'a> for G
where
    G: Nodes<'a>,
{
    fn start_node(&'a self) -> Option<Node> {
        self.nodes().min()
    }
}

pub trait Component<'a> {
    fn component_of(&'a self, node: Node) -> Vec<Node>;
}

pub trait GraphSize {
    fn n(&self) -> usize;
}

impl<'a, G> Component<'a> for G
where
    G: Neighbors<'a> + GraphSize,
{
    fn component_of(&'a self, start: Node) -> Vec<Node> {
        let mut nodes: Vec<Node> = vec![];
        let mut fixed_nodes = fixedbitset::FixedBitSet::with_capacity(self.n() + 1);
        let mut stack: Vec<Node> = vec![start];
        while let Some(node) = stack.pop() {
            fixed_nodes.grow(node.id() + 1);
            if fixed_nodes.put(node.id()) {
                continue;
            }
            nodes.push(node);
            for n in self.neighbors(node) {
                if !fixed_nodes.contains(n.id()) {
                    stack.push(n)
                }
            }
        }
        nodes
    }
}

#[cfg(test)]
mod test_graph {
    use super::*;

    ///   0 --5-- 1 --1-- 2
    ///  |3|     |1|     |3|
    ///   3 --1-- 4 --6-- 5
    #[test]
    fn test_graph_construction() {
        let mut graph = AdjListGraph::new();
        graph.add_edge(0.into(), 1.into(), 5.into());
        graph.add_edge(0.into(), 3.into(), 3.into());
        graph.add_edge(1.into(), 4.into(), 1.into());
        graph.add_edge(1.into(), 2.into(), 1.into());
        graph.add_edge(2.into(), 5.into(), 3.into());
        graph.add_edge(3.into(), 4.into(), 1.into());
        graph.add_edge(4.into(), 5.into(), 6.into());

        assert_eq!(6, graph.n());
        assert_eq!(7, graph.m());

        for i in 0..6 {
            assert!(graph.contains_node(i.into()));
        }
        assert!(!graph.contains_node(6.into()));

        assert!(graph.contains_edge(0.into(), 1.into()));
        assert!(graph.contains_edge(1.into(), 0.into()));
        assert!(graph.contains_edge(5.into(), 4.into()));
        assert!(!graph.contains_edge(0.into(), 5.into()));

        assert_eq!(graph.edge_cost(4.into(), 5.into()), Some(6.into()));
        assert_eq!(graph.edge_cost(5.into(), 4.into()), Some(6.into()));
        assert_eq!(graph.edges().count(), 7);
        assert!(graph.edges().all(|e| e.source() < e.sink()));
        assert!(graph.connected());
    }

    #[test]
    fn test_overwrite_edge() {
        let mut graph = AdjListGraph::new();
        assert_eq!(graph.add_edge(0.into(), 1.into(), 5.into()), None);
        assert_eq!(graph.add_edge(1.into(), 0.into(), 7.into()), Some(5.into()));
        assert_eq!(graph.edge_cost(0.into(), 1.into()), Some(7.into()));
        assert_eq!(graph.m(), 1);
    }

    #[test]
    fn test_neighbors() {
        let mut graph = AdjListGraph::new();
        graph.add_edge(0.into(), 1.into(), 5.into());
        graph.add_edge(0.into(), 2.into(), 3.into());
        graph.add_edge(1.into(), 2.into(), 1.into());

        let mut neighbors: Vec<Node> = graph.neighbors(0.into()).collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![Node::new(1), Node::new(2)]);
        assert_eq!(graph.neighbors(7.into()).count(), 0);
    }

    ///   0 --2-- 1      2 --4-- 3
    #[test]
    fn test_disconnected() {
        let mut graph = AdjListGraph::new();
        graph.add_edge(0.into(), 1.into(), 2.into());
        graph.add_edge(2.into(), 3.into(), 4.into());

        assert!(!graph.connected());
        let mut component = graph.component_of(3.into());
        component.sort();
        assert_eq!(component, vec![Node::new(2), Node::new(3)]);
    }

    #[test]
    fn test_isolated_node() {
        let mut graph = AdjListGraph::new();
        graph.add_edge(0.into(), 1.into(), 2.into());
        graph.add_node(2.into());
        assert_eq!(graph.n(), 3);
        assert!(!graph.connected());
        assert!(AdjListGraph::new().connected());
    }
}
