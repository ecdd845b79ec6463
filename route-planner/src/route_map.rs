use crate::{
    graph::{AdjListGraph, Connected, GraphSize, Locations},
    matrix::DistanceMatrix,
    record::Record,
};

/// Everything derived from a list of distance records: names, graph and dense matrix.
///
/// Built once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct RouteMap {
    locations: Locations,
    graph: AdjListGraph,
    matrix: DistanceMatrix,
}

impl RouteMap {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut locations = Locations::new();
        let mut graph = AdjListGraph::new();
        for record in records {
            let source = locations.intern(&record.source);
            let sink = locations.intern(&record.sink);
            if let Some(previous) = graph.add_edge(source, sink, record.distance) {
                log::warn!(
                    "Distance between {} and {} listed twice ({} and {}), keeping the latter.",
                    record.source,
                    record.sink,
                    previous,
                    record.distance
                );
            }
        }
        let matrix = DistanceMatrix::from_graph(&graph, locations.len());

        log::info!(
            "Route map with {} locations and {} connections.",
            graph.n(),
            graph.m()
        );

        RouteMap {
            locations,
            graph,
            matrix,
        }
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    pub fn graph(&self) -> &AdjListGraph {
        &self.graph
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// `false` if some locations can never be reached from the others.
    pub fn connected(&self) -> bool {
        self.graph.connected()
    }
}
