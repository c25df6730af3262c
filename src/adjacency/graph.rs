use super::{Adjacency, Successors};
use crate::walk::Walk;
use std::convert::Infallible;
use webgraph::traits::{RandomAccessGraph, RandomAccessLabeling};

/// The adjacency function of a [`webgraph`] graph.
///
/// Vertices are node indices and arcs are labelled with `()`. Successors are
/// enumerated lazily in the order of the graph.
///
/// # Examples
///
/// ```
/// use graph_walks::adjacency::GraphAdjacency;
/// use graph_walks::algo::traversal::Traversal;
/// use webgraph::prelude::VecGraph;
///
/// let graph = VecGraph::from_arcs([(0, 1), (0, 2), (1, 3)]);
/// let traversal = Traversal::post_order(0, GraphAdjacency::new(graph));
/// let order = traversal
///     .into_iter()
///     .map(|walk| walk.map(|walk| *walk.to()))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(order, vec![3, 1, 2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct GraphAdjacency<G> {
    graph: G,
}

impl<G: RandomAccessGraph> GraphAdjacency<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn into_inner(self) -> G {
        self.graph
    }
}

/// The successors of a node of a [`webgraph`] graph.
pub struct GraphSuccessors<'a, G: RandomAccessGraph + 'a> {
    node: usize,
    iter: <<G as RandomAccessLabeling>::Labels<'a> as IntoIterator>::IntoIter,
}

impl<'a, G: RandomAccessGraph + 'a> Successors<usize, ()> for GraphSuccessors<'a, G> {
    type Error = Infallible;

    fn next_walk(&mut self) -> Option<Result<Walk<usize, ()>, Infallible>> {
        self.iter
            .next()
            .map(|succ| Ok(Walk::step(self.node, succ, ())))
    }
}

impl<G: RandomAccessGraph> Adjacency<usize, ()> for GraphAdjacency<G> {
    type Error = Infallible;
    type Successors<'a>
        = GraphSuccessors<'a, G>
    where
        Self: 'a;

    fn successors(&self, &node: &usize) -> Result<GraphSuccessors<'_, G>, Infallible> {
        Ok(GraphSuccessors {
            node,
            iter: self.graph.successors(node).into_iter(),
        })
    }
}
