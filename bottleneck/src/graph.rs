use smallvec::SmallVec;

use crate::error::GraphError;

/// An undirected weighted edge between two 0-based vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }
}

type Adjacency<W> = SmallVec<[(usize, W); 4]>;

/// Immutable undirected graph stored as per-vertex adjacency lists.
///
/// Vertices are 0-based indices in `[0, vertex_count)`. Every edge `(u, v, w)`
/// is recorded in both `u`'s and `v`'s lists. The original edge list is kept
/// so solvers can sort their own copy of it.
#[derive(Debug, Clone)]
pub struct WeightedGraph<W> {
    adjacency: Vec<Adjacency<W>>,
    edges: Vec<Edge<W>>,
}

impl<W: Copy> WeightedGraph<W> {
    /// Build a graph from a vertex count and a list of edges.
    ///
    /// Fails if `vertex_count` is zero or any endpoint is `>= vertex_count`.
    pub fn new(vertex_count: usize, edges: Vec<Edge<W>>) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::Empty);
        }

        let mut adjacency: Vec<Adjacency<W>> = vec![SmallVec::new(); vertex_count];
        for (index, e) in edges.iter().enumerate() {
            for vertex in [e.u, e.v] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        index,
                        vertex,
                        vertex_count,
                    });
                }
            }
            adjacency[e.u].push((e.v, e.weight));
            adjacency[e.v].push((e.u, e.weight));
        }

        Ok(Self { adjacency, edges })
    }

    /// Build a graph from `(u, v, weight)` triples.
    pub fn from_triples<I>(vertex_count: usize, triples: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let edges = triples
            .into_iter()
            .map(|(u, v, w)| Edge::new(u, v, w))
            .collect();
        Self::new(vertex_count, edges)
    }
}

impl<W> WeightedGraph<W> {
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edges in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// `(neighbor, weight)` pairs incident to `vertex`, in insertion order.
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        &self.adjacency[vertex]
    }
}
