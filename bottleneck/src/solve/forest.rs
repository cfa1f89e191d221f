use tracing::debug;

use crate::error::QueryError;
use crate::graph::WeightedGraph;

use super::unionfind::DisjointSetForest;
use super::{Bottleneck, Query};

/// Maximum bottleneck between `query.start` and `query.goal` via a
/// Kruskal-style pass over edges from heaviest to lightest.
///
/// The weight of the union that first joins start and goal is the answer.
/// If the edges run out first the two vertices are disconnected.
pub fn max_bottleneck<W: Copy + Ord>(
    graph: &WeightedGraph<W>,
    query: Query,
) -> Result<Bottleneck<W>, QueryError> {
    query.validate(graph.vertex_count())?;

    let mut edges = graph.edges().to_vec();
    edges.sort_by(|a, b| b.weight.cmp(&a.weight));

    let mut forest = DisjointSetForest::new(graph.vertex_count());
    let mut running_min: Option<W> = None;
    let mut unions = 0usize;

    for e in &edges {
        if forest.same_set(e.u, e.v) {
            continue;
        }
        forest.union(e.u, e.v);
        unions += 1;
        // Edges arrive in non-increasing order, so the latest weight is the minimum.
        let bottleneck = running_min.map_or(e.weight, |m| m.min(e.weight));
        running_min = Some(bottleneck);

        if forest.same_set(query.start, query.goal) {
            debug!(unions, "start and goal joined");
            return Ok(Bottleneck::Value(bottleneck));
        }
    }

    debug!(unions, "edges exhausted before start and goal joined");
    Ok(Bottleneck::Unreachable)
}
