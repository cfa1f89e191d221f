use tracing::{debug, trace};

use crate::error::QueryError;
use crate::graph::WeightedGraph;

use super::reach::{reach, Reach};
use super::{Bottleneck, Query};

/// Maximum bottleneck between `query.start` and `query.goal`, found by binary
/// searching the sorted distinct edge weights for the largest threshold that
/// still connects them.
///
/// Relies on reachability being monotone in the threshold: lowering it only
/// adds edges. Every reachable threshold's path bottleneck is a lower bound on the
/// answer, and the test at the largest feasible weight yields it exactly.
pub fn max_bottleneck<W: Copy + Ord>(
    graph: &WeightedGraph<W>,
    query: Query,
) -> Result<Bottleneck<W>, QueryError> {
    query.validate(graph.vertex_count())?;

    let mut weights: Vec<W> = graph.edges().iter().map(|e| e.weight).collect();
    weights.sort_unstable();
    weights.dedup();

    let mut best = Bottleneck::Unreachable;
    let mut left = 0;
    let mut right = weights.len();
    let mut rounds = 0usize;

    // Indices below `left` are feasible, indices at or above `right` are not.
    while left < right {
        let mid = left + (right - left) / 2;
        rounds += 1;
        match reach(graph, query, weights[mid]) {
            Reach::Reachable(m) => {
                trace!(mid, "threshold reachable");
                best = best.max(Bottleneck::Value(m));
                left = mid + 1;
            }
            Reach::Unreachable => {
                trace!(mid, "threshold unreachable");
                right = mid;
            }
        }
    }

    debug!(
        distinct_weights = weights.len(),
        rounds,
        reachable = best.is_reachable(),
        "binary search finished"
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(v: usize, edges: &[(usize, usize, i64)]) -> Bottleneck<i64> {
        let g = WeightedGraph::from_triples(v, edges.iter().copied()).unwrap();
        max_bottleneck(&g, Query::default()).unwrap()
    }

    #[test]
    fn worked_example() {
        let edges = [(0, 1, 1), (0, 3, 0), (0, 2, 2), (1, 2, 2), (1, 3, 1), (2, 3, 2)];
        assert_eq!(solve(4, &edges), Bottleneck::Value(2));
    }

    #[test]
    fn single_edge() {
        assert_eq!(solve(2, &[(0, 1, 5)]), Bottleneck::Value(5));
    }

    #[test]
    fn heaviest_edge_is_the_answer() {
        // The answer sits at the last sorted index.
        assert_eq!(solve(3, &[(0, 2, 1), (0, 1, 9), (1, 2, 3)]), Bottleneck::Value(9));
    }

    #[test]
    fn lightest_edge_is_the_answer() {
        assert_eq!(
            solve(4, &[(0, 2, 1), (2, 3, 8), (3, 1, 9), (2, 3, 7)]),
            Bottleneck::Value(1)
        );
    }

    #[test]
    fn disconnected_is_unreachable() {
        assert_eq!(solve(4, &[(2, 3, 4)]), Bottleneck::Unreachable);
    }

    #[test]
    fn no_edges_is_unreachable() {
        assert_eq!(solve(2, &[]), Bottleneck::Unreachable);
    }

    #[test]
    fn duplicate_weights() {
        let edges = [(0, 2, 4), (2, 1, 4), (0, 3, 4), (3, 1, 2), (0, 1, 1)];
        assert_eq!(solve(4, &edges), Bottleneck::Value(4));
    }

    #[test]
    fn rejects_invalid_query() {
        let g = WeightedGraph::from_triples(2, [(0, 1, 5)]).unwrap();
        assert!(max_bottleneck(&g, Query::new(0, 2)).is_err());
    }
}
