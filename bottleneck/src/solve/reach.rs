use std::collections::VecDeque;

use crate::graph::WeightedGraph;

use super::Query;

/// Result of a threshold-limited search from start to goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach<W> {
    /// Goal was discovered; carries the smallest edge weight on the discovery path.
    Reachable(W),
    Unreachable,
}

impl<W> Reach<W> {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Reach::Reachable(_))
    }
}

/// Breadth-first search from `query.start` that ignores edges lighter than `threshold`.
///
/// Each frontier entry carries the bottleneck of the path that discovered it
/// (`None` stands for the empty path at start). The search stops at the first
/// edge that discovers `query.goal` and reports that path's bottleneck, which
/// is always `>= threshold` but not necessarily the best over all paths.
///
/// `query` must already be validated against `graph`.
pub fn reach<W: Copy + Ord>(graph: &WeightedGraph<W>, query: Query, threshold: W) -> Reach<W> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut frontier: VecDeque<(usize, Option<W>)> = VecDeque::new();

    visited[query.start] = true;
    frontier.push_back((query.start, None));

    while let Some((u, path_min)) = frontier.pop_front() {
        for &(v, w) in graph.neighbors(u) {
            if w < threshold || visited[v] {
                continue;
            }
            let m = path_min.map_or(w, |m| m.min(w));
            if v == query.goal {
                return Reach::Reachable(m);
            }
            visited[v] = true;
            frontier.push_back((v, Some(m)));
        }
    }

    Reach::Unreachable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_example() -> WeightedGraph<i32> {
        WeightedGraph::from_triples(
            4,
            [(0, 1, 1), (0, 3, 0), (0, 2, 2), (1, 2, 2), (1, 3, 1), (2, 3, 2)],
        )
        .unwrap()
    }

    #[test]
    fn low_threshold_finds_direct_edge_first() {
        let g = worked_example();
        // FIFO order reaches goal over the direct weight-1 edge.
        assert_eq!(reach(&g, Query::default(), 0), Reach::Reachable(1));
        assert_eq!(reach(&g, Query::default(), 1), Reach::Reachable(1));
    }

    #[test]
    fn threshold_skips_light_edges() {
        let g = worked_example();
        assert_eq!(reach(&g, Query::default(), 2), Reach::Reachable(2));
    }

    #[test]
    fn threshold_above_every_weight_is_unreachable() {
        let g = worked_example();
        assert_eq!(reach(&g, Query::default(), 3), Reach::Unreachable);
    }

    #[test]
    fn reports_discovery_path_bottleneck() {
        // 0 -5- 2 -9- 1 and 0 -3- 3 -8- 1; threshold 3 admits both.
        let g = WeightedGraph::from_triples(4, [(0, 2, 5), (0, 3, 3), (2, 1, 9), (3, 1, 8)])
            .unwrap();
        assert_eq!(reach(&g, Query::default(), 3), Reach::Reachable(5));
        assert_eq!(reach(&g, Query::default(), 6), Reach::Unreachable);
    }

    #[test]
    fn edges_at_threshold_are_usable() {
        let g = WeightedGraph::from_triples(2, [(0, 1, 4)]).unwrap();
        assert!(reach(&g, Query::default(), 4).is_reachable());
        assert!(!reach(&g, Query::default(), 5).is_reachable());
    }

    #[test]
    fn custom_query_endpoints() {
        let g = worked_example();
        let q = Query::new(3, 1);
        assert_eq!(reach(&g, q, 2), Reach::Reachable(2));
    }
}
