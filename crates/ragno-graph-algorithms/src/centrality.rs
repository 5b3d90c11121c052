//! Centrality approximations
//!
//! Neither measure is the textbook one. Betweenness is a local bridging count
//! and closeness averages hop distances over the whole node count.

use super::common::GraphView;
use std::collections::VecDeque;

/// Bridging betweenness.
///
/// For each node, count the unordered pairs of its distinct neighbors that
/// have no direct edge between them. Cost is O(deg²) per node.
pub fn bridging_betweenness(view: &GraphView) -> Vec<f64> {
    let sets = view.neighbor_sets();

    (0..view.node_count)
        .map(|v| {
            let neighbors = view.distinct_neighbors(v);
            let mut bridged = 0usize;
            for (i, &a) in neighbors.iter().enumerate() {
                for &b in &neighbors[i + 1..] {
                    if !sets[a].contains(&b) {
                        bridged += 1;
                    }
                }
            }
            bridged as f64
        })
        .collect()
}

/// Unweighted hop distances from `source`; `None` for unreachable nodes.
pub fn bfs_distances(view: &GraphView, source: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; view.node_count];
    let mut queue = VecDeque::new();

    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_dist = dist[current].map(|d| d + 1);
        for &next in view.neighbors(current) {
            if dist[next].is_none() {
                dist[next] = next_dist;
                queue.push_back(next);
            }
        }
    }

    dist
}

/// Approximate closeness: `1 / (Σ reachable distances / (n - 1))`.
///
/// The denominator uses the total node count, so unreachable nodes simply
/// drop out of the sum. Zero averages map to 0.
pub fn approximate_closeness(view: &GraphView) -> Vec<f64> {
    let n = view.node_count;

    (0..n)
        .map(|source| {
            if n < 2 {
                return 0.0;
            }
            let total: usize = bfs_distances(view, source).into_iter().flatten().sum();
            let avg_distance = total as f64 / (n - 1) as f64;
            if avg_distance > 0.0 {
                1.0 / avg_distance
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::numbered_nodes;

    fn star() -> GraphView {
        let edges: Vec<_> = (1..=4).map(|leaf| (0, leaf, 1.0)).collect();
        GraphView::from_edges(numbered_nodes(5), &edges)
    }

    #[test]
    fn test_bridging_star() {
        let scores = bridging_betweenness(&star());
        // Hub bridges every pair of its 4 leaves
        assert_eq!(scores[0], 6.0);
        assert!(scores[1..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_bridging_triangle_is_zero() {
        let view = GraphView::from_edges(
            numbered_nodes(3),
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)],
        );
        assert_eq!(bridging_betweenness(&view), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_bridging_ignores_parallel_edges() {
        // Path 0-1-2 with 0-1 doubled
        let view = GraphView::from_edges(
            numbered_nodes(3),
            &[(0, 1, 1.0), (0, 1, 1.0), (1, 2, 1.0)],
        );
        assert_eq!(bridging_betweenness(&view)[1], 1.0);
    }

    #[test]
    fn test_bfs_distances() {
        let view = GraphView::from_edges(numbered_nodes(4), &[(0, 1, 0.1), (1, 2, 0.9)]);
        assert_eq!(bfs_distances(&view, 0), vec![Some(0), Some(1), Some(2), None]);
    }

    #[test]
    fn test_closeness_star() {
        let closeness = approximate_closeness(&star());
        // Hub: 4 hops of 1 over n-1 = 4
        assert!((closeness[0] - 1.0).abs() < 1e-12);
        // Leaf: 1 + 3*2 = 7 over 4
        assert!((closeness[1] - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_closeness_disconnected_uses_total_count() {
        // 0-1 plus isolated 2: avg distance for 0 is 1 / 2
        let view = GraphView::from_edges(numbered_nodes(3), &[(0, 1, 1.0)]);
        let closeness = approximate_closeness(&view);
        assert!((closeness[0] - 2.0).abs() < 1e-12);
        assert_eq!(closeness[2], 0.0);
    }

    #[test]
    fn test_closeness_single_node() {
        let view = GraphView::from_edges(numbered_nodes(1), &[]);
        assert_eq!(approximate_closeness(&view), vec![0.0]);
    }
}
