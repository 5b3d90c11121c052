//! Graph topology analysis algorithms
//!
//! Degree centrality, network density and stable top-k ranking.

use super::common::GraphView;

/// Degree of every node: number of incidences in its adjacency row.
///
/// Parallel edges each count once; this is not a unique-neighbor count.
pub fn degree_centrality(view: &GraphView) -> Vec<usize> {
    (0..view.node_count).map(|idx| view.degree(idx)).collect()
}

/// Ratio of stored edges to the maximum possible `n(n-1)/2`.
///
/// Returns 0 when fewer than two nodes exist.
pub fn density(edge_count: usize, node_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let possible = (node_count * (node_count - 1)) as f64 / 2.0;
    edge_count as f64 / possible
}

/// Density of the view, counting parallel edges as stored
pub fn network_density(view: &GraphView) -> f64 {
    density(view.edge_count, view.node_count)
}

/// Indices of the `k` highest scores, descending.
///
/// The sort is stable, so ties keep index (insertion) order. NaN scores rank
/// after every number, in index order.
pub fn top_k_indices(scores: &[f64], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        let (x, y) = (scores[a], scores[b]);
        match (x.is_nan(), y.is_nan()) {
            (false, false) => y.total_cmp(&x),
            (a_nan, b_nan) => a_nan.cmp(&b_nan),
        }
    });
    order.truncate(k);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::numbered_nodes;

    #[test]
    fn test_star_degree_and_density() {
        // Hub 0 with leaves 1..=4
        let edges: Vec<_> = (1..=4).map(|leaf| (0, leaf, 1.0)).collect();
        let view = GraphView::from_edges(numbered_nodes(5), &edges);

        let degrees = degree_centrality(&view);
        assert_eq!(degrees, vec![4, 1, 1, 1, 1]);
        assert!((network_density(&view) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_density_small_graphs() {
        assert_eq!(density(0, 0), 0.0);
        assert_eq!(density(3, 1), 0.0);
        assert_eq!(density(3, 3), 1.0);
    }

    #[test]
    fn test_parallel_edges_count_in_degree() {
        let view = GraphView::from_edges(numbered_nodes(2), &[(0, 1, 1.0), (0, 1, 1.0)]);
        assert_eq!(degree_centrality(&view), vec![2, 2]);
        assert_eq!(network_density(&view), 2.0);
    }

    #[test]
    fn test_top_k_is_stable() {
        let scores = [1.0, 3.0, 3.0, 2.0, 3.0];
        assert_eq!(top_k_indices(&scores, 3), vec![1, 2, 4]);
        assert_eq!(top_k_indices(&scores, 10).len(), 5);
        assert!(top_k_indices(&[], 3).is_empty());
    }

    #[test]
    fn test_top_k_puts_nan_last() {
        let scores = [1.0, f64::NAN, 3.0, f64::NAN, 2.0, f64::INFINITY];
        assert_eq!(top_k_indices(&scores, 6), vec![5, 2, 4, 0, 1, 3]);
        assert_eq!(top_k_indices(&scores, 2), vec![5, 2]);

        // Large mixed input must sort without panicking
        let mixed: Vec<f64> = (0..64)
            .map(|i| if i % 3 == 0 { f64::NAN } else { (i * 37 % 11) as f64 })
            .collect();
        let ranked = top_k_indices(&mixed, 64);
        assert_eq!(ranked.len(), 64);
        assert!(ranked[..42].iter().all(|&i| !mixed[i].is_nan()));
        assert!(ranked[42..].iter().all(|&i| mixed[i].is_nan()));
    }
}
