//! Local clustering coefficient

use super::common::GraphView;

/// Per-node clustering coefficients and their aggregate
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusteringResult {
    /// Coefficient per node index (0 for nodes with fewer than two neighbors)
    pub coefficients: Vec<f64>,
    /// Mean over eligible nodes only
    pub average: f64,
    /// Nodes with at least two distinct neighbors
    pub eligible_nodes: usize,
}

/// Fraction of each node's distinct neighbor pairs that share an edge.
///
/// Nodes with fewer than two distinct neighbors store 0 and are left out of
/// the average's denominator.
pub fn local_clustering(view: &GraphView) -> ClusteringResult {
    let sets = view.neighbor_sets();
    let mut coefficients = vec![0.0; view.node_count];
    let mut total = 0.0;
    let mut eligible_nodes = 0;

    for (v, coefficient) in coefficients.iter_mut().enumerate() {
        let neighbors = view.distinct_neighbors(v);
        let k = neighbors.len();
        if k < 2 {
            continue;
        }

        let mut links = 0usize;
        for (i, &a) in neighbors.iter().enumerate() {
            for &b in &neighbors[i + 1..] {
                if sets[a].contains(&b) || sets[b].contains(&a) {
                    links += 1;
                }
            }
        }

        let possible = (k * (k - 1)) as f64 / 2.0;
        *coefficient = links as f64 / possible;
        total += *coefficient;
        eligible_nodes += 1;
    }

    let average = if eligible_nodes > 0 {
        total / eligible_nodes as f64
    } else {
        0.0
    };

    ClusteringResult {
        coefficients,
        average,
        eligible_nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::numbered_nodes;

    #[test]
    fn test_triangle() {
        let view = GraphView::from_edges(
            numbered_nodes(3),
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)],
        );
        let result = local_clustering(&view);
        assert_eq!(result.coefficients, vec![1.0, 1.0, 1.0]);
        assert_eq!(result.average, 1.0);
        assert_eq!(result.eligible_nodes, 3);
    }

    #[test]
    fn test_star_hub_is_zero() {
        let edges: Vec<_> = (1..=4).map(|leaf| (0, leaf, 1.0)).collect();
        let view = GraphView::from_edges(numbered_nodes(5), &edges);
        let result = local_clustering(&view);
        assert_eq!(result.coefficients[0], 0.0);
        assert_eq!(result.eligible_nodes, 1);
        assert_eq!(result.average, 0.0);
    }

    #[test]
    fn test_average_skips_low_degree_nodes() {
        // Triangle 0-1-2 with pendant 3 on node 0
        let view = GraphView::from_edges(
            numbered_nodes(4),
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (0, 3, 1.0)],
        );
        let result = local_clustering(&view);
        assert!((result.coefficients[0] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.coefficients[3], 0.0);
        assert_eq!(result.eligible_nodes, 3);
        let expected = (1.0 / 3.0 + 1.0 + 1.0) / 3.0;
        assert!((result.average - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_graph() {
        let result = local_clustering(&GraphView::empty());
        assert!(result.coefficients.is_empty());
        assert_eq!(result.average, 0.0);
    }
}
