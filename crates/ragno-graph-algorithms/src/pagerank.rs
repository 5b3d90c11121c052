//! Personalized PageRank
//!
//! Power iteration with a restart (personalization) distribution. Rank mass is
//! pushed along every incidence, scaled by the edge weight.

use super::common::GraphView;

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Upper bound on iterations
    pub max_iterations: usize,
    /// Stop once the largest per-node change falls below this
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Scores plus convergence diagnostics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankResult {
    /// Score per node index
    pub scores: Vec<f64>,
    /// Iterations actually performed
    pub iterations: usize,
    /// Whether the tolerance was met before `max_iterations`
    pub converged: bool,
    /// Largest per-node change in the last iteration
    pub max_delta: f64,
}

/// Scale `values` in place so they sum to 1. A zero sum is left untouched.
pub fn normalize(values: &mut [f64]) {
    let sum: f64 = values.iter().sum();
    if sum != 0.0 {
        for v in values.iter_mut() {
            *v /= sum;
        }
    }
}

/// Personalized PageRank over the view.
///
/// `personalization` is the restart distribution by node index and is used
/// as given (missing trailing entries count as 0). `None` means uniform `1/n`.
/// Each node `u` sends `d * score[u] / degree(u) * w` along every incidence of
/// weight `w`; nodes without incidences send nothing.
pub fn personalized_page_rank(
    view: &GraphView,
    personalization: Option<&[f64]>,
    config: PageRankConfig,
) -> PageRankResult {
    let n = view.node_count;

    if n == 0 {
        return PageRankResult {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
            max_delta: 0.0,
        };
    }

    // 1. Initialize scores and restart vector
    let uniform = 1.0 / n as f64;
    let mut scores = vec![uniform; n];
    let mut next_scores = vec![0.0; n];
    let restart: Vec<f64> = match personalization {
        Some(p) => (0..n).map(|i| p.get(i).copied().unwrap_or(0.0)).collect(),
        None => vec![uniform; n],
    };

    // 2. Iteration
    let d = config.damping_factor;
    let mut iterations = 0;
    let mut converged = false;
    let mut max_delta = 0.0;

    while iterations < config.max_iterations {
        iterations += 1;

        for (next, r) in next_scores.iter_mut().zip(&restart) {
            *next = (1.0 - d) * r;
        }

        for u in 0..n {
            let degree = view.degree(u);
            if degree == 0 {
                continue;
            }
            let share = d * scores[u] / degree as f64;
            for (&v, &w) in view.neighbors(u).iter().zip(view.weights(u)) {
                next_scores[v] += share * w;
            }
        }

        max_delta = scores
            .iter()
            .zip(&next_scores)
            .map(|(old, new)| (new - old).abs())
            .fold(0.0, |acc: f64, delta| {
                if acc.is_nan() || delta.is_nan() {
                    f64::NAN
                } else {
                    acc.max(delta)
                }
            });

        // Swap buffers
        std::mem::swap(&mut scores, &mut next_scores);

        // Non-finite scores never settle
        if max_delta.is_nan() {
            break;
        }
        if max_delta < config.tolerance {
            converged = true;
            break;
        }
    }

    PageRankResult {
        scores,
        iterations,
        converged,
        max_delta,
    }
}
