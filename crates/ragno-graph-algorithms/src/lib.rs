pub mod common;
pub mod topology;
pub mod community;
pub mod centrality;
pub mod clustering;
pub mod pagerank;
pub mod stats;

pub use common::{GraphView, NodeId};
pub use topology::{degree_centrality, density, network_density, top_k_indices};
pub use community::{connected_components, dfs_component, ComponentResult};
pub use centrality::{approximate_closeness, bfs_distances, bridging_betweenness};
pub use clustering::{local_clustering, ClusteringResult};
pub use pagerank::{normalize, personalized_page_rank, PageRankConfig, PageRankResult};
pub use stats::{score_distribution, ScoreDistribution};
