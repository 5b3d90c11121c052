//! Community detection algorithms
//!
//! Connected components found with an explicit-stack depth-first walk.
//! Edge weight and kind are ignored.

use super::common::GraphView;

/// Result of the component search
#[derive(Debug, Clone)]
pub struct ComponentResult {
    /// Components in discovery order, each listing node indices in visit order
    pub components: Vec<Vec<usize>>,
    /// Component position for every node index
    pub node_component: Vec<usize>,
}

impl ComponentResult {
    /// Components with more than one member, in discovery order
    pub fn non_trivial(&self) -> impl Iterator<Item = &Vec<usize>> {
        self.components.iter().filter(|c| c.len() > 1)
    }
}

/// Collect every node reachable from `start` that is not yet in `visited`.
///
/// `visited` is shared across calls so a sweep over all nodes discovers each
/// component exactly once.
pub fn dfs_component(view: &GraphView, start: usize, visited: &mut [bool]) -> Vec<usize> {
    let mut component = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        component.push(current);

        for &next in view.neighbors(current) {
            if !visited[next] {
                stack.push(next);
            }
        }
    }

    component
}

/// Connected components of the undirected view, singletons included.
pub fn connected_components(view: &GraphView) -> ComponentResult {
    let n = view.node_count;
    let mut visited = vec![false; n];
    let mut components = Vec::new();
    let mut node_component = vec![0; n];

    for start in 0..n {
        if visited[start] {
            continue;
        }
        let component = dfs_component(view, start, &mut visited);
        for &idx in &component {
            node_component[idx] = components.len();
        }
        components.push(component);
    }

    ComponentResult {
        components,
        node_component,
    }
}
