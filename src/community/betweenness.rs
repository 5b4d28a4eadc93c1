//! Sampled edge betweenness via Brandes' algorithm.
//!
//! # Brandes' Algorithm (2001)
//!
//! Naive all-pairs betweenness is O(V³). Brandes reduced it to O(VE)
//! for unweighted graphs:
//!
//! 1. BFS from each source `s`, recording shortest-path counts σ_sv and
//!    the predecessor sets of the shortest-path DAG.
//! 2. Back-propagate dependency scores in order of non-increasing
//!    distance from `s`:
//!
//! ```text
//! δ_s(v) = Σ_{w: v ∈ P_s(w)} (σ_sv / σ_sw) × (1 + δ_s(w))
//! ```
//!
//! Here the credit of the step `(v, w)` is attributed to the **edge**
//! `{v, w}` rather than to `w`, yielding edge betweenness — the
//! quantity the divisive loop cuts on.
//!
//! # Sampling
//!
//! Exact edge betweenness needs a pass from every vertex. On large
//! graphs the accumulation instead runs from a sampled subset of
//! sources (typically the highest-degree ones); credit is summed across
//! sources with no normalization, which preserves the relative order
//! that maximum selection depends on.
//!
//! # References
//!
//! - Brandes (2001). "A faster algorithm for betweenness centrality"
//! - Girvan & Newman (2002). "Community structure in social and
//!   biological networks"

use std::collections::VecDeque;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::SparseGraph;

/// Scratch state for one BFS source, reused across sources.
///
/// Allocated once per run; [`reset`](Self::reset) restores the initial
/// state while keeping every buffer's capacity.
#[derive(Debug, Clone)]
pub struct BfsState {
    /// Hop distance from the source; `-1` marks "undiscovered".
    distance: Vec<i64>,
    /// First-discovered predecessor, for path tracing.
    parent: Vec<Option<usize>>,
    /// Number of shortest paths from the source. 64-bit: path counts
    /// explode combinatorially on dense graphs.
    sigma: Vec<u64>,
    /// All shortest-path DAG in-neighbors, deduplicated.
    predecessors: Vec<Vec<usize>>,
    /// Discovered vertices in non-decreasing distance order.
    order: Vec<usize>,
    /// Dependency accumulator for the backward pass.
    delta: Vec<f64>,
    queue: VecDeque<usize>,
}

impl BfsState {
    /// Scratch for a graph of `n` nodes.
    pub fn new(n: usize) -> Self {
        Self {
            distance: vec![-1; n],
            parent: vec![None; n],
            sigma: vec![0; n],
            predecessors: vec![Vec::new(); n],
            order: Vec::with_capacity(n),
            delta: vec![0.0; n],
            queue: VecDeque::new(),
        }
    }

    /// Restore the pre-search state, preserving capacity.
    pub fn reset(&mut self) {
        self.distance.fill(-1);
        self.parent.fill(None);
        self.sigma.fill(0);
        for preds in &mut self.predecessors {
            preds.clear();
        }
        self.order.clear();
        self.delta.fill(0.0);
        self.queue.clear();
    }

    /// Distance of `v` from the last source, if reached.
    pub fn distance(&self, v: usize) -> Option<usize> {
        (self.distance[v] >= 0).then(|| self.distance[v] as usize)
    }

    /// Shortest-path count of `v` from the last source.
    pub fn sigma(&self, v: usize) -> u64 {
        self.sigma[v]
    }

    /// Shortest-path DAG in-neighbors of `v`.
    pub fn predecessors(&self, v: usize) -> &[usize] {
        &self.predecessors[v]
    }

    /// Vertices discovered by the last search, nearest first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// One shortest path from the last source to `dest`, traced through
    /// first-discovered parents. `None` when `dest` was not reached.
    pub fn path_to(&self, dest: usize) -> Option<Vec<usize>> {
        self.distance(dest)?;
        let mut path = vec![dest];
        let mut v = dest;
        while let Some(p) = self.parent[v] {
            path.push(p);
            v = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Breadth-first search from `source`, recording the shortest-path DAG.
///
/// Cut edges are treated as absent. On return, `state.order()` holds
/// every reachable vertex exactly once in non-decreasing distance
/// order, `sigma` counts shortest paths, and `predecessors` is the
/// complete in-neighbor set of each vertex on the DAG.
pub fn bfs(graph: &SparseGraph, source: usize, state: &mut BfsState) {
    state.reset();
    state.distance[source] = 0;
    state.sigma[source] = 1;
    state.order.push(source);
    state.queue.push_back(source);

    while let Some(u) = state.queue.pop_front() {
        let du = state.distance[u];
        for (w, id) in graph.edges_from(u) {
            if graph.is_cut(id) {
                continue;
            }
            if state.distance[w] < 0 {
                state.distance[w] = du + 1;
                state.parent[w] = Some(u);
                state.order.push(w);
                state.queue.push_back(w);
            }
            if state.distance[w] == du + 1 {
                state.sigma[w] += state.sigma[u];
                if !state.predecessors[w].contains(&u) {
                    state.predecessors[w].push(u);
                }
            }
        }
    }
}

/// BFS from `source`, then back-propagate Brandes dependencies,
/// adding each edge's share into `credit` (indexed by edge id).
pub fn source_dependencies(
    graph: &SparseGraph,
    source: usize,
    state: &mut BfsState,
    credit: &mut [f64],
) {
    bfs(graph, source, state);

    // Non-increasing distance: reverse of discovery order.
    for i in (0..state.order.len()).rev() {
        let w = state.order[i];
        if state.sigma[w] == 0 {
            continue;
        }
        for &u in &state.predecessors[w] {
            let share = (state.sigma[u] as f64 / state.sigma[w] as f64) * (1.0 + state.delta[w]);
            state.delta[u] += share;
            if let Some(id) = graph.edge_id(u, w) {
                credit[id] += share;
            }
        }
    }
}

/// Accumulate edge betweenness from every sampled source into the
/// graph's credit array. Additive; cut edges receive nothing and keep
/// their sentinels.
///
/// With the `parallel` feature, sources fan out across a rayon pool
/// with per-source scratch and the partial credit vectors are reduced
/// by summation; the result is identical to the serial pass.
pub fn accumulate(graph: &mut SparseGraph, sources: &[usize]) {
    let m = graph.edge_count();

    #[cfg(feature = "parallel")]
    let total: Vec<f64> = {
        let shared: &SparseGraph = graph;
        sources
            .par_iter()
            .map(|&s| {
                let mut state = BfsState::new(shared.node_count());
                let mut credit = vec![0.0; m];
                source_dependencies(shared, s, &mut state, &mut credit);
                credit
            })
            .reduce(
                || vec![0.0; m],
                |mut acc, partial| {
                    for (a, p) in acc.iter_mut().zip(&partial) {
                        *a += p;
                    }
                    acc
                },
            )
    };

    #[cfg(not(feature = "parallel"))]
    let total: Vec<f64> = {
        let mut state = BfsState::new(graph.node_count());
        let mut credit = vec![0.0; m];
        for &s in sources {
            source_dependencies(graph, s, &mut state, &mut credit);
        }
        credit
    };

    for (id, &c) in total.iter().enumerate() {
        if c > 0.0 {
            graph.add_credit(id, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0─1 and 0─2 meet again at 3: two equal-length paths.
    fn diamond() -> SparseGraph {
        SparseGraph::from_pairs(&[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap()
    }

    #[test]
    fn test_bfs_distances_and_sigma() {
        let g = diamond();
        let mut state = BfsState::new(g.node_count());
        bfs(&g, 0, &mut state);

        assert_eq!(state.distance(0), Some(0));
        assert_eq!(state.distance(1), Some(1));
        assert_eq!(state.distance(2), Some(1));
        assert_eq!(state.distance(3), Some(2));

        assert_eq!(state.sigma(0), 1);
        assert_eq!(state.sigma(1), 1);
        assert_eq!(state.sigma(3), 2);

        let mut preds = state.predecessors(3).to_vec();
        preds.sort_unstable();
        assert_eq!(preds, vec![1, 2]);
    }

    #[test]
    fn test_bfs_order_is_nondecreasing_distance() {
        let g = SparseGraph::from_pairs(&[(0, 1), (1, 2), (2, 3), (0, 4)]).unwrap();
        let mut state = BfsState::new(g.node_count());
        bfs(&g, 0, &mut state);

        assert_eq!(state.order().len(), g.node_count());
        let dists: Vec<usize> = state
            .order()
            .iter()
            .map(|&v| state.distance(v).unwrap())
            .collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_bfs_skips_cut_edges() {
        let mut g = diamond();
        let id = g.edge_id(1, 3).unwrap();
        g.cut(id, 1);

        let mut state = BfsState::new(g.node_count());
        bfs(&g, 0, &mut state);

        // Only the 0─2─3 route remains.
        assert_eq!(state.sigma(3), 1);
        assert_eq!(state.predecessors(3), &[2]);
        assert_eq!(state.distance(3), Some(2));
    }

    #[test]
    fn test_bfs_unreachable_stays_undiscovered() {
        let g = SparseGraph::from_pairs(&[(0, 1), (2, 3)]).unwrap();
        let mut state = BfsState::new(g.node_count());
        bfs(&g, 0, &mut state);

        assert_eq!(state.distance(2), None);
        assert_eq!(state.sigma(2), 0);
        assert_eq!(state.order().len(), 2);
    }

    #[test]
    fn test_path_to_traces_parents() {
        let g = SparseGraph::from_pairs(&[(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut state = BfsState::new(g.node_count());
        bfs(&g, 0, &mut state);

        assert_eq!(state.path_to(3), Some(vec![0, 1, 2, 3]));
        assert_eq!(state.path_to(0), Some(vec![0]));
    }

    #[test]
    fn test_state_reset_clears_previous_search() {
        let g = diamond();
        let mut state = BfsState::new(g.node_count());
        bfs(&g, 0, &mut state);
        bfs(&g, 3, &mut state);

        assert_eq!(state.distance(3), Some(0));
        assert_eq!(state.distance(0), Some(2));
        assert_eq!(state.sigma(0), 2);
        assert_eq!(state.order().len(), g.node_count());
    }

    #[test]
    fn test_path_graph_exact_edge_betweenness() {
        // In a tree, summing from every source gives each edge
        // 2 · |left side| · |right side|.
        let mut g = SparseGraph::from_pairs(&[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]).unwrap();
        let sources: Vec<usize> = (0..g.node_count()).collect();
        accumulate(&mut g, &sources);

        let expected = [10.0, 16.0, 18.0, 16.0, 10.0];
        for (id, &want) in expected.iter().enumerate() {
            assert!(
                (g.credit(id) - want).abs() < 1e-9,
                "edge {id}: got {}, want {want}",
                g.credit(id)
            );
        }
    }

    #[test]
    fn test_bridge_dominates_betweenness() {
        // Two triangles joined by a bridge 2─3.
        let mut g = SparseGraph::from_pairs(&[
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 3),
            (3, 4),
            (3, 5),
            (4, 5),
        ])
        .unwrap();
        let sources: Vec<usize> = (0..g.node_count()).collect();
        accumulate(&mut g, &sources);

        let bridge = g.edge_id(2, 3).unwrap();
        for (_, _, id) in g.edges() {
            if id != bridge {
                assert!(g.credit(bridge) > g.credit(id));
            }
        }
    }

    #[test]
    fn test_accumulation_is_additive_across_sources() {
        let g = diamond();
        let mut one_shot = g.clone();
        accumulate(&mut one_shot, &[0, 3]);

        let mut stepwise = g.clone();
        accumulate(&mut stepwise, &[0]);
        accumulate(&mut stepwise, &[3]);

        for id in 0..g.edge_count() {
            assert!((one_shot.credit(id) - stepwise.credit(id)).abs() < 1e-12);
        }
    }
}
