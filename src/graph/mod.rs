//! Sparse undirected graph in doubly-stored CSR form.
//!
//! The graph is built once from an edge list and never structurally
//! mutated afterwards; edge removal is a *marking* operation that
//! readers honor.
//!
//! ## Why every edge is stored twice
//!
//! An undirected edge `{u, v}` appears as `(u → v)` in `u`'s neighbor
//! slice and as `(v → u)` in `v`'s. Storing each edge once would make
//! "who are the neighbors of u" require scanning every other node's
//! slice; duplicating trades 2× memory for `O(degree)` enumeration.
//! Both directed copies carry the **same** edge id in `[0, m)`, which
//! keeps per-edge betweenness accumulation coherent no matter which
//! direction a BFS traverses the edge.
//!
//! ## Cut encoding
//!
//! `edge_credit[id]` does double duty: non-negative values are
//! accumulated betweenness credit; a negative value `-i` marks the edge
//! as cut during iteration `i` of the divisive loop. Once negative, the
//! entry is never overwritten within a run — traversal and selection
//! treat `credit < 0` as "edge absent".

pub mod edge_list;
pub mod union_find;

pub use edge_list::{remap_node_ids, EdgeList};
pub use union_find::{label_components, UnionFind};

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Sparse undirected graph with stable edge identifiers.
#[derive(Debug, Clone)]
pub struct SparseGraph {
    n: usize,
    m: usize,
    /// `offsets[v]..offsets[v + 1]` indexes `v`'s slice of `neighbors`.
    offsets: Vec<usize>,
    /// Neighbor node ids, `2m` entries.
    neighbors: Vec<usize>,
    /// Edge id per directed copy, parallel to `neighbors`.
    edge_ids: Vec<usize>,
    /// Betweenness accumulator / cut marker, one entry per undirected edge.
    edge_credit: Vec<f64>,
    /// Raw input label per contiguous node id.
    original_ids: Vec<u64>,
    /// Canonical `(min, max)` endpoint pair to edge id.
    edge_index: HashMap<(usize, usize), usize>,
}

impl SparseGraph {
    /// Build a graph from raw `(u, v)` label pairs.
    ///
    /// Labels are remapped onto contiguous ids (ascending label order);
    /// edge ids are assigned in input order. Fails with
    /// [`Error::EmptyInput`] when no pairs are given.
    pub fn from_pairs(pairs: &[(u64, u64)]) -> Result<Self> {
        let (elist, original_ids) = remap_node_ids(pairs)?;
        let n = original_ids.len();
        let m = elist.len();

        let mut edge_index = HashMap::with_capacity(m);
        for i in 0..m {
            let (a, b) = (elist.sources[i], elist.targets[i]);
            let key = (a.min(b), a.max(b));
            edge_index.entry(key).or_insert(elist.ids[i]);
        }

        let mut doubled = elist.doubled();
        doubled.radix_sort_by_source();

        // One pass over the sorted records; a node with no record keeps
        // the running offset, leaving it an empty slice.
        let mut offsets = vec![0usize; n + 1];
        let mut rec = 0usize;
        for v in 0..n {
            while rec < doubled.len() && doubled.sources[rec] == v {
                rec += 1;
            }
            offsets[v + 1] = rec;
        }

        Ok(Self {
            n,
            m,
            offsets,
            neighbors: doubled.targets,
            edge_ids: doubled.ids,
            edge_credit: vec![0.0; m],
            original_ids,
            edge_index,
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.m
    }

    /// Neighbor slice of `v` (both cut and uncut).
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Iterate `(neighbor, edge_id)` pairs out of `v`.
    pub fn edges_from(&self, v: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let range = self.offsets[v]..self.offsets[v + 1];
        self.neighbors[range.clone()]
            .iter()
            .copied()
            .zip(self.edge_ids[range].iter().copied())
    }

    /// Iterate every undirected edge once as `(u, v, id)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        (0..self.n).flat_map(move |u| {
            self.edges_from(u)
                .filter(move |&(w, _)| u < w)
                .map(move |(w, id)| (u, w, id))
        })
    }

    /// Like [`edges`](Self::edges), skipping cut edges.
    pub fn uncut_edges(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.edges().filter(move |&(_, _, id)| !self.is_cut(id))
    }

    /// Degree of `v` at build time (cut edges still count).
    pub fn degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    /// Raw input label of node `v`.
    pub fn original_id(&self, v: usize) -> u64 {
        self.original_ids[v]
    }

    /// Reverse id map: `original_ids()[v]` is the raw label of `v`.
    pub fn original_ids(&self) -> &[u64] {
        &self.original_ids
    }

    /// Edge id of `{a, b}`, if the graph was built with that edge.
    pub fn edge_id(&self, a: usize, b: usize) -> Option<usize> {
        self.edge_index.get(&(a.min(b), a.max(b))).copied()
    }

    /// True when `{a, b}` is a structural edge, cut or not.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edge_index.contains_key(&(a.min(b), a.max(b)))
    }

    /// Current credit (or cut sentinel) of an edge.
    pub fn credit(&self, id: usize) -> f64 {
        self.edge_credit[id]
    }

    /// Add betweenness credit to an edge.
    pub fn add_credit(&mut self, id: usize, amount: f64) {
        self.edge_credit[id] += amount;
    }

    /// True when the edge has been cut.
    pub fn is_cut(&self, id: usize) -> bool {
        self.edge_credit[id] < 0.0
    }

    /// Mark an edge as cut during `iteration` (numbered from 1).
    ///
    /// The CSR arrays are untouched; cut-awareness is enforced by
    /// readers. Within a run the cut set only grows.
    pub fn cut(&mut self, id: usize, iteration: usize) {
        debug_assert!(iteration >= 1, "iterations are numbered from 1");
        debug_assert!(!self.is_cut(id), "edge {id} already cut");
        self.edge_credit[id] = -(iteration as f64);
    }

    /// Zero accumulated credit, preserving cut sentinels.
    pub fn reset_credit(&mut self) {
        for c in &mut self.edge_credit {
            if *c > 0.0 {
                *c = 0.0;
            }
        }
    }

    /// Uncut edge with the highest strictly-positive credit; ties go to
    /// the smallest edge id. `None` when no positive credit remains.
    pub fn select_max_credit(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (id, &c) in self.edge_credit.iter().enumerate() {
            if c > 0.0 && best.is_none_or(|b| c > self.edge_credit[b]) {
                best = Some(id);
            }
        }
        best
    }

    /// The top `⌈rate · n⌉` nodes by degree, ties broken by ascending id.
    ///
    /// # Errors
    ///
    /// `rate` must lie in `(0, 1]`.
    pub fn sample_top_degree(&self, rate: f64) -> Result<Vec<usize>> {
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "sample_rate",
                message: "must lie in (0, 1]",
            });
        }
        let mut ranked: Vec<usize> = (0..self.n).collect();
        ranked.sort_unstable_by(|&a, &b| self.degree(b).cmp(&self.degree(a)).then(a.cmp(&b)));
        let count = ((rate * self.n as f64).ceil() as usize).min(self.n);
        ranked.truncate(count);
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> SparseGraph {
        SparseGraph::from_pairs(&[(1, 2), (2, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn test_csr_counts() {
        let g = path_graph();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        // offsets[n] covers both directed copies.
        assert_eq!(g.offsets[0], 0);
        assert_eq!(g.offsets[g.node_count()], 2 * g.edge_count());
    }

    #[test]
    fn test_csr_double_storage_shares_edge_id() {
        let g = path_graph();
        for (u, v, id) in g.edges() {
            // v appears exactly once in u's slice and vice versa.
            assert_eq!(g.neighbors(u).iter().filter(|&&w| w == v).count(), 1);
            assert_eq!(g.neighbors(v).iter().filter(|&&w| w == u).count(), 1);
            let from_u = g.edges_from(u).find(|&(w, _)| w == v).unwrap().1;
            let from_v = g.edges_from(v).find(|&(w, _)| w == u).unwrap().1;
            assert_eq!(from_u, id);
            assert_eq!(from_v, id);
        }
    }

    #[test]
    fn test_edge_ids_are_a_permutation() {
        let g = SparseGraph::from_pairs(&[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
        let mut ids: Vec<usize> = g.edges().map(|(_, _, id)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_edge_id_is_insertion_order() {
        let g = path_graph();
        // (1,2) was inserted first, (3,4) last; labels remap to 0..4.
        assert_eq!(g.edge_id(0, 1), Some(0));
        assert_eq!(g.edge_id(1, 2), Some(1));
        assert_eq!(g.edge_id(2, 3), Some(2));
        assert_eq!(g.edge_id(0, 3), None);
    }

    #[test]
    fn test_degree_and_neighbors() {
        let g = SparseGraph::from_pairs(&[(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(g.degree(0), 3);
        assert_eq!(g.degree(1), 1);
        let mut nbrs = g.neighbors(0).to_vec();
        nbrs.sort_unstable();
        assert_eq!(nbrs, vec![1, 2, 3]);
    }

    #[test]
    fn test_cut_and_reset_preserve_sentinels() {
        let mut g = path_graph();
        g.add_credit(0, 2.5);
        g.add_credit(2, 1.0);
        g.cut(1, 3);
        assert!(g.is_cut(1));
        assert_eq!(g.credit(1), -3.0);

        g.reset_credit();
        assert_eq!(g.credit(0), 0.0);
        assert_eq!(g.credit(2), 0.0);
        // The sentinel survives the reset.
        assert_eq!(g.credit(1), -3.0);
        assert!(g.is_cut(1));
    }

    #[test]
    fn test_select_max_ignores_cut_and_breaks_ties_low() {
        let mut g = SparseGraph::from_pairs(&[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert_eq!(g.select_max_credit(), None);

        g.add_credit(1, 4.0);
        g.add_credit(2, 4.0);
        g.add_credit(3, 1.0);
        assert_eq!(g.select_max_credit(), Some(1));

        g.cut(1, 1);
        assert_eq!(g.select_max_credit(), Some(2));
    }

    #[test]
    fn test_sample_top_degree() {
        // Node 2 has degree 3, node 0 degree 2, others degree 1 or 2.
        let g = SparseGraph::from_pairs(&[(2, 0), (2, 1), (2, 3), (0, 4)]).unwrap();
        let all = g.sample_top_degree(1.0).unwrap();
        assert_eq!(all[0], 2);
        assert_eq!(all[1], 0);
        assert_eq!(all.len(), g.node_count());

        let top = g.sample_top_degree(0.2).unwrap();
        assert_eq!(top, vec![2]);
    }

    #[test]
    fn test_sample_ties_break_by_ascending_id() {
        let g = SparseGraph::from_pairs(&[(0, 1), (2, 3)]).unwrap();
        let sample = g.sample_top_degree(1.0).unwrap();
        assert_eq!(sample, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sample_rate_validation() {
        let g = path_graph();
        assert!(g.sample_top_degree(0.0).is_err());
        assert!(g.sample_top_degree(1.5).is_err());
    }

    #[test]
    fn test_roundtrip_rebuild_matches() {
        let g = SparseGraph::from_pairs(&[(10, 20), (20, 30), (10, 30)]).unwrap();
        let pairs: Vec<(u64, u64)> = g
            .edges()
            .map(|(u, v, _)| (g.original_id(u), g.original_id(v)))
            .collect();
        let rebuilt = SparseGraph::from_pairs(&pairs).unwrap();

        assert_eq!(rebuilt.node_count(), g.node_count());
        assert_eq!(rebuilt.edge_count(), g.edge_count());
        assert_eq!(rebuilt.original_ids(), g.original_ids());
        for v in 0..g.node_count() {
            let mut a = g.neighbors(v).to_vec();
            let mut b = rebuilt.neighbors(v).to_vec();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }
}
