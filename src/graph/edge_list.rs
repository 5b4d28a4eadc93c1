//! Columnar edge list with stable edge identifiers.
//!
//! The edge list is a transient build artifact: three parallel columns
//! `(source, target, id)` where `id` is a permutation of `[0, m)` that
//! survives sorting, so the original insertion order of each edge is
//! recoverable after the columns have been rearranged.

use crate::error::{Error, Result};

/// Columnar `(source, target, id)` triples.
///
/// Rows always move as a unit: sorting by one column carries the other
/// two along with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Source endpoint per edge.
    pub sources: Vec<usize>,
    /// Target endpoint per edge.
    pub targets: Vec<usize>,
    /// Stable edge identifier per edge.
    pub ids: Vec<usize>,
}

impl EdgeList {
    /// Build an edge list from contiguous-id pairs, assigning ids `0..m`
    /// in insertion order.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Self {
        let m = pairs.len();
        let mut sources = Vec::with_capacity(m);
        let mut targets = Vec::with_capacity(m);
        for &(u, v) in pairs {
            sources.push(u);
            targets.push(v);
        }
        Self {
            sources,
            targets,
            ids: (0..m).collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// True when the list holds no edges.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Emit both directed copies of every undirected edge, preserving
    /// each pair's id across the two copies.
    pub fn doubled(&self) -> EdgeList {
        let m = self.len();
        let mut sources = Vec::with_capacity(2 * m);
        let mut targets = Vec::with_capacity(2 * m);
        let mut ids = Vec::with_capacity(2 * m);
        for i in 0..m {
            sources.push(self.sources[i]);
            targets.push(self.targets[i]);
            ids.push(self.ids[i]);
            sources.push(self.targets[i]);
            targets.push(self.sources[i]);
            ids.push(self.ids[i]);
        }
        EdgeList {
            sources,
            targets,
            ids,
        }
    }

    /// Stable LSD radix sort (base 10) keyed on the source column.
    ///
    /// Runs in `O(m · log10(max_source))`. The pass count is bounded by
    /// the largest key present; the sort runs even when the column is
    /// already in order.
    pub fn radix_sort_by_source(&mut self) {
        let m = self.len();
        if m <= 1 {
            return;
        }
        let largest = self.sources.iter().copied().max().unwrap_or(0);

        let mut scratch_src = vec![0usize; m];
        let mut scratch_tgt = vec![0usize; m];
        let mut scratch_id = vec![0usize; m];

        let mut sig_digit = 1usize;
        while largest / sig_digit > 0 {
            let mut bucket = [0usize; 10];
            for &s in &self.sources {
                bucket[(s / sig_digit) % 10] += 1;
            }
            // Exclusive-to-inclusive prefix: bucket[d] becomes the index
            // one past the end of digit d's run.
            for d in 1..10 {
                bucket[d] += bucket[d - 1];
            }
            // Walk backwards so equal keys keep their relative order.
            for i in (0..m).rev() {
                let d = (self.sources[i] / sig_digit) % 10;
                bucket[d] -= 1;
                let loc = bucket[d];
                scratch_src[loc] = self.sources[i];
                scratch_tgt[loc] = self.targets[i];
                scratch_id[loc] = self.ids[i];
            }
            self.sources.copy_from_slice(&scratch_src);
            self.targets.copy_from_slice(&scratch_tgt);
            self.ids.copy_from_slice(&scratch_id);

            sig_digit *= 10;
        }
    }
}

/// Remap arbitrary raw node labels onto contiguous ids `[0, n)`.
///
/// Returns the rewritten edge list (ids assigned in input order) and the
/// reverse map: `original_ids[new_id]` holds the raw label. New ids
/// ascend in raw-label order, so iterating nodes `0..n` visits them by
/// ascending original label.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when no pairs are given.
pub fn remap_node_ids(pairs: &[(u64, u64)]) -> Result<(EdgeList, Vec<u64>)> {
    if pairs.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut labels = Vec::with_capacity(pairs.len() * 2);
    for &(u, v) in pairs {
        labels.push(u);
        labels.push(v);
    }
    labels.sort_unstable();
    labels.dedup();

    // Every raw label is present in the sorted unique array, so the
    // lookup cannot miss.
    let remapped: Vec<(usize, usize)> = pairs
        .iter()
        .map(|&(u, v)| {
            (
                labels.binary_search(&u).unwrap_or(0),
                labels.binary_search(&v).unwrap_or(0),
            )
        })
        .collect();

    Ok((EdgeList::from_pairs(&remapped), labels))
}
