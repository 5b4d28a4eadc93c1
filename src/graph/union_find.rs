//! Disjoint-set forest for component labelling.
//!
//! Weighted quick-union with path compression: `find` and `union` run
//! in near-constant amortized time, so labelling all components of a
//! graph costs close to `O(n + m)`.

use super::SparseGraph;

/// Union-find over `n` dense ids.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Find the root of `x`, then point every node on the walked path
    /// directly at it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`; smaller tree goes under
    /// the larger. Returns false when they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            self.parent[ra] = rb;
            self.size[rb] += self.size[ra];
        } else {
            self.parent[rb] = ra;
            self.size[ra] += self.size[rb];
        }
        true
    }

    /// True when `a` and `b` share a root.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Label the connected components of the uncut edge set.
///
/// Returns per-node labels and the member list of each component.
/// Labels are assigned by first appearance over ascending node id, so
/// component 0 always contains node 0 and the numbering is stable for a
/// given cut state.
pub fn label_components(graph: &SparseGraph) -> (Vec<usize>, Vec<Vec<usize>>) {
    let n = graph.node_count();
    let mut uf = UnionFind::new(n);
    for (u, v, _) in graph.uncut_edges() {
        uf.union(u, v);
    }

    let mut root_label = vec![usize::MAX; n];
    let mut labels = vec![0usize; n];
    let mut communities: Vec<Vec<usize>> = Vec::new();
    for v in 0..n {
        let root = uf.find(v);
        if root_label[root] == usize::MAX {
            root_label[root] = communities.len();
            communities.push(Vec::new());
        }
        labels[v] = root_label[root];
        communities[root_label[root]].push(v);
    }
    (labels, communities)
}
