use std::collections::HashMap;

/// Disjoint Set Union (DSU) over junction box ids, with full path compression
/// and union by size.
///
/// Ids are indices into flat arrays. Passing an id outside `0..len()` to any
/// method panics.
#[derive(Debug, Clone)]
pub struct Dsu {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    /// Tracks how many disjoint sets currently exist.
    num_components: usize,
}

impl Dsu {
    /// Creates `n` singleton circuits, one per id.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sizes: vec![1; n],
            num_components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns the representative of `i`'s circuit and repoints every node on
    /// the walked path straight at it.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Unifies the circuits of `i` and `j`. Returns `true` if a merge actually
    /// occurred; already connected ids are left untouched.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let mut root_i = self.find(i);
        let mut root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        // Smaller tree goes under the larger one, ties keep `root_i` on top.
        if self.sizes[root_i] < self.sizes[root_j] {
            std::mem::swap(&mut root_i, &mut root_j);
        }
        self.parent[root_j] = root_i;
        self.sizes[root_i] += self.sizes[root_j];
        self.num_components -= 1;
        true
    }

    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// Number of boxes in `i`'s circuit.
    pub fn size_of(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.sizes[root]
    }

    /// Member count of every circuit, keyed by its representative.
    pub fn component_sizes(&mut self) -> HashMap<usize, usize> {
        let mut counts = HashMap::with_capacity(self.num_components);
        for i in 0..self.len() {
            *counts.entry(self.find(i)).or_insert(0) += 1;
        }
        counts
    }
}
