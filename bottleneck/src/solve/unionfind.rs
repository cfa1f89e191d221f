/// Union-find (disjoint-set forest) with full path compression and union by rank.
///
/// Elements are indices in `[0, n)`. Only same-set queries are meaningful; which
/// element ends up as a representative depends on the union history.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSetForest {
    /// Create a forest of `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Find the representative of the set containing `x`.
    ///
    /// Every node on the path from `x` to the root is rewired to point
    /// directly at the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`. Returns the surviving representative.
    ///
    /// The lower-rank root goes under the higher-rank one. On a tie, `x`'s root
    /// goes under `y`'s root and `y`'s rank grows by one.
    pub fn union(&mut self, x: usize, y: usize) -> usize {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return rx;
        }
        if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
            rx
        } else {
            if self.rank[rx] == self.rank[ry] {
                self.rank[ry] += 1;
            }
            self.parent[rx] = ry;
            ry
        }
    }

    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Rank of `x`'s node. Only meaningful for roots.
    pub fn rank(&self, x: usize) -> u32 {
        self.rank[x]
    }
}
