//! All-pairs shortest route computation and path reconstruction

use tracing::debug;

use crate::matrix::SquareMatrix;

/// Shortest-path distances plus the next-hop table needed to materialize the
/// actual routes.
///
/// The two tables are built together by [`RouteTable::solve`] and only ever
/// used together; `next[i][j]` is `None` exactly when `dist[i][j]` is
/// unreachable (or i == j).
#[derive(Debug, Clone)]
pub struct RouteTable {
    dim: usize,
    dist: SquareMatrix,
    next: Vec<Option<u32>>,
}

impl RouteTable {
    /// Runs Floyd–Warshall over the combined matrix.
    ///
    /// Takes the matrix by value and relaxes it in place into the final
    /// distance matrix, so the caller's original criterion data is never
    /// touched. The intermediate node `k` must be the outermost loop: paths
    /// through several intermediates only compose correctly once every
    /// shorter route via earlier candidates has been folded in.
    ///
    /// O(V³) time, O(V²) space. Assumes non-negative weights; with them the
    /// diagonal can never be relaxed below 0.
    pub fn solve(combined: SquareMatrix) -> Self {
        let dim = combined.dim();
        let mut dist = combined;
        let mut next: Vec<Option<u32>> = vec![None; dim * dim];

        for i in 0..dim {
            for j in 0..dim {
                if i != j && dist.is_finite_at(i, j) {
                    next[i * dim + j] = Some(j as u32);
                }
            }
        }

        for k in 0..dim {
            for i in 0..dim {
                let through = dist.get(i, k);
                // No route into k: nothing to relax on this row.
                if !through.is_finite() {
                    continue;
                }
                for j in 0..dim {
                    let candidate = through + dist.get(k, j);
                    if candidate < dist.get(i, j) {
                        dist.set(i, j, candidate);
                        next[i * dim + j] = next[i * dim + k];
                    }
                }
            }
        }

        debug!(nodes = dim, "solved all-pairs shortest routes");
        Self { dim, dist, next }
    }

    /// Number of nodes.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Shortest distance from i to j, or `None` when no route exists.
    pub fn distance(&self, i: usize, j: usize) -> Option<f64> {
        let d = self.dist.get(i, j);
        d.is_finite().then_some(d)
    }

    /// The final distance matrix (unreachable pairs hold `f64::INFINITY`).
    pub fn distances(&self) -> &SquareMatrix {
        &self.dist
    }

    /// First node to visit when traveling optimally from i to j.
    pub fn next_hop(&self, i: usize, j: usize) -> Option<usize> {
        self.next[i * self.dim + j].map(|n| n as usize)
    }

    /// Materializes the full node sequence from i to j by walking the
    /// next-hop table, or `None` when j is unreachable from i.
    ///
    /// The walk visits each node at most once (shortest paths under
    /// non-negative weights are simple), so it takes at most V-1 hops.
    pub fn path(&self, i: usize, j: usize) -> Option<Vec<usize>> {
        if i == j {
            return Some(vec![i]);
        }
        self.next_hop(i, j)?;

        let mut nodes = vec![i];
        let mut current = i;
        while current != j {
            // next_hop is Some along the whole route by construction
            current = self.next_hop(current, j)?;
            nodes.push(current);
        }
        Some(nodes)
    }
}
