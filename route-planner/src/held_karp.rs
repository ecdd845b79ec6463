//! Exact open Hamiltonian paths by dynamic programming over subsets (Held-Karp).
//!
//! `dp[mask][i]` holds the best cost of a path that visits exactly the nodes in `mask` and ends in `i`.
//! Every singleton mask starts at cost zero, so the path may begin anywhere and never returns to its
//! start. The tables need `O(2^n * n)` space and are filled in `O(2^n * n^2)` time.

use std::fmt;

use ndarray::Array2;

use crate::{
    error::{RouteError, RouteResult},
    graph::{Node, Route},
    matrix::DistanceMatrix,
    Cost,
};

/// Largest number of locations the solver accepts. The tables hold `2^n * n` entries each.
pub const MAX_LOCATIONS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    Shortest,
    Longest,
}

impl Objective {
    /// Strict comparison of a candidate against the current table entry.
    ///
    /// An empty entry is the sentinel for "no path yet" and loses against any cost.
    pub fn improves(&self, candidate: Cost, incumbent: Option<Cost>) -> bool {
        match (self, incumbent) {
            (_, None) => true,
            (Objective::Shortest, Some(current)) => candidate < current,
            (Objective::Longest, Some(current)) => candidate > current,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::Shortest => write!(f, "shortest"),
            Objective::Longest => write!(f, "longest"),
        }
    }
}

/// Tables of a single optimization run.
pub struct HeldKarp<'a> {
    matrix: &'a DistanceMatrix,
    objective: Objective,
    n: usize,
    dp: Array2<Option<Cost>>,
    parent: Array2<Option<usize>>,
}

impl<'a> HeldKarp<'a> {
    pub fn new(matrix: &'a DistanceMatrix, objective: Objective) -> RouteResult<Self> {
        let n = matrix.size();
        if n == 0 {
            return Err(RouteError::NoLocations);
        }
        if n > MAX_LOCATIONS {
            return Err(RouteError::TooManyLocations {
                count: n,
                max: MAX_LOCATIONS,
            });
        }

        let mut dp = Array2::from_elem((1 << n, n), None);
        for i in 0..n {
            dp[[1 << i, i]] = Some(Cost::zero());
        }

        Ok(HeldKarp {
            matrix,
            objective,
            n,
            dp,
            parent: Array2::from_elem((1 << n, n), None),
        })
    }

    fn full_mask(&self) -> usize {
        (1 << self.n) - 1
    }

    /// Extends every reached path by one unvisited node. Masks only grow, so ascending order suffices.
    fn fill(&mut self) -> RouteResult<()> {
        for mask in 1..=self.full_mask() {
            for i in 0..self.n {
                if mask & (1 << i) == 0 {
                    continue;
                }
                let current = match self.dp[[mask, i]] {
                    Some(cost) => cost,
                    None => continue,
                };
                for j in 0..self.n {
                    if mask & (1 << j) != 0 {
                        continue;
                    }
                    // unlisted pairs are never relaxed
                    let distance = match self.matrix.cost(i.into(), j.into()) {
                        Some(d) => d,
                        None => continue,
                    };
                    let next = mask | (1 << j);
                    let candidate = current
                        .checked_add(distance)
                        .ok_or(RouteError::CostOverflow)?;
                    if self.objective.improves(candidate, self.dp[[next, j]]) {
                        self.dp[[next, j]] = Some(candidate);
                        self.parent[[next, j]] = Some(i);
                    }
                }
            }
        }
        Ok(())
    }

    /// The first end node holding the best full-mask value.
    fn best_end(&self) -> Option<(usize, Cost)> {
        let full = self.full_mask();
        let mut best: Option<(usize, Cost)> = None;
        for i in 0..self.n {
            if let Some(cost) = self.dp[[full, i]] {
                if self.objective.improves(cost, best.map(|(_, c)| c)) {
                    best = Some((i, cost));
                }
            }
        }
        best
    }

    fn reconstruct(&self, end: usize) -> Vec<Node> {
        let mut mask = self.full_mask();
        let mut current = Some(end);
        let mut nodes = Vec::with_capacity(self.n);
        while let Some(node) = current {
            nodes.push(Node::new(node));
            current = self.parent[[mask, node]];
            mask ^= 1 << node;
        }
        nodes.reverse();
        nodes
    }

    pub fn run(mut self) -> RouteResult<Route> {
        log::info!(
            "Start computing the {} route over {} locations ({} states).",
            self.objective,
            self.n,
            self.dp.len()
        );
        self.fill()?;

        let (end, cost) = self.best_end().ok_or_else(|| {
            log::warn!("No {} route visits every location.", self.objective);
            RouteError::NoPathFound
        })?;
        let nodes = self.reconstruct(end);
        debug_assert_eq!(nodes.len(), self.n);

        log::info!(
            "Finished computing the {} route. Distance: {}",
            self.objective,
            cost
        );
        Ok(Route::new(nodes, cost))
    }
}

pub fn solve(matrix: &DistanceMatrix, objective: Objective) -> RouteResult<Route> {
    HeldKarp::new(matrix, objective)?.run()
}

/// Computes the shortest and the longest route. The two runs share nothing but `matrix`,
/// so with `parallel` they are executed on the rayon pool.
pub fn solve_both(
    matrix: &DistanceMatrix,
    parallel: bool,
) -> (RouteResult<Route>, RouteResult<Route>) {
    if parallel {
        rayon::join(
            || solve(matrix, Objective::Shortest),
            || solve(matrix, Objective::Longest),
        )
    } else {
        (
            solve(matrix, Objective::Shortest),
            solve(matrix, Objective::Longest),
        )
    }
}
