// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{
    cache::OptimalCache,
    err::SolverError,
    solver::{
        brute_force::BruteForceSolver, held_karp::HeldKarpSolver, OptimalResult, SequenceSolver,
    },
    table::TransitionTable,
};
use changeover_model::problem::{err::EmptyProblemError, prob::Problem};
use num_traits::{CheckedAdd, Zero};
use tracing::debug;

/// Largest equipment count still handed to the exhaustive solver.
///
/// At 5 equipment the exhaustive search costs 120 evaluations; above that
/// the factorial growth makes the subset DP the cheaper exact method.
pub const DEFAULT_BRUTE_FORCE_LIMIT: usize = 5;

/// Picks an exact solver by problem size and memoizes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverSelector {
    brute_force_limit: usize,
}

impl SolverSelector {
    #[inline]
    pub fn new() -> Self {
        Self {
            brute_force_limit: DEFAULT_BRUTE_FORCE_LIMIT,
        }
    }

    /// Overrides the size threshold below which exhaustive search is used.
    #[inline]
    pub fn with_brute_force_limit(mut self, limit: usize) -> Self {
        self.brute_force_limit = limit;
        self
    }

    #[inline]
    pub fn brute_force_limit(&self) -> usize {
        self.brute_force_limit
    }

    /// Minimum-setup-time ordering of the problem's full equipment set.
    ///
    /// Returns the memoized result when the cache is populated; otherwise
    /// solves and stores. The cache belongs to this problem, so a changed
    /// matrix requires [`OptimalCache::clear`] before the next call.
    pub fn find_optimal<T>(
        &self,
        problem: &Problem<T>,
        cache: &OptimalCache<T>,
    ) -> Result<OptimalResult<T>, SolverError>
    where
        T: Copy + Ord + CheckedAdd + Zero,
    {
        if problem.is_empty() {
            return Err(EmptyProblemError::new().into());
        }

        if let Some(result) = cache.get() {
            debug!("returning memoized optimal result");
            return Ok(result);
        }

        let table = TransitionTable::from_problem(problem);
        let n = table.len();

        let result = if n <= self.brute_force_limit {
            let solver = BruteForceSolver::new();
            debug!(n, solver = SequenceSolver::<T>::name(&solver), "solving");
            solver.solve(&table)?
        } else {
            let solver = HeldKarpSolver::new();
            debug!(n, solver = SequenceSolver::<T>::name(&solver), "solving");
            solver.solve(&table)?
        };

        cache.set(result.clone());
        Ok(result)
    }
}

impl Default for SolverSelector {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
