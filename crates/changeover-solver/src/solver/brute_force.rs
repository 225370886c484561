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
    err::SolverError,
    eval::evaluate_indexed,
    permutation::Permutations,
    solver::{OptimalResult, SequenceSolver},
    table::TransitionTable,
};
use changeover_core::prelude::SetupTime;
use num_traits::{CheckedAdd, Zero};

/// Exhaustive search over every permutation of the equipment set.
///
/// Exact for any n but factorial in cost; intended for n below the
/// selector's threshold. On exact cost ties the first-enumerated
/// permutation wins. A missing transition fails the whole solve; skipping
/// the affected permutation could silently hide the true optimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Copy + Ord + CheckedAdd + Zero> SequenceSolver<T> for BruteForceSolver {
    fn solve(&self, table: &TransitionTable<T>) -> Result<OptimalResult<T>, SolverError> {
        let n = table.len();
        if n <= 1 {
            return Ok(OptimalResult::new(table.codes().to_vec(), SetupTime::zero()));
        }

        let mut best: Option<(SetupTime<T>, Vec<usize>)> = None;
        for order in Permutations::new(n) {
            let total = evaluate_indexed(&order, table)?;
            let improves = match &best {
                None => true,
                Some((incumbent, _)) => total < *incumbent,
            };
            if improves {
                best = Some((total, order));
            }
        }

        // n >= 2, so the enumeration produced at least one candidate.
        let (total, order) = best.expect("permutation enumeration yielded no ordering");
        Ok(OptimalResult::new(table.resolve(&order), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changeover_model::problem::{
        builder::ProblemBuilder,
        equipment::{Equipment, EquipmentCode},
        prob::Problem,
    };

    #[inline]
    fn code(c: &str) -> EquipmentCode {
        EquipmentCode::new(c)
    }

    #[inline]
    fn st(v: i64) -> SetupTime<i64> {
        SetupTime::new(v)
    }

    fn problem(codes: &[&str], entries: &[(&str, &str, i64)]) -> Problem<i64> {
        let mut b = ProblemBuilder::new();
        b.extend_equipment(codes.iter().map(|c| Equipment::new(code(c))));
        for (f, t, v) in entries {
            b.add_transition(code(f), code(t), st(*v));
        }
        b.build().unwrap()
    }

    fn four_equipment() -> Problem<i64> {
        problem(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 10),
                ("A", "C", 15),
                ("A", "D", 20),
                ("B", "A", 10),
                ("B", "C", 35),
                ("B", "D", 25),
                ("C", "A", 15),
                ("C", "B", 35),
                ("C", "D", 30),
                ("D", "A", 20),
                ("D", "B", 25),
                ("D", "C", 30),
            ],
        )
    }

    #[test]
    fn test_trivial_sizes_cost_zero() {
        let empty = TransitionTable::from_problem(&problem(&[], &[]));
        let r = BruteForceSolver::new().solve(&empty).unwrap();
        assert!(r.sequence().is_empty());
        assert_eq!(r.total_time(), st(0));

        let single = TransitionTable::from_problem(&problem(&["A"], &[]));
        let r = BruteForceSolver::new().solve(&single).unwrap();
        assert_eq!(r.sequence(), &[code("A")]);
        assert_eq!(r.total_time(), st(0));
    }

    #[test]
    fn test_finds_minimum_over_four_equipment() {
        let table = TransitionTable::from_problem(&four_equipment());
        let r = BruteForceSolver::new().solve(&table).unwrap();
        // D-B-A-C and C-A-B-D both total 50; the minimum is 50.
        assert_eq!(r.total_time(), st(50));
        assert_eq!(r.sequence().len(), 4);
    }

    #[test]
    fn test_tie_break_prefers_first_enumerated() {
        // Both orderings of two equipment cost the same; the identity
        // permutation is enumerated first.
        let p = problem(&["A", "B"], &[("A", "B", 10), ("B", "A", 10)]);
        let table = TransitionTable::from_problem(&p);
        let r = BruteForceSolver::new().solve(&table).unwrap();
        assert_eq!(r.sequence(), &[code("A"), code("B")]);
        assert_eq!(r.total_time(), st(10));
    }

    #[test]
    fn test_missing_transition_fails_fast() {
        // B -> A is absent, so the permutation [B, A] cannot be costed.
        let p = problem(&["A", "B"], &[("A", "B", 10)]);
        let table = TransitionTable::from_problem(&p);
        let err = BruteForceSolver::new().solve(&table).unwrap_err();
        assert!(matches!(err, SolverError::TransitionNotFound(_)));
    }

    #[test]
    fn test_single_missing_pair_fails_the_whole_solve() {
        // Same four-equipment matrix minus A -> D: every permutation
        // containing that adjacency is uncostable, so the solve errors
        // naming the pair instead of returning a partial optimum.
        let p = problem(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 10),
                ("A", "C", 15),
                ("B", "A", 10),
                ("B", "C", 35),
                ("B", "D", 25),
                ("C", "A", 15),
                ("C", "B", 35),
                ("C", "D", 30),
                ("D", "A", 20),
                ("D", "B", 25),
                ("D", "C", 30),
            ],
        );
        let table = TransitionTable::from_problem(&p);
        let err = BruteForceSolver::new().solve(&table).unwrap_err();
        match err {
            SolverError::TransitionNotFound(e) => {
                assert_eq!(e.from_code(), &code("A"));
                assert_eq!(e.to_code(), &code("D"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
