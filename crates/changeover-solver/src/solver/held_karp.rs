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
    err::{ReconstructionError, SolverError},
    solver::{OptimalResult, SequenceSolver},
    table::TransitionTable,
};
use changeover_core::prelude::SetupTime;
use num_traits::{CheckedAdd, Zero};

/// Held-Karp dynamic program over visited-set bitmasks.
///
/// State `(mask, last)` holds the cheapest ordering of the equipment in
/// `mask` that ends at `last`; each state also keeps the predecessor index
/// so the ordering can be walked back once the full mask is reached. The
/// ordering has a free start and end, so every singleton mask is seeded as
/// a base case and the answer is the minimum over all end states.
/// O(n^2 * 2^n) time against the n! of exhaustive search. Panics when the
/// equipment count exceeds the mask width of `usize`; the state space is
/// unallocatable long before that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKarpSolver;

impl HeldKarpSolver {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy)]
struct DpCell<T> {
    time: SetupTime<T>,
    prev: Option<usize>,
}

impl<T: Copy + Ord + CheckedAdd + Zero> SequenceSolver<T> for HeldKarpSolver {
    fn solve(&self, table: &TransitionTable<T>) -> Result<OptimalResult<T>, SolverError> {
        let n = table.len();
        if n <= 1 {
            return Ok(OptimalResult::new(table.codes().to_vec(), SetupTime::zero()));
        }
        assert!(n < usize::BITS as usize, "bitmask state space overflow");

        let full_mask: usize = (1 << n) - 1;
        let mut dp: Vec<Option<DpCell<T>>> = vec![None; (full_mask + 1) * n];

        // Any equipment may open the sequence.
        for start in 0..n {
            dp[(1 << start) * n + start] = Some(DpCell {
                time: SetupTime::zero(),
                prev: None,
            });
        }

        for mask in 1..=full_mask {
            for last in 0..n {
                if mask & (1 << last) == 0 {
                    continue;
                }
                let cell = match dp[mask * n + last] {
                    Some(cell) => cell,
                    None => continue,
                };
                for next in 0..n {
                    if mask & (1 << next) != 0 {
                        continue;
                    }
                    let cost = table.setup_time(last, next)?;
                    let candidate = cell.time + cost;
                    let slot = &mut dp[(mask | (1 << next)) * n + next];
                    let improves = match slot {
                        None => true,
                        Some(existing) => candidate < existing.time,
                    };
                    if improves {
                        *slot = Some(DpCell {
                            time: candidate,
                            prev: Some(last),
                        });
                    }
                }
            }
        }

        let mut best: Option<(SetupTime<T>, usize)> = None;
        for last in 0..n {
            if let Some(cell) = dp[full_mask * n + last] {
                let improves = match best {
                    None => true,
                    Some((incumbent, _)) => cell.time < incumbent,
                };
                if improves {
                    best = Some((cell.time, last));
                }
            }
        }
        let (total, mut last) = best.ok_or(ReconstructionError::new())?;

        // Walk the backpointers from the full mask down to the anchor.
        let mut order = Vec::with_capacity(n);
        let mut mask = full_mask;
        loop {
            order.push(last);
            let cell = match dp[mask * n + last] {
                Some(cell) => cell,
                None => return Err(ReconstructionError::new().into()),
            };
            match cell.prev {
                Some(prev) => {
                    mask ^= 1 << last;
                    last = prev;
                }
                None => break,
            }
        }
        if order.len() != n {
            return Err(ReconstructionError::new().into());
        }
        order.reverse();

        Ok(OptimalResult::new(table.resolve(&order), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::brute_force::BruteForceSolver;
    use changeover_model::problem::{
        builder::ProblemBuilder,
        equipment::{Equipment, EquipmentCode},
        prob::Problem,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

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

    fn random_complete_problem(n: usize, rng: &mut ChaCha8Rng) -> Problem<i64> {
        let codes: Vec<String> = (0..n).map(|i| format!("M{i:02}")).collect();
        let mut b = ProblemBuilder::new();
        b.extend_equipment(codes.iter().map(|c| Equipment::new(code(c))));
        for f in &codes {
            for t in &codes {
                if f != t {
                    b.add_transition(code(f), code(t), st(rng.gen_range(1..=100)));
                }
            }
        }
        b.build().unwrap()
    }

    #[test]
    fn test_trivial_sizes_cost_zero() {
        let empty = TransitionTable::from_problem(&problem(&[], &[]));
        let r = HeldKarpSolver::new().solve(&empty).unwrap();
        assert!(r.sequence().is_empty());
        assert_eq!(r.total_time(), st(0));

        let single = TransitionTable::from_problem(&problem(&["A"], &[]));
        let r = HeldKarpSolver::new().solve(&single).unwrap();
        assert_eq!(r.sequence(), &[code("A")]);
        assert_eq!(r.total_time(), st(0));
    }

    #[test]
    fn test_finds_minimum_over_four_equipment() {
        let p = problem(
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
        );
        let table = TransitionTable::from_problem(&p);
        let r = HeldKarpSolver::new().solve(&table).unwrap();
        assert_eq!(r.total_time(), st(50));
        assert_eq!(r.sequence().len(), 4);
    }

    #[test]
    fn test_missing_transition_fails_fast() {
        let p = problem(&["A", "B"], &[("A", "B", 10)]);
        let table = TransitionTable::from_problem(&p);
        let err = HeldKarpSolver::new().solve(&table).unwrap_err();
        assert!(matches!(err, SolverError::TransitionNotFound(_)));
    }

    #[test]
    fn test_single_missing_pair_fails_the_whole_solve() {
        // Four equipment but no A -> D entry: the DP hits the hole while
        // expanding states and surfaces it, same as exhaustive search.
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
        let err = HeldKarpSolver::new().solve(&table).unwrap_err();
        match err {
            SolverError::TransitionNotFound(e) => {
                assert_eq!(e.from_code(), &code("A"));
                assert_eq!(e.to_code(), &code("D"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[should_panic(expected = "bitmask state space overflow")]
    fn test_equipment_count_beyond_mask_width_is_rejected() {
        let mut b = ProblemBuilder::<i64>::new();
        b.extend_equipment((0..64).map(|i| Equipment::new(code(&format!("M{i:02}")))));
        let table = TransitionTable::from_problem(&b.build().unwrap());
        let _ = HeldKarpSolver::new().solve(&table);
    }

    #[test]
    fn test_sequence_is_a_permutation_of_the_codes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let p = random_complete_problem(9, &mut rng);
        let table = TransitionTable::from_problem(&p);
        let r = HeldKarpSolver::new().solve(&table).unwrap();

        let mut seen: Vec<_> = r.sequence().to_vec();
        seen.sort();
        let mut expected: Vec<_> = table.codes().to_vec();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_matches_brute_force_on_random_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in 2..=8 {
            for _ in 0..4 {
                let p = random_complete_problem(n, &mut rng);
                let table = TransitionTable::from_problem(&p);
                let exhaustive = BruteForceSolver::new().solve(&table).unwrap();
                let dp = HeldKarpSolver::new().solve(&table).unwrap();
                assert_eq!(dp.total_time(), exhaustive.total_time(), "n = {n}");
            }
        }
    }

    #[test]
    fn test_reported_total_matches_its_own_sequence() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let p = random_complete_problem(10, &mut rng);
        let table = TransitionTable::from_problem(&p);
        let r = HeldKarpSolver::new().solve(&table).unwrap();

        let recomputed =
            crate::eval::evaluate_sequence(r.sequence(), p.matrix()).unwrap();
        assert_eq!(recomputed, r.total_time());
    }
}
