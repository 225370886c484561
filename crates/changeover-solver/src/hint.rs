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

use changeover_core::prelude::SetupTime;
use changeover_model::problem::{
    equipment::{Equipment, EquipmentCode},
    prob::Problem,
};

/// How much a hint reveals about the next placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintLevel {
    /// A shortlist of the two cheapest next placements.
    Shortlist,
    /// Only the single cheapest next placement.
    BestNext,
    /// The full setup matrix; no candidate list is truncated.
    FullMatrix,
}

impl HintLevel {
    /// Number of candidates revealed at this level, unbounded for
    /// [`HintLevel::FullMatrix`].
    #[inline]
    pub fn candidate_limit(&self) -> Option<usize> {
        match self {
            HintLevel::Shortlist => Some(2),
            HintLevel::BestNext => Some(1),
            HintLevel::FullMatrix => None,
        }
    }
}

/// Ranks the remaining equipment as candidates for the next placement.
///
/// With a last-placed equipment, candidates are ordered by ascending
/// transition cost from it; pool order breaks ties, and pool entries with
/// no defined transition are dropped. Without one the pool is simply
/// ordered by code. Codes the problem does not know are skipped, not
/// errors. The level's candidate limit truncates the result.
pub fn next_candidates<T: Copy + Ord>(
    problem: &Problem<T>,
    last_placed: Option<&EquipmentCode>,
    available: &[EquipmentCode],
    level: HintLevel,
) -> Vec<Equipment> {
    let mut candidates: Vec<Equipment> = match last_placed {
        None => {
            let mut pool: Vec<Equipment> = available
                .iter()
                .filter_map(|c| problem.get(c).cloned())
                .collect();
            pool.sort_by(|a, b| a.code().cmp(b.code()));
            pool
        }
        Some(last) => {
            let mut scored: Vec<(SetupTime<T>, Equipment)> = available
                .iter()
                .filter_map(|c| {
                    let eq = problem.get(c)?;
                    let cost = problem.matrix().get(last, c)?;
                    Some((cost, eq.clone()))
                })
                .collect();
            // Stable sort keeps pool order on equal costs.
            scored.sort_by(|a, b| a.0.cmp(&b.0));
            scored.into_iter().map(|(_, eq)| eq).collect()
        }
    };

    if let Some(limit) = level.candidate_limit() {
        candidates.truncate(limit);
    }
    candidates
}
