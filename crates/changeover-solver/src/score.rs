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
use num_traits::ToPrimitive;

/// Score reduction per hint taken, as a fraction of the raw score.
pub const DEFAULT_HINT_PENALTY: f64 = 0.05;

/// Letter grade for a scored attempt.
///
/// Each band is inclusive on its lower bound; `S` is reserved for a
/// perfect 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    S,
    A,
    B,
    C,
    D,
}

impl Rank {
    pub fn from_score(score: f64) -> Self {
        if score >= 100.0 {
            Rank::S
        } else if score >= 95.0 {
            Rank::A
        } else if score >= 85.0 {
            Rank::B
        } else if score >= 75.0 {
            Rank::C
        } else {
            Rank::D
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        };
        write!(f, "{}", s)
    }
}

/// How close a user's total came to the optimum, on a 0..=100 scale.
///
/// Degenerate inputs (either total non-positive) score 0 rather than
/// erroring. The ratio is rounded to two decimals before capping at 100,
/// so a user total below the optimum still reads as a perfect score.
pub fn score(user_total: f64, optimal_total: f64) -> f64 {
    if user_total <= 0.0 || optimal_total <= 0.0 {
        return 0.0;
    }
    let pct = optimal_total / user_total * 100.0;
    ((pct * 100.0).round() / 100.0).min(100.0)
}

/// Scales a score down by `per_hint` for each hint taken.
///
/// No floor: enough hints push the score negative, which the rank bands
/// map to `D`.
pub fn apply_hint_penalty(score: f64, hints_used: u32, per_hint: f64) -> f64 {
    score * (1.0 - per_hint * f64::from(hints_used))
}

/// Final score and rank for one attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreReport {
    pub score: f64,
    pub rank: Rank,
}

/// Scores a user's total against the optimum, applying the default hint
/// penalty before ranking.
pub fn compute_score<T: Copy + ToPrimitive>(
    user_total: SetupTime<T>,
    optimal_total: SetupTime<T>,
    hints_used: u32,
) -> ScoreReport {
    let user = user_total.value().to_f64().unwrap_or(0.0);
    let optimal = optimal_total.value().to_f64().unwrap_or(0.0);

    let raw = score(user, optimal);
    let penalized = apply_hint_penalty(raw, hints_used, DEFAULT_HINT_PENALTY);
    ScoreReport {
        score: penalized,
        rank: Rank::from_score(penalized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_totals_score_perfect() {
        assert_eq!(score(50.0, 50.0), 100.0);
        assert_eq!(score(1.0, 1.0), 100.0);
    }

    #[test]
    fn test_degenerate_inputs_score_zero() {
        assert_eq!(score(0.0, 50.0), 0.0);
        assert_eq!(score(50.0, 0.0), 0.0);
        assert_eq!(score(-1.0, 50.0), 0.0);
        assert_eq!(score(50.0, -1.0), 0.0);
    }

    #[test]
    fn test_two_decimal_rounding() {
        // 65 / 85 * 100 = 76.470588...
        assert_eq!(score(85.0, 65.0), 76.47);
        // 50 / 75 * 100 = 66.666... rounds up.
        assert_eq!(score(75.0, 50.0), 66.67);
    }

    #[test]
    fn test_capped_at_one_hundred() {
        // A user total below the optimum cannot exceed a perfect score.
        assert_eq!(score(40.0, 50.0), 100.0);
    }

    #[test]
    fn test_strictly_decreasing_past_the_optimum() {
        let a = score(51.0, 50.0);
        let b = score(60.0, 50.0);
        let c = score(100.0, 50.0);
        assert!(100.0 > a && a > b && b > c);
    }

    #[test]
    fn test_rank_band_boundaries() {
        assert_eq!(Rank::from_score(100.0), Rank::S);
        assert_eq!(Rank::from_score(99.99), Rank::A);
        assert_eq!(Rank::from_score(95.0), Rank::A);
        assert_eq!(Rank::from_score(94.99), Rank::B);
        assert_eq!(Rank::from_score(85.0), Rank::B);
        assert_eq!(Rank::from_score(84.99), Rank::C);
        assert_eq!(Rank::from_score(75.0), Rank::C);
        assert_eq!(Rank::from_score(74.99), Rank::D);
        assert_eq!(Rank::from_score(0.0), Rank::D);
    }

    #[test]
    fn test_hint_penalty_scales_linearly() {
        assert_eq!(apply_hint_penalty(100.0, 0, DEFAULT_HINT_PENALTY), 100.0);
        assert_eq!(apply_hint_penalty(100.0, 1, DEFAULT_HINT_PENALTY), 95.0);
        assert_eq!(apply_hint_penalty(100.0, 2, DEFAULT_HINT_PENALTY), 90.0);
        assert_eq!(apply_hint_penalty(80.0, 2, DEFAULT_HINT_PENALTY), 72.0);
    }

    #[test]
    fn test_hint_penalty_has_no_floor() {
        let s = apply_hint_penalty(100.0, 21, DEFAULT_HINT_PENALTY);
        assert!(s < 0.0);
        assert_eq!(Rank::from_score(s), Rank::D);
    }

    #[test]
    fn test_compute_score_report() {
        let r = compute_score(SetupTime::new(50_i64), SetupTime::new(50_i64), 0);
        assert_eq!(r.score, 100.0);
        assert_eq!(r.rank, Rank::S);

        let r = compute_score(SetupTime::new(85_i64), SetupTime::new(65_i64), 0);
        assert_eq!(r.score, 76.47);
        assert_eq!(r.rank, Rank::C);

        let r = compute_score(SetupTime::new(50_i64), SetupTime::new(50_i64), 1);
        assert_eq!(r.score, 95.0);
        assert_eq!(r.rank, Rank::A);
    }
}
