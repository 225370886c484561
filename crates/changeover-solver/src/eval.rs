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

use crate::table::TransitionTable;
use changeover_core::prelude::SetupTime;
use changeover_model::problem::{
    equipment::EquipmentCode, err::TransitionNotFoundError, matrix::SetupMatrix,
};
use num_traits::{CheckedAdd, Zero};

/// Total setup time of an ordering: the sum of its consecutive transition
/// costs. Sequences of length 0 or 1 cost nothing.
///
/// Fails fast on the first missing matrix entry; no partial total is
/// returned.
pub fn evaluate_sequence<T>(
    sequence: &[EquipmentCode],
    matrix: &SetupMatrix<T>,
) -> Result<SetupTime<T>, TransitionNotFoundError>
where
    T: Copy + Ord + CheckedAdd + Zero,
{
    if sequence.len() <= 1 {
        return Ok(SetupTime::zero());
    }

    let mut total = SetupTime::zero();
    for pair in sequence.windows(2) {
        total = total + matrix.lookup(&pair[0], &pair[1])?;
    }
    Ok(total)
}

/// Index-addressed twin of [`evaluate_sequence`] for the solvers' hot path.
pub(crate) fn evaluate_indexed<T>(
    order: &[usize],
    table: &TransitionTable<T>,
) -> Result<SetupTime<T>, TransitionNotFoundError>
where
    T: Copy + Ord + CheckedAdd + Zero,
{
    if order.len() <= 1 {
        return Ok(SetupTime::zero());
    }

    let mut total = SetupTime::zero();
    for pair in order.windows(2) {
        total = total + table.setup_time(pair[0], pair[1])?;
    }
    Ok(total)
}
