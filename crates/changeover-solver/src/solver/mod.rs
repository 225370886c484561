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

pub mod brute_force;
pub mod held_karp;
pub mod selector;

use crate::{err::SolverError, table::TransitionTable};
use changeover_core::prelude::SetupTime;
use changeover_model::problem::equipment::EquipmentCode;
use num_traits::{CheckedAdd, Zero};

/// Minimum-cost full ordering of a problem's equipment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalResult<T> {
    sequence: Vec<EquipmentCode>,
    total_time: SetupTime<T>,
}

impl<T: Copy> OptimalResult<T> {
    #[inline]
    pub fn new(sequence: Vec<EquipmentCode>, total_time: SetupTime<T>) -> Self {
        Self {
            sequence,
            total_time,
        }
    }

    #[inline]
    pub fn sequence(&self) -> &[EquipmentCode] {
        &self.sequence
    }

    #[inline]
    pub fn total_time(&self) -> SetupTime<T> {
        self.total_time
    }

    #[inline]
    pub fn into_parts(self) -> (Vec<EquipmentCode>, SetupTime<T>) {
        (self.sequence, self.total_time)
    }
}

/// An exact solver for the minimum-setup-time Hamiltonian path (free start
/// and end) over a transition table.
pub trait SequenceSolver<T: Copy + Ord + CheckedAdd + Zero> {
    #[inline]
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn solve(&self, table: &TransitionTable<T>) -> Result<OptimalResult<T>, SolverError>;
}
