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
    equipment::EquipmentCode, err::TransitionNotFoundError, prob::Problem,
};

/// Dense index-addressed view of a problem's setup-time matrix.
///
/// Built once per optimization request so that the solvers' inner loops do
/// flat-slice reads instead of hash lookups. Index `i` corresponds to the
/// problem's `i`-th code in lexicographic order.
#[derive(Debug, Clone)]
pub struct TransitionTable<T> {
    codes: Vec<EquipmentCode>,
    entries: Vec<Option<SetupTime<T>>>,
}

impl<T: Copy> TransitionTable<T> {
    pub fn from_problem(problem: &Problem<T>) -> Self {
        let codes: Vec<EquipmentCode> = problem.equipment_codes().cloned().collect();
        let n = codes.len();

        let mut entries = vec![None; n * n];
        for (i, from) in codes.iter().enumerate() {
            for (j, to) in codes.iter().enumerate() {
                if i != j {
                    entries[i * n + j] = problem.matrix().get(from, to);
                }
            }
        }

        Self { codes, entries }
    }

    /// Number of equipment nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    pub fn codes(&self) -> &[EquipmentCode] {
        &self.codes
    }

    #[inline]
    pub fn code(&self, index: usize) -> &EquipmentCode {
        &self.codes[index]
    }

    #[inline]
    pub fn index_of(&self, code: &EquipmentCode) -> Option<usize> {
        self.codes.iter().position(|c| c == code)
    }

    #[inline(always)]
    fn flat_index(&self, from: usize, to: usize) -> usize {
        debug_assert!(from < self.codes.len());
        debug_assert!(to < self.codes.len());

        from * self.codes.len() + to
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Option<SetupTime<T>> {
        self.entries[self.flat_index(from, to)]
    }

    /// Fallible lookup naming the offending pair on a missing entry.
    #[inline]
    pub fn setup_time(&self, from: usize, to: usize) -> Result<SetupTime<T>, TransitionNotFoundError> {
        self.get(from, to).ok_or_else(|| {
            TransitionNotFoundError::new(self.codes[from].clone(), self.codes[to].clone())
        })
    }

    /// Maps an index ordering back to equipment codes.
    #[inline]
    pub fn resolve(&self, order: &[usize]) -> Vec<EquipmentCode> {
        order.iter().map(|&i| self.codes[i].clone()).collect()
    }
}
