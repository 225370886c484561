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

use crate::problem::{
    equipment::{Equipment, EquipmentCode},
    err::TransitionNotFoundError,
    matrix::SetupMatrix,
};
use changeover_core::prelude::SetupTime;
use std::collections::BTreeMap;

/// One fixed changeover problem instance: a set of equipment plus the
/// directed setup-time matrix over it. Immutable once built.
#[derive(Debug, Clone)]
pub struct Problem<T> {
    equipment: BTreeMap<EquipmentCode, Equipment>,
    matrix: SetupMatrix<T>,
}

impl<T: Copy> Problem<T> {
    #[inline]
    pub(crate) fn new(
        equipment: BTreeMap<EquipmentCode, Equipment>,
        matrix: SetupMatrix<T>,
    ) -> Self {
        Self { equipment, matrix }
    }

    #[inline]
    pub fn equipment_len(&self) -> usize {
        self.equipment.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }

    /// Equipment in stable lexicographic code order.
    #[inline]
    pub fn equipment(&self) -> impl Iterator<Item = &Equipment> {
        self.equipment.values()
    }

    /// Codes in stable lexicographic order.
    #[inline]
    pub fn equipment_codes(&self) -> impl Iterator<Item = &EquipmentCode> {
        self.equipment.keys()
    }

    #[inline]
    pub fn get(&self, code: &EquipmentCode) -> Option<&Equipment> {
        self.equipment.get(code)
    }

    #[inline]
    pub fn contains(&self, code: &EquipmentCode) -> bool {
        self.equipment.contains_key(code)
    }

    #[inline]
    pub fn matrix(&self) -> &SetupMatrix<T> {
        &self.matrix
    }

    /// Single-pair lookup, used outside the hot optimization path.
    #[inline]
    pub fn transition_cost(
        &self,
        from: &EquipmentCode,
        to: &EquipmentCode,
    ) -> Result<SetupTime<T>, TransitionNotFoundError> {
        self.matrix.lookup(from, to)
    }
}
