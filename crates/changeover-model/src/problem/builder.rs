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
    err::{ProblemError, UnknownEquipmentError},
    matrix::SetupMatrix,
    prob::Problem,
};
use changeover_core::prelude::SetupTime;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct ProblemBuilder<T> {
    equipment: BTreeMap<EquipmentCode, Equipment>,
    transitions: Vec<(EquipmentCode, EquipmentCode, SetupTime<T>)>,
}

impl<T: Copy> Default for ProblemBuilder<T> {
    fn default() -> Self {
        Self {
            equipment: BTreeMap::new(),
            transitions: Vec::new(),
        }
    }
}

impl<T: Copy> ProblemBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_equipment<I>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = Equipment>,
    {
        self.equipment.clear();
        self.equipment
            .extend(equipment.into_iter().map(|e| (e.code().clone(), e)));
        self
    }

    #[inline]
    pub fn with_transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (EquipmentCode, EquipmentCode, SetupTime<T>)>,
    {
        self.transitions.clear();
        self.transitions.extend(transitions);
        self
    }

    #[inline]
    pub fn add_equipment(&mut self, equipment: Equipment) -> &mut Self {
        self.equipment
            .insert(equipment.code().clone(), equipment);
        self
    }

    #[inline]
    pub fn extend_equipment<I>(&mut self, equipment: I) -> &mut Self
    where
        I: IntoIterator<Item = Equipment>,
    {
        self.equipment
            .extend(equipment.into_iter().map(|e| (e.code().clone(), e)));
        self
    }

    #[inline]
    pub fn add_transition(
        &mut self,
        from: EquipmentCode,
        to: EquipmentCode,
        time: SetupTime<T>,
    ) -> &mut Self {
        self.transitions.push((from, to, time));
        self
    }

    #[inline]
    pub fn extend_transitions<I>(&mut self, transitions: I) -> &mut Self
    where
        I: IntoIterator<Item = (EquipmentCode, EquipmentCode, SetupTime<T>)>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Builds the problem. Every transition endpoint must name equipment
    /// that was added; later duplicate entries win.
    pub fn build(self) -> Result<Problem<T>, ProblemError> {
        let mut matrix = SetupMatrix::with_capacity(self.equipment.len());
        for (from, to, time) in self.transitions {
            if !self.equipment.contains_key(&from) {
                return Err(UnknownEquipmentError::new(from).into());
            }
            if !self.equipment.contains_key(&to) {
                return Err(UnknownEquipmentError::new(to).into());
            }
            matrix.insert(from, to, time);
        }
        Ok(Problem::new(self.equipment, matrix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn code(c: &str) -> EquipmentCode {
        EquipmentCode::new(c)
    }

    #[inline]
    fn st(v: i64) -> SetupTime<i64> {
        SetupTime::new(v)
    }

    #[test]
    fn test_build_empty_problem() {
        let p = ProblemBuilder::<i64>::new().build().unwrap();
        assert!(p.is_empty());
        assert!(p.matrix().is_empty());
    }

    #[test]
    fn test_build_with_transitions() {
        let mut b = ProblemBuilder::new();
        b.extend_equipment([Equipment::new(code("A")), Equipment::new(code("B"))]);
        b.add_transition(code("A"), code("B"), st(10));
        b.add_transition(code("B"), code("A"), st(20));
        let p = b.build().unwrap();
        assert_eq!(p.equipment_len(), 2);
        assert_eq!(p.matrix().len(), 2);
        assert_eq!(p.transition_cost(&code("A"), &code("B")).unwrap(), st(10));
    }

    #[test]
    fn test_unknown_transition_endpoint_is_rejected() {
        let mut b = ProblemBuilder::new();
        b.add_equipment(Equipment::new(code("A")));
        b.add_transition(code("A"), code("Z"), st(5));
        let err = b.build().unwrap_err();
        let ProblemError::UnknownEquipment(e) = err;
        assert_eq!(e.code(), &code("Z"));
    }

    #[test]
    fn test_later_duplicate_entry_wins() {
        let mut b = ProblemBuilder::new();
        b.extend_equipment([Equipment::new(code("A")), Equipment::new(code("B"))]);
        b.add_transition(code("A"), code("B"), st(10));
        b.add_transition(code("A"), code("B"), st(42));
        let p = b.build().unwrap();
        assert_eq!(p.transition_cost(&code("A"), &code("B")).unwrap(), st(42));
    }

    #[test]
    fn test_with_equipment_replaces_previous() {
        let b = ProblemBuilder::<i64>::new()
            .with_equipment([Equipment::new(code("A"))])
            .with_equipment([Equipment::new(code("B"))]);
        let p = b.build().unwrap();
        let codes: Vec<_> = p.equipment_codes().cloned().collect();
        assert_eq!(codes, vec![code("B")]);
    }
}
