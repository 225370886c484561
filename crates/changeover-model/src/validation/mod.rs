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

pub mod err;

use crate::{
    problem::{equipment::EquipmentCode, err::UnknownEquipmentError, prob::Problem},
    validation::err::{DuplicateEquipmentError, IncompleteSequenceError, ValidationError},
};
use std::collections::BTreeSet;

/// Checks user-submitted orderings against a problem instance.
#[derive(Debug, Clone)]
pub struct SequenceValidator;

impl SequenceValidator {
    #[inline]
    pub fn validate_known<T: Copy>(
        problem: &Problem<T>,
        sequence: &[EquipmentCode],
    ) -> Result<(), UnknownEquipmentError> {
        for code in sequence {
            if !problem.contains(code) {
                return Err(UnknownEquipmentError::new(code.clone()));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn validate_no_duplicates(
        sequence: &[EquipmentCode],
    ) -> Result<(), DuplicateEquipmentError> {
        let mut seen: BTreeSet<&EquipmentCode> = BTreeSet::new();
        for code in sequence {
            if !seen.insert(code) {
                return Err(DuplicateEquipmentError::new(code.clone()));
            }
        }
        Ok(())
    }

    /// A prefix placed during interactive play: known codes, no repeats,
    /// but not necessarily complete yet.
    #[inline]
    pub fn validate_prefix<T: Copy>(
        problem: &Problem<T>,
        sequence: &[EquipmentCode],
    ) -> Result<(), ValidationError> {
        Self::validate_known(problem, sequence)?;
        Self::validate_no_duplicates(sequence)?;
        Ok(())
    }

    /// A full submission: a permutation of the problem's equipment.
    #[inline]
    pub fn validate_permutation<T: Copy>(
        problem: &Problem<T>,
        sequence: &[EquipmentCode],
    ) -> Result<(), ValidationError> {
        Self::validate_prefix(problem, sequence)?;
        if sequence.len() != problem.equipment_len() {
            return Err(
                IncompleteSequenceError::new(problem.equipment_len(), sequence.len()).into(),
            );
        }
        Ok(())
    }
}
