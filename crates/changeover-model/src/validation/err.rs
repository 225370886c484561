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

use crate::problem::{equipment::EquipmentCode, err::UnknownEquipmentError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateEquipmentError {
    code: EquipmentCode,
}

impl DuplicateEquipmentError {
    #[inline]
    pub fn new(code: EquipmentCode) -> Self {
        Self { code }
    }

    #[inline]
    pub fn code(&self) -> &EquipmentCode {
        &self.code
    }
}

impl std::fmt::Display for DuplicateEquipmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Equipment {} appears more than once in the sequence",
            self.code
        )
    }
}

impl std::error::Error for DuplicateEquipmentError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncompleteSequenceError {
    expected: usize,
    actual: usize,
}

impl IncompleteSequenceError {
    #[inline]
    pub fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }

    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    #[inline]
    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl std::fmt::Display for IncompleteSequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sequence covers {} of {} equipment",
            self.actual, self.expected
        )
    }
}

impl std::error::Error for IncompleteSequenceError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationError {
    UnknownEquipment(UnknownEquipmentError),
    Duplicate(DuplicateEquipmentError),
    Incomplete(IncompleteSequenceError),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::UnknownEquipment(e) => write!(f, "{}", e),
            ValidationError::Duplicate(e) => write!(f, "{}", e),
            ValidationError::Incomplete(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<UnknownEquipmentError> for ValidationError {
    fn from(err: UnknownEquipmentError) -> Self {
        ValidationError::UnknownEquipment(err)
    }
}

impl From<DuplicateEquipmentError> for ValidationError {
    fn from(err: DuplicateEquipmentError) -> Self {
        ValidationError::Duplicate(err)
    }
}

impl From<IncompleteSequenceError> for ValidationError {
    fn from(err: IncompleteSequenceError) -> Self {
        ValidationError::Incomplete(err)
    }
}
