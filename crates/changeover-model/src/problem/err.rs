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

use crate::problem::equipment::EquipmentCode;
use std::num::ParseIntError;

/// A required pairwise setup-time entry is absent.
///
/// Never defaulted to zero; a zero default would corrupt optimization
/// results silently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionNotFoundError {
    from: EquipmentCode,
    to: EquipmentCode,
}

impl TransitionNotFoundError {
    #[inline]
    pub fn new(from: EquipmentCode, to: EquipmentCode) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn from_code(&self) -> &EquipmentCode {
        &self.from
    }

    #[inline]
    pub fn to_code(&self) -> &EquipmentCode {
        &self.to
    }
}

impl std::fmt::Display for TransitionNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Setup time not found for transition: {} -> {}",
            self.from, self.to
        )
    }
}

impl std::error::Error for TransitionNotFoundError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyProblemError;

impl EmptyProblemError {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for EmptyProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The problem contains no equipment.")
    }
}

impl std::error::Error for EmptyProblemError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownEquipmentError {
    code: EquipmentCode,
}

impl UnknownEquipmentError {
    #[inline]
    pub fn new(code: EquipmentCode) -> Self {
        Self { code }
    }

    #[inline]
    pub fn code(&self) -> &EquipmentCode {
        &self.code
    }
}

impl std::fmt::Display for UnknownEquipmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Equipment {} is not part of the problem", self.code)
    }
}

impl std::error::Error for UnknownEquipmentError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProblemError {
    UnknownEquipment(UnknownEquipmentError),
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::UnknownEquipment(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemError {}

impl From<UnknownEquipmentError> for ProblemError {
    fn from(err: UnknownEquipmentError) -> Self {
        ProblemError::UnknownEquipment(err)
    }
}

#[derive(Debug)]
pub enum ProblemLoaderError {
    Io(std::io::Error),
    ParseInt(ParseIntError),
    InvalidCount(i64),
    UnexpectedEof,
    DuplicateCode(EquipmentCode),
    Problem(ProblemError),
}

impl From<std::io::Error> for ProblemLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseIntError> for ProblemLoaderError {
    fn from(e: ParseIntError) -> Self {
        Self::ParseInt(e)
    }
}

impl From<ProblemError> for ProblemLoaderError {
    fn from(e: ProblemError) -> Self {
        Self::Problem(e)
    }
}

impl std::fmt::Display for ProblemLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ProblemLoaderError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            ParseInt(e) => write!(f, "parse-int error: {e}"),
            InvalidCount(c) => write!(f, "invalid equipment count: {c}"),
            UnexpectedEof => write!(f, "unexpected end of file while parsing instance"),
            DuplicateCode(c) => write!(f, "equipment code {c} appears more than once"),
            Problem(e) => write!(f, "problem error: {e}"),
        }
    }
}

impl std::error::Error for ProblemLoaderError {}
