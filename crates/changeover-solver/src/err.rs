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

use changeover_model::problem::err::{EmptyProblemError, TransitionNotFoundError};

/// The Held-Karp backpointer walk failed to rebuild a full sequence.
///
/// Unreachable with a fully populated matrix; kept as a checked invariant
/// rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReconstructionError;

impl ReconstructionError {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for ReconstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to reconstruct the optimal sequence")
    }
}

impl std::error::Error for ReconstructionError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SolverError {
    TransitionNotFound(TransitionNotFoundError),
    EmptyProblem(EmptyProblemError),
    Reconstruction(ReconstructionError),
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::TransitionNotFound(e) => write!(f, "{}", e),
            SolverError::EmptyProblem(e) => write!(f, "{}", e),
            SolverError::Reconstruction(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<TransitionNotFoundError> for SolverError {
    fn from(err: TransitionNotFoundError) -> Self {
        SolverError::TransitionNotFound(err)
    }
}

impl From<EmptyProblemError> for SolverError {
    fn from(err: EmptyProblemError) -> Self {
        SolverError::EmptyProblem(err)
    }
}

impl From<ReconstructionError> for SolverError {
    fn from(err: ReconstructionError) -> Self {
        SolverError::Reconstruction(err)
    }
}
