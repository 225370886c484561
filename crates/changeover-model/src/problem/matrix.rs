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

use crate::problem::{equipment::EquipmentCode, err::TransitionNotFoundError};
use changeover_core::prelude::SetupTime;
use std::collections::HashMap;

/// Directed pairwise setup-time matrix.
///
/// `cost(A -> B)` and `cost(B -> A)` are independent entries. Entries are
/// loaded eagerly and the matrix is read-only once the problem is built.
#[repr(transparent)]
#[derive(Debug, Clone)]
pub struct SetupMatrix<T>(HashMap<EquipmentCode, HashMap<EquipmentCode, SetupTime<T>>>);

impl<T: Copy> SetupMatrix<T> {
    #[inline]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self(HashMap::with_capacity(cap))
    }

    #[inline]
    pub fn insert(
        &mut self,
        from: EquipmentCode,
        to: EquipmentCode,
        time: SetupTime<T>,
    ) -> Option<SetupTime<T>> {
        self.0.entry(from).or_default().insert(to, time)
    }

    #[inline]
    pub fn get(&self, from: &EquipmentCode, to: &EquipmentCode) -> Option<SetupTime<T>> {
        self.0.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Fallible lookup; a missing entry is an error, never a zero default.
    #[inline]
    pub fn lookup(
        &self,
        from: &EquipmentCode,
        to: &EquipmentCode,
    ) -> Result<SetupTime<T>, TransitionNotFoundError> {
        self.get(from, to)
            .ok_or_else(|| TransitionNotFoundError::new(from.clone(), to.clone()))
    }

    #[inline]
    pub fn contains(&self, from: &EquipmentCode, to: &EquipmentCode) -> bool {
        self.get(from, to).is_some()
    }

    /// Number of directed entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.values().map(|row| row.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|row| row.is_empty())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&EquipmentCode, &EquipmentCode, SetupTime<T>)> {
        self.0
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(to, t)| (from, to, *t)))
    }
}

impl<T: Copy> Default for SetupMatrix<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
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

    fn sample() -> SetupMatrix<i64> {
        let mut m = SetupMatrix::new();
        m.insert(code("A"), code("B"), st(10));
        m.insert(code("B"), code("A"), st(20));
        m
    }

    #[test]
    fn test_insert_and_get_is_directional() {
        let m = sample();
        assert_eq!(m.get(&code("A"), &code("B")), Some(st(10)));
        assert_eq!(m.get(&code("B"), &code("A")), Some(st(20)));
    }

    #[test]
    fn test_insert_overwrites_and_returns_previous() {
        let mut m = sample();
        let prev = m.insert(code("A"), code("B"), st(99));
        assert_eq!(prev, Some(st(10)));
        assert_eq!(m.get(&code("A"), &code("B")), Some(st(99)));
    }

    #[test]
    fn test_lookup_missing_entry_names_the_pair() {
        let m = sample();
        let err = m.lookup(&code("A"), &code("E")).unwrap_err();
        assert_eq!(err.from_code(), &code("A"));
        assert_eq!(err.to_code(), &code("E"));
        assert_eq!(
            err.to_string(),
            "Setup time not found for transition: A -> E"
        );
    }

    #[test]
    fn test_len_counts_directed_entries() {
        let m = sample();
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
        assert!(SetupMatrix::<i64>::new().is_empty());
    }

    #[test]
    fn test_iter_yields_every_entry_once() {
        let m = sample();
        let mut seen: Vec<_> = m
            .iter()
            .map(|(f, t, v)| (f.clone(), t.clone(), v))
            .collect();
        seen.sort();
        assert_eq!(
            seen,
            vec![
                (code("A"), code("B"), st(10)),
                (code("B"), code("A"), st(20)),
            ]
        );
    }
}
