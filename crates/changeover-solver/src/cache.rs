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

use crate::solver::OptimalResult;
use parking_lot::Mutex;

/// Single-slot memo for the optimal result of one fixed problem.
///
/// A cache instance belongs to exactly one problem; callers working on
/// several problems hold one cache each. The slot is guarded by a mutex so
/// concurrent solves stay last-writer-wins instead of tearing.
#[derive(Debug)]
pub struct OptimalCache<T> {
    slot: Mutex<Option<OptimalResult<T>>>,
}

impl<T> OptimalCache<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    #[inline]
    pub fn set(&self, result: OptimalResult<T>) {
        *self.slot.lock() = Some(result);
    }

    /// Drops the memoized result, forcing the next solve to recompute.
    #[inline]
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }

    #[inline]
    pub fn is_populated(&self) -> bool {
        self.slot.lock().is_some()
    }
}

impl<T: Clone> OptimalCache<T> {
    /// Clone of the memoized result, if one has been stored.
    #[inline]
    pub fn get(&self) -> Option<OptimalResult<T>> {
        self.slot.lock().clone()
    }
}

impl<T> Default for OptimalCache<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changeover_core::prelude::SetupTime;
    use changeover_model::problem::equipment::EquipmentCode;

    fn result(total: i64) -> OptimalResult<i64> {
        OptimalResult::new(
            vec![EquipmentCode::new("A"), EquipmentCode::new("B")],
            SetupTime::new(total),
        )
    }

    #[test]
    fn test_starts_empty() {
        let cache = OptimalCache::<i64>::new();
        assert!(!cache.is_populated());
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_set_get_clear() {
        let cache = OptimalCache::new();
        cache.set(result(50));
        assert!(cache.is_populated());
        assert_eq!(cache.get(), Some(result(50)));

        cache.clear();
        assert!(!cache.is_populated());
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_last_writer_wins() {
        let cache = OptimalCache::new();
        cache.set(result(50));
        cache.set(result(40));
        assert_eq!(cache.get(), Some(result(40)));
    }
}
