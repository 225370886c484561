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

use num_traits::{CheckedAdd, CheckedSub, SaturatingAdd, Zero};
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

pub trait MarkerName {
    const NAME: &'static str;
}

/// A duration-like quantity tagged with a phantom unit marker.
///
/// The marker keeps quantities of different units from being mixed up at
/// compile time while the representation stays a bare `T`.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Delta<T, U>(T, core::marker::PhantomData<U>);

impl<T, U> Delta<T, U> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Delta(value, core::marker::PhantomData)
    }

    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Delta::new(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn is_positive(&self) -> bool
    where
        T: Zero + PartialOrd,
    {
        self.0 > T::zero()
    }
}

impl<T: std::fmt::Display, U: MarkerName> std::fmt::Display for Delta<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME, self.0)
    }
}

impl<T, U> Zero for Delta<T, U>
where
    T: Zero + CheckedAdd,
{
    #[inline]
    fn zero() -> Self {
        Delta::new(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T, U> Default for Delta<T, U>
where
    T: Zero,
{
    #[inline]
    fn default() -> Self {
        Delta::new(T::zero())
    }
}

impl<T, U> From<T> for Delta<T, U> {
    #[inline]
    fn from(v: T) -> Self {
        Delta::new(v)
    }
}

impl<T, U> Add for Delta<T, U>
where
    T: CheckedAdd,
{
    type Output = Delta<T, U>;

    fn add(self, rhs: Self) -> Self::Output {
        Delta::new(self.0.checked_add(&rhs.0).expect("error in Delta + Delta"))
    }
}

impl<T, U> AddAssign for Delta<T, U>
where
    T: CheckedAdd,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.checked_add(&rhs.0).expect("error in Delta += Delta");
    }
}

impl<T, U> CheckedAdd for Delta<T, U>
where
    T: CheckedAdd,
{
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(Delta::new)
    }
}

impl<T, U> SaturatingAdd for Delta<T, U>
where
    T: SaturatingAdd + CheckedAdd,
{
    fn saturating_add(&self, rhs: &Self) -> Self {
        Delta::new(self.0.saturating_add(&rhs.0))
    }
}

impl<T, U> Sub for Delta<T, U>
where
    T: CheckedSub,
{
    type Output = Delta<T, U>;

    fn sub(self, rhs: Self) -> Self::Output {
        Delta::new(self.0.checked_sub(&rhs.0).expect("error in Delta - Delta"))
    }
}

impl<T, U> SubAssign for Delta<T, U>
where
    T: CheckedSub,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.checked_sub(&rhs.0).expect("error in Delta -= Delta");
    }
}

impl<T, U> Sum for Delta<T, U>
where
    T: Zero + CheckedAdd,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, T, U> Sum<&'a Delta<T, U>> for Delta<T, U>
where
    T: Zero + CheckedAdd + Copy,
    U: Copy,
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
