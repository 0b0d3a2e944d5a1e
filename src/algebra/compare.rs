//! Elementwise Comparison
//!
//! Each comparison yields a `bool` coordinate over the left operand's keys.
//! Whole-coordinate equality is `==`; these are per-key.

use super::elementwise::Operand;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::space::KeySpace;

impl<V: Copy + PartialOrd, S: KeySpace> Coordinate<V, S> {
    /// Per-key `<`
    pub fn cmp_lt<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Coordinate<bool, S>>
    where
        V: 'a,
    {
        self.zip_with(rhs.into(), |l, r| l < r)
    }

    /// Per-key `<=`
    pub fn cmp_le<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Coordinate<bool, S>>
    where
        V: 'a,
    {
        self.zip_with(rhs.into(), |l, r| l <= r)
    }

    /// Per-key `>`
    pub fn cmp_gt<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Coordinate<bool, S>>
    where
        V: 'a,
    {
        self.zip_with(rhs.into(), |l, r| l > r)
    }

    /// Per-key `>=`
    pub fn cmp_ge<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Coordinate<bool, S>>
    where
        V: 'a,
    {
        self.zip_with(rhs.into(), |l, r| l >= r)
    }

    /// Per-key `==`
    pub fn cmp_eq<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Coordinate<bool, S>>
    where
        V: 'a,
    {
        self.zip_with(rhs.into(), |l, r| l == r)
    }

    /// Per-key `!=`
    pub fn cmp_ne<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Coordinate<bool, S>>
    where
        V: 'a,
    {
        self.zip_with(rhs.into(), |l, r| l != r)
    }
}

impl<S: KeySpace> Coordinate<bool, S> {
    /// Whether every value is `true`; vacuously true when empty
    pub fn all(&self) -> bool {
        self.iter().all(|(_, &v)| v)
    }

    /// Whether any value is `true`
    pub fn any(&self) -> bool {
        self.iter().any(|(_, &v)| v)
    }
}
