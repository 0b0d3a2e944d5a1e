//! Elementwise Arithmetic
//!
//! Binary operations take an [`Operand`]: either another coordinate with
//! exactly the same key set, or a scalar applied to every value. Results
//! keep the left operand's key set, native order and explicit order.

use crate::coordinate::{Coordinate, Store};
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::space::KeySpace;

/// Right-hand side of an elementwise operation
#[derive(Debug)]
pub enum Operand<'a, V, S: KeySpace> {
    /// Pair values key by key
    Coordinate(&'a Coordinate<V, S>),
    /// Apply the same value to every key
    Scalar(V),
}

impl<'a, V, S: KeySpace> From<&'a Coordinate<V, S>> for Operand<'a, V, S> {
    fn from(coordinate: &'a Coordinate<V, S>) -> Self {
        Operand::Coordinate(coordinate)
    }
}

impl<V: Scalar, S: KeySpace> From<V> for Operand<'_, V, S> {
    fn from(value: V) -> Self {
        Operand::Scalar(value)
    }
}

impl<V: Copy, S: KeySpace> Coordinate<V, S> {
    /// Combine with `rhs` value by value
    pub(crate) fn zip_with<U, F>(&self, rhs: Operand<'_, V, S>, mut f: F) -> Result<Coordinate<U, S>>
    where
        F: FnMut(V, V) -> U,
    {
        let store: Store<U> = match rhs {
            Operand::Scalar(r) => self.iter().map(|(k, &l)| (k.to_owned(), f(l, r))).collect(),
            Operand::Coordinate(other) => {
                if !self.same_keys(other) {
                    return Err(Error::key_set_mismatch(
                        self.native_keys(),
                        other.native_keys(),
                    ));
                }
                self.iter()
                    .filter_map(|(k, &l)| other.get(k).map(|&r| (k.to_owned(), f(l, r))))
                    .collect()
            }
        };
        Ok(Coordinate::from_store(store, self.explicit_order().cloned()))
    }
}

impl<V: Scalar, S: KeySpace> Coordinate<V, S> {
    /// Elementwise sum
    pub fn try_add<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Self> {
        self.zip_with(rhs.into(), |l, r| l + r)
    }

    /// Elementwise difference
    pub fn try_sub<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Self> {
        self.zip_with(rhs.into(), |l, r| l - r)
    }

    /// Elementwise product
    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Self> {
        self.zip_with(rhs.into(), |l, r| l * r)
    }

    /// Elementwise quotient.
    ///
    /// # Panics
    ///
    /// Integer values panic on a zero divisor, as `/` does.
    pub fn try_div<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Self> {
        self.zip_with(rhs.into(), |l, r| l / r)
    }

    /// Elementwise power
    pub fn try_pow<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Self> {
        self.zip_with(rhs.into(), <V as Scalar>::pow)
    }

    /// Elementwise division rounded towards negative infinity
    pub fn try_floor_div<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Self> {
        self.zip_with(rhs.into(), <V as Scalar>::floor_div)
    }

    /// Elementwise modulo; the remainder takes the divisor's sign
    pub fn try_rem<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<Self> {
        self.zip_with(rhs.into(), <V as Scalar>::modulo)
    }

    /// Floor quotient and modulo together
    pub fn try_div_mod<'a>(&self, rhs: impl Into<Operand<'a, V, S>>) -> Result<(Self, Self)> {
        let rhs = rhs.into();
        let pairs = self.zip_with(rhs, |l, r| (l.floor_div(r), l.modulo(r)))?;
        Ok((pairs.map(|p| p.0), pairs.map(|p| p.1)))
    }

    /// Raise every value to `exp`
    pub fn pow(&self, exp: V) -> Self {
        self.map(|&v| v.pow(exp))
    }

    /// Floor-divide every value by `rhs`
    pub fn floor_div(&self, rhs: V) -> Self {
        self.map(|&v| v.floor_div(rhs))
    }

    /// Floor quotient and modulo of every value by `rhs`
    pub fn div_mod(&self, rhs: V) -> (Self, Self) {
        (self.map(|&v| v.floor_div(rhs)), self.map(|&v| v.modulo(rhs)))
    }

    /// Absolute values
    pub fn abs(&self) -> Self {
        self.map(|&v| v.abs())
    }

    /// Values rounded towards negative infinity
    pub fn floor(&self) -> Self {
        self.map(|&v| v.floor())
    }

    /// Values rounded towards positive infinity
    pub fn ceil(&self) -> Self {
        self.map(|&v| v.ceil())
    }

    /// Values rounded towards zero
    pub fn trunc(&self) -> Self {
        self.map(|&v| v.trunc())
    }

    /// Values rounded to `digits` decimal places, ties to even
    pub fn round(&self, digits: i32) -> Self {
        self.map(|&v| v.round_to(digits))
    }
}
