//! Reductions
//!
//! Sums and products fold from the additive and multiplicative identity, so
//! an empty coordinate reduces to `0` and `1`. Norms are computed in `f64`.

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::space::KeySpace;

impl<V: Scalar, S: KeySpace> Coordinate<V, S> {
    /// Sum of all values
    pub fn sum(&self) -> V {
        self.iter().fold(V::zero(), |acc, (_, &v)| acc + v)
    }

    /// Product of all values
    pub fn product(&self) -> V {
        self.iter().fold(V::one(), |acc, (_, &v)| acc * v)
    }

    /// p-norm `(Σ|v|^p)^(1/p)`.
    ///
    /// `p = ∞` gives the largest absolute value. Zero, negative and NaN `p`
    /// are [`Error::InvalidNormOrder`].
    pub fn norm(&self, p: f64) -> Result<f64> {
        if p.is_nan() || p <= 0.0 {
            return Err(Error::InvalidNormOrder(p));
        }

        let magnitudes = self.iter().map(|(_, v)| v.abs().to_f64_lossy());
        if p.is_infinite() {
            return Ok(magnitudes.fold(0.0, f64::max));
        }
        if p == 1.0 {
            return Ok(magnitudes.sum());
        }
        Ok(magnitudes.map(|m| m.powf(p)).sum::<f64>().powf(p.recip()))
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.iter()
            .map(|(_, v)| {
                let m = v.to_f64_lossy();
                m * m
            })
            .sum::<f64>()
            .sqrt()
    }
}
