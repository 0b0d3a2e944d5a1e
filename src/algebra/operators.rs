//! Operator Overloads
//!
//! - coordinate ∘ coordinate returns `Result`, since key sets may differ
//! - coordinate ∘ scalar and scalar ∘ coordinate always succeed
//! - `%` is the floor-semantics modulo of [`Scalar::modulo`]
//! - compound assignment with a scalar computes a new coordinate and rebinds

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::scalar::Scalar;
use crate::space::KeySpace;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $apply:expr) => {
        impl<'b, V: Scalar, S: KeySpace> $trait<&'b Coordinate<V, S>> for &Coordinate<V, S> {
            type Output = Result<Coordinate<V, S>>;

            fn $method(self, rhs: &'b Coordinate<V, S>) -> Self::Output {
                self.zip_with(rhs.into(), $apply)
            }
        }

        impl<V: Scalar, S: KeySpace> $trait<Coordinate<V, S>> for Coordinate<V, S> {
            type Output = Result<Coordinate<V, S>>;

            fn $method(self, rhs: Coordinate<V, S>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl<V: Scalar, S: KeySpace> $trait<V> for &Coordinate<V, S> {
            type Output = Coordinate<V, S>;

            fn $method(self, rhs: V) -> Self::Output {
                let apply: fn(V, V) -> V = $apply;
                self.map(|&v| apply(v, rhs))
            }
        }

        impl<V: Scalar, S: KeySpace> $trait<V> for Coordinate<V, S> {
            type Output = Coordinate<V, S>;

            fn $method(self, rhs: V) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<V: Scalar, S: KeySpace> $assign_trait<V> for Coordinate<V, S> {
            fn $assign_method(&mut self, rhs: V) {
                *self = (&*self).$method(rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, |l: V, r: V| l + r);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, |l: V, r: V| l - r);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, |l: V, r: V| l * r);
impl_binary_op!(Div, div, DivAssign, div_assign, |l: V, r: V| l / r);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, |l: V, r: V| l.modulo(r));

/// `scalar ∘ coordinate` for each concrete scalar type
macro_rules! impl_reflected_ops {
    ($($t:ty),*) => {$(
        impl<S: KeySpace> Add<&Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn add(self, rhs: &Coordinate<$t, S>) -> Self::Output {
                rhs.map(|&v| self + v)
            }
        }

        impl<S: KeySpace> Sub<&Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn sub(self, rhs: &Coordinate<$t, S>) -> Self::Output {
                rhs.map(|&v| self - v)
            }
        }

        impl<S: KeySpace> Mul<&Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn mul(self, rhs: &Coordinate<$t, S>) -> Self::Output {
                rhs.map(|&v| self * v)
            }
        }

        impl<S: KeySpace> Div<&Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn div(self, rhs: &Coordinate<$t, S>) -> Self::Output {
                rhs.map(|&v| self / v)
            }
        }

        impl<S: KeySpace> Rem<&Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn rem(self, rhs: &Coordinate<$t, S>) -> Self::Output {
                rhs.map(|&v| Scalar::modulo(self, v))
            }
        }

        impl<S: KeySpace> Add<Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn add(self, rhs: Coordinate<$t, S>) -> Self::Output {
                self + &rhs
            }
        }

        impl<S: KeySpace> Sub<Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn sub(self, rhs: Coordinate<$t, S>) -> Self::Output {
                self - &rhs
            }
        }

        impl<S: KeySpace> Mul<Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn mul(self, rhs: Coordinate<$t, S>) -> Self::Output {
                self * &rhs
            }
        }

        impl<S: KeySpace> Div<Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn div(self, rhs: Coordinate<$t, S>) -> Self::Output {
                self / &rhs
            }
        }

        impl<S: KeySpace> Rem<Coordinate<$t, S>> for $t {
            type Output = Coordinate<$t, S>;

            fn rem(self, rhs: Coordinate<$t, S>) -> Self::Output {
                self % &rhs
            }
        }
    )*};
}

impl_reflected_ops!(f32, f64, i8, i16, i32, i64, i128, isize);

impl<V: Scalar, S: KeySpace> Neg for &Coordinate<V, S> {
    type Output = Coordinate<V, S>;

    fn neg(self) -> Self::Output {
        self.map(|&v| -v)
    }
}

impl<V: Scalar, S: KeySpace> Neg for Coordinate<V, S> {
    type Output = Coordinate<V, S>;

    fn neg(self) -> Self::Output {
        -&self
    }
}
