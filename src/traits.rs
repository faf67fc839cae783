// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{NumCast, One, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// build a coefficient from an integer literal
pub trait MakeCoefficient<T> {
    fn make_coefficient(value: T) -> Self;
}

macro_rules! impl_make_coefficient_primitive {
    ($($t:ty),*) => {
        $(
            impl MakeCoefficient<usize> for $t {
                /// wraps in release builds if `value` doesn't fit in the target type
                fn make_coefficient(value: usize) -> Self {
                    debug_assert!(
                        <$t as NumCast>::from(value).is_some(),
                        "{} doesn't fit in {}",
                        value,
                        stringify!($t)
                    );
                    value as $t
                }
            }
        )*
    };
}

impl_make_coefficient_primitive!(i8, i16, i32, i64, i128, isize, f32, f64);

impl MakeCoefficient<usize> for BigInt {
    fn make_coefficient(value: usize) -> Self {
        BigInt::from(value)
    }
}

impl<I> MakeCoefficient<usize> for Ratio<I>
where
    I: Clone + Integer + MakeCoefficient<usize>,
{
    fn make_coefficient(value: usize) -> Self {
        Ratio::from_integer(I::make_coefficient(value))
    }
}

/// The arithmetic a polynomial coefficient has to support.
///
/// Only field-like types (floats, `Ratio<_>`) give mathematically exact division; integer
/// coefficients work for everything except the operations that divide.
pub trait Coefficient:
    Clone
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + MakeCoefficient<usize>
{
}

impl<T> Coefficient for T where
    T: Clone
        + PartialEq
        + Zero
        + One
        + Neg<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + MakeCoefficient<usize>
{
}

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_coefficient<T: Coefficient>() {}

    #[test]
    fn test_coefficient_types() {
        is_coefficient::<f32>();
        is_coefficient::<f64>();
        is_coefficient::<i32>();
        is_coefficient::<Ratio<i64>>();
        is_coefficient::<Ratio<BigInt>>();
    }

    #[test]
    fn test_make_coefficient() {
        assert_eq!(i32::make_coefficient(7), 7);
        assert_eq!(i8::make_coefficient(127), 127);
        assert_eq!(f64::make_coefficient(3), 3.0);
        assert_eq!(Ratio::<i64>::make_coefficient(5), Ratio::from_integer(5));
        assert_eq!(
            Ratio::<BigInt>::make_coefficient(12),
            Ratio::from_integer(BigInt::from(12))
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "300 doesn't fit in i8")]
    fn test_make_coefficient_out_of_range() {
        let _ = i8::make_coefficient(300);
    }
}
