// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::Coefficient;
use num_traits::{NumCast, ToPrimitive, Zero};

/// evaluate `buffer[0] + buffer[1] * x + ... + buffer[count - 1] * pow(x, count - 1)` using
/// Horner's method
///
/// # Panics
///
/// Panics if `count > buffer.len()`.
pub fn evaluate_polynomial<T: Coefficient>(buffer: &[T], x: &T, count: usize) -> T {
    let mut iter = buffer[..count].iter().rev();
    if let Some(last) = iter.next() {
        let mut retval = last.clone();
        for coefficient in iter {
            retval *= x.clone();
            retval += coefficient.clone();
        }
        retval
    } else {
        Zero::zero()
    }
}

/// the number of ways to choose `k` items out of `n`, computed in `T`
///
/// Each partial product `C(n - k + i, i)` is itself an integer, so this is exact for integer and
/// rational `T` as long as no intermediate value overflows.
pub fn binomial_coefficient<T: Coefficient>(n: usize, k: usize) -> T {
    if k > n {
        return Zero::zero();
    }
    let k = k.min(n - k);
    let mut retval = T::one();
    for i in 1..=k {
        retval *= T::make_coefficient(n - k + i);
        retval /= T::make_coefficient(i);
    }
    retval
}

/// convert a numeric value to another numeric type, returning `None` when the value can't be
/// represented
///
/// The rounding policy is that of [`NumCast`]: float to integer truncates toward zero.
pub fn real_cast<T: NumCast, U: ToPrimitive>(value: U) -> Option<T> {
    T::from(value)
}
