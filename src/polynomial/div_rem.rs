// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    polynomial::{DivisionByZero, Polynomial},
    traits::Coefficient,
};
use log::{debug, trace};
use num_traits::{CheckedDiv, CheckedRem, Zero};
use std::ops::{Div, DivAssign, Rem, RemAssign};

/// Synthetic division of `dividend` by `divisor`, returning `(quotient, remainder)`.
///
/// The working buffer holds the dividend's coefficients from the highest power down; each step
/// divides the current top coefficient by the divisor's leading coefficient and eliminates it
/// from the following `divisor.degree()` coefficients.
///
/// The quotient has `dividend.degree() - divisor.degree() + 1` coefficients. The remainder
/// normally has `divisor.degree()` coefficients, but when its highest one comes out exactly zero
/// it is returned as the single coefficient `[0]`, even if lower coefficients are non-zero. A
/// degree-0 divisor leaves nothing over, so the remainder is `[0]`.
///
/// # Preconditions
///
/// `dividend.degree() >= divisor.degree()` and `divisor` is not the zero constant polynomial.
/// These are only checked by debug assertions; a release build given bad input returns garbage
/// or panics inside the coefficient arithmetic. Use [`quotient_remainder`] unless the
/// preconditions are already known to hold.
pub fn unchecked_synthetic_division<T: Coefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
) -> (Polynomial<T>, Polynomial<T>) {
    debug_assert!(dividend.degree() >= divisor.degree());
    debug_assert!(!divisor.is_zero_constant());
    let divisor_degree = divisor.degree();
    let quotient_len = dividend.degree() - divisor_degree + 1;
    trace!(
        "synthetic division: dividend degree {}, divisor degree {}",
        dividend.degree(),
        divisor_degree
    );
    let mut working: Vec<T> = dividend.iter().rev().cloned().collect();
    let normalizer = divisor[divisor_degree].clone();
    for i in 0..quotient_len {
        if working[i].is_zero() {
            continue;
        }
        working[i] /= normalizer.clone();
        let coefficient = working[i].clone();
        for j in 1..=divisor_degree {
            working[i + j] -= divisor[divisor_degree - j].clone() * coefficient.clone();
        }
    }
    let mut remainder = working.split_off(quotient_len);
    let remainder = match remainder.first() {
        None => Polynomial::zero(),
        Some(leading) if leading.is_zero() => {
            trace!("remainder leading coefficient cancelled, truncating remainder to zero");
            remainder.truncate(1);
            Polynomial::from(remainder)
        }
        Some(_) => {
            remainder.reverse();
            Polynomial::from(remainder)
        }
    };
    working.reverse();
    (Polynomial::from(working), remainder)
}

/// Divide `dividend` by `divisor`, returning `(quotient, remainder)`.
///
/// When `dividend.degree() < divisor.degree()` no division happens: the result is the zero
/// constant and a copy of `dividend`.
///
/// Only the zero constant polynomial is rejected. Coefficients are never trimmed, so a divisor
/// can end in zeros (`[1, 0]` after a cancelling subtraction, say); dividing by it divides by
/// its zero leading coefficient, which panics for `Ratio` and yields infinities or NaN for
/// floats.
pub fn quotient_remainder<T: Coefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
) -> Result<(Polynomial<T>, Polynomial<T>), DivisionByZero> {
    if divisor.is_zero_constant() {
        debug!("rejecting division by the zero constant polynomial");
        return Err(DivisionByZero);
    }
    if dividend.degree() < divisor.degree() {
        trace!(
            "dividend degree {} is below divisor degree {}",
            dividend.degree(),
            divisor.degree()
        );
        return Ok((Polynomial::zero(), dividend.clone()));
    }
    Ok(unchecked_synthetic_division(dividend, divisor))
}

fn quotient_remainder_or_panic<T: Coefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
) -> (Polynomial<T>, Polynomial<T>) {
    quotient_remainder(dividend, divisor).unwrap_or_else(|err| panic!("{}", err))
}

impl<T: Coefficient> Polynomial<T> {
    /// `(self / rhs, self % rhs)`
    pub fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self), DivisionByZero> {
        quotient_remainder(self, rhs)
    }
    /// replace `self` with `self / rhs`; `self` is left unchanged on error
    pub fn try_div_assign(&mut self, rhs: &Self) -> Result<(), DivisionByZero> {
        let (quotient, _) = quotient_remainder(self, rhs)?;
        *self = quotient;
        Ok(())
    }
    /// replace `self` with `self % rhs`; `self` is left unchanged on error
    pub fn try_rem_assign(&mut self, rhs: &Self) -> Result<(), DivisionByZero> {
        let (_, remainder) = quotient_remainder(self, rhs)?;
        *self = remainder;
        Ok(())
    }
}

impl<T: Coefficient> CheckedDiv for Polynomial<T> {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        let (quotient, _) = quotient_remainder(self, rhs).ok()?;
        Some(quotient)
    }
}

impl<T: Coefficient> CheckedRem for Polynomial<T> {
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        let (_, remainder) = quotient_remainder(self, rhs).ok()?;
        Some(remainder)
    }
}

/// the operator forms panic on division by the zero constant polynomial
macro_rules! impl_div_rem {
    ($l:ty, $r:ty, [$($lifetimes:tt)*]) => {
        impl<$($lifetimes)* T: Coefficient> Div<$r> for $l {
            type Output = Polynomial<T>;
            fn div(self, rhs: $r) -> Polynomial<T> {
                quotient_remainder_or_panic::<T>(&self, &rhs).0
            }
        }

        impl<$($lifetimes)* T: Coefficient> Rem<$r> for $l {
            type Output = Polynomial<T>;
            fn rem(self, rhs: $r) -> Polynomial<T> {
                quotient_remainder_or_panic::<T>(&self, &rhs).1
            }
        }
    };
}

impl_div_rem!(Polynomial<T>, Polynomial<T>, []);
impl_div_rem!(Polynomial<T>, &'r Polynomial<T>, ['r,]);
impl_div_rem!(&'l Polynomial<T>, Polynomial<T>, ['l,]);
impl_div_rem!(&'l Polynomial<T>, &'r Polynomial<T>, ['l, 'r,]);

impl<T: Coefficient> DivAssign for Polynomial<T> {
    fn div_assign(&mut self, rhs: Polynomial<T>) {
        *self = quotient_remainder_or_panic(&*self, &rhs).0;
    }
}

impl<'a, T: Coefficient> DivAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn div_assign(&mut self, rhs: &Polynomial<T>) {
        *self = quotient_remainder_or_panic(&*self, rhs).0;
    }
}

impl<T: Coefficient> RemAssign for Polynomial<T> {
    fn rem_assign(&mut self, rhs: Polynomial<T>) {
        *self = quotient_remainder_or_panic(&*self, &rhs).1;
    }
}

impl<'a, T: Coefficient> RemAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn rem_assign(&mut self, rhs: &Polynomial<T>) {
        *self = quotient_remainder_or_panic(&*self, rhs).1;
    }
}
