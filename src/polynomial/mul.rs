// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{polynomial::Polynomial, traits::Coefficient};
use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::CheckedMul;
use std::ops::{Mul, MulAssign};

fn mul_assign_single<T: Coefficient>(lhs: &mut Polynomial<T>, rhs: &T) {
    lhs.iter_mut().for_each(|v| *v *= rhs.clone());
}

/// schoolbook multiplication: `O(lhs.size() * rhs.size())`
fn mul_assign_polynomial<T: Coefficient>(lhs: &mut Polynomial<T>, rhs: &Polynomial<T>) {
    debug_assert!(
        !rhs.is_empty(),
        "multiplying by a polynomial with no coefficients"
    );
    // TODO: switch to Karatsuba or FFT-based multiplication for large operands
    let base = lhs.clone();
    mul_assign_single(lhs, &rhs[0]);
    for (shift, rhs_coefficient) in rhs.iter().enumerate().skip(1) {
        let mut term = base.clone();
        mul_assign_single(&mut term, rhs_coefficient);
        let overlap = lhs.size().saturating_sub(shift).min(term.size());
        let mut term = term.into_iter();
        for (lhs_coefficient, term_coefficient) in lhs
            .coefficients
            .iter_mut()
            .skip(shift)
            .take(overlap)
            .zip(term.by_ref())
        {
            *lhs_coefficient += term_coefficient;
        }
        lhs.coefficients.extend(term);
    }
}

impl<T: Coefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        mul_assign_polynomial(self, &rhs);
    }
}

impl<'a, T: Coefficient> MulAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        mul_assign_polynomial(self, rhs);
    }
}

impl<T: Coefficient> MulAssign<T> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: T) {
        mul_assign_single(self, &rhs);
    }
}

impl<'a, T: Coefficient> MulAssign<&'a T> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &T) {
        mul_assign_single(self, rhs);
    }
}

macro_rules! impl_mul {
    ($r:ty, [$($lifetimes:tt)*]) => {
        impl<$($lifetimes)* T: Coefficient> Mul<$r> for Polynomial<T> {
            type Output = Polynomial<T>;
            fn mul(mut self, rhs: $r) -> Polynomial<T> {
                self *= rhs;
                self
            }
        }

        impl<'l, $($lifetimes)* T: Coefficient> Mul<$r> for &'l Polynomial<T> {
            type Output = Polynomial<T>;
            fn mul(self, rhs: $r) -> Polynomial<T> {
                let mut lhs = self.clone();
                lhs *= rhs;
                lhs
            }
        }
    };
}

impl_mul!(Polynomial<T>, []);
impl_mul!(&'r Polynomial<T>, ['r,]);
impl_mul!(T, []);
impl_mul!(&'r T, ['r,]);

/// `scalar * polynomial` scales a copy of the polynomial
macro_rules! impl_scalar_mul {
    ([$($generics:tt)*], $t:ty) => {
        impl<$($generics)*> Mul<Polynomial<$t>> for $t
        where
            $t: Coefficient,
        {
            type Output = Polynomial<$t>;
            fn mul(self, mut rhs: Polynomial<$t>) -> Polynomial<$t> {
                rhs *= self;
                rhs
            }
        }

        impl<'a, $($generics)*> Mul<&'a Polynomial<$t>> for $t
        where
            $t: Coefficient,
        {
            type Output = Polynomial<$t>;
            fn mul(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                let mut retval = rhs.clone();
                retval *= self;
                retval
            }
        }
    };
}

impl_scalar_mul!([], i8);
impl_scalar_mul!([], i16);
impl_scalar_mul!([], i32);
impl_scalar_mul!([], i64);
impl_scalar_mul!([], i128);
impl_scalar_mul!([], isize);
impl_scalar_mul!([], f32);
impl_scalar_mul!([], f64);
impl_scalar_mul!([], BigInt);
impl_scalar_mul!([I], Ratio<I>);

impl<T: Coefficient> CheckedMul for Polynomial<T> {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_empty() {
            None
        } else {
            Some(self * rhs)
        }
    }
}
