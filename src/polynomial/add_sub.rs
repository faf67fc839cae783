// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{polynomial::Polynomial, traits::Coefficient};
use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedSub};
use std::{
    convert::identity,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

/// combine the overlapping coefficients with `op`, then append the rest of `rhs` through `extend`
fn add_sub_assign_move<T: Coefficient, Op: Fn(&mut T, T), Extend: Fn(T) -> T>(
    lhs: &mut Polynomial<T>,
    rhs: Polynomial<T>,
    op: Op,
    extend: Extend,
) {
    let mut rhs = rhs.into_iter();
    for lhs_coefficient in lhs.coefficients.iter_mut() {
        match rhs.next() {
            Some(rhs_coefficient) => op(lhs_coefficient, rhs_coefficient),
            None => return,
        }
    }
    lhs.coefficients.extend(rhs.map(extend));
}

fn add_sub_assign_ref<T: Coefficient, Op: Fn(&mut T, T), Extend: Fn(T) -> T>(
    lhs: &mut Polynomial<T>,
    rhs: &Polynomial<T>,
    op: Op,
    extend: Extend,
) {
    let overlap = lhs.size().min(rhs.size());
    for (lhs_coefficient, rhs_coefficient) in lhs.coefficients.iter_mut().zip(rhs.iter()) {
        op(lhs_coefficient, rhs_coefficient.clone());
    }
    lhs.coefficients
        .extend(rhs.coefficients[overlap..].iter().cloned().map(extend));
}

/// `+=`/`-=` with a scalar only touches the constant term; an empty polynomial gets `first` as its
/// only coefficient
fn add_sub_assign_single<T: Coefficient, Op: Fn(&mut T, T), First: Fn(T) -> T>(
    lhs: &mut Polynomial<T>,
    rhs: T,
    op: Op,
    first: First,
) {
    match lhs.coefficients.first_mut() {
        Some(constant) => op(constant, rhs),
        None => lhs.coefficients.push(first(rhs)),
    }
}

impl<T: Coefficient> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Polynomial<T>) {
        add_sub_assign_move(self, rhs, AddAssign::add_assign, identity);
    }
}

impl<'a, T: Coefficient> AddAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &Polynomial<T>) {
        add_sub_assign_ref(self, rhs, AddAssign::add_assign, identity);
    }
}

impl<T: Coefficient> AddAssign<T> for Polynomial<T> {
    fn add_assign(&mut self, rhs: T) {
        add_sub_assign_single(self, rhs, AddAssign::add_assign, identity);
    }
}

impl<'a, T: Coefficient> AddAssign<&'a T> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &T) {
        add_sub_assign_single(self, rhs.clone(), AddAssign::add_assign, identity);
    }
}

impl<T: Coefficient> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Polynomial<T>) {
        add_sub_assign_move(self, rhs, SubAssign::sub_assign, Neg::neg);
    }
}

impl<'a, T: Coefficient> SubAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &Polynomial<T>) {
        add_sub_assign_ref(self, rhs, SubAssign::sub_assign, Neg::neg);
    }
}

impl<T: Coefficient> SubAssign<T> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: T) {
        add_sub_assign_single(self, rhs, SubAssign::sub_assign, Neg::neg);
    }
}

impl<'a, T: Coefficient> SubAssign<&'a T> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &T) {
        add_sub_assign_single(self, rhs.clone(), SubAssign::sub_assign, Neg::neg);
    }
}

macro_rules! impl_add_sub {
    ($trait_name:ident, $fn_name:ident, $assign_fn_name:ident) => {
        impl<T: Coefficient> $trait_name for Polynomial<T> {
            type Output = Polynomial<T>;
            fn $fn_name(mut self, rhs: Polynomial<T>) -> Polynomial<T> {
                self.$assign_fn_name(rhs);
                self
            }
        }

        impl<'a, T: Coefficient> $trait_name<&'a Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;
            fn $fn_name(mut self, rhs: &Polynomial<T>) -> Polynomial<T> {
                self.$assign_fn_name(rhs);
                self
            }
        }

        impl<'a, T: Coefficient> $trait_name<Polynomial<T>> for &'a Polynomial<T> {
            type Output = Polynomial<T>;
            fn $fn_name(self, rhs: Polynomial<T>) -> Polynomial<T> {
                let mut lhs = self.clone();
                lhs.$assign_fn_name(rhs);
                lhs
            }
        }

        impl<'a, 'b, T: Coefficient> $trait_name<&'a Polynomial<T>> for &'b Polynomial<T> {
            type Output = Polynomial<T>;
            fn $fn_name(self, rhs: &Polynomial<T>) -> Polynomial<T> {
                let mut lhs = self.clone();
                lhs.$assign_fn_name(rhs);
                lhs
            }
        }

        impl<T: Coefficient> $trait_name<T> for Polynomial<T> {
            type Output = Polynomial<T>;
            fn $fn_name(mut self, rhs: T) -> Polynomial<T> {
                self.$assign_fn_name(rhs);
                self
            }
        }

        impl<'a, T: Coefficient> $trait_name<&'a T> for Polynomial<T> {
            type Output = Polynomial<T>;
            fn $fn_name(mut self, rhs: &T) -> Polynomial<T> {
                self.$assign_fn_name(rhs);
                self
            }
        }

        impl<'a, T: Coefficient> $trait_name<T> for &'a Polynomial<T> {
            type Output = Polynomial<T>;
            fn $fn_name(self, rhs: T) -> Polynomial<T> {
                let mut lhs = self.clone();
                lhs.$assign_fn_name(rhs);
                lhs
            }
        }

        impl<'a, 'b, T: Coefficient> $trait_name<&'a T> for &'b Polynomial<T> {
            type Output = Polynomial<T>;
            fn $fn_name(self, rhs: &T) -> Polynomial<T> {
                let mut lhs = self.clone();
                lhs.$assign_fn_name(rhs);
                lhs
            }
        }
    };
}

impl_add_sub!(Add, add, add_assign);
impl_add_sub!(Sub, sub, sub_assign);

/// `scalar + polynomial` adds into a copy of the polynomial; `scalar - polynomial` starts from the
/// degree-0 polynomial `scalar`
macro_rules! impl_scalar_add_sub {
    ([$($generics:tt)*], $t:ty) => {
        impl<$($generics)*> Add<Polynomial<$t>> for $t
        where
            $t: Coefficient,
        {
            type Output = Polynomial<$t>;
            fn add(self, mut rhs: Polynomial<$t>) -> Polynomial<$t> {
                rhs += self;
                rhs
            }
        }

        impl<'a, $($generics)*> Add<&'a Polynomial<$t>> for $t
        where
            $t: Coefficient,
        {
            type Output = Polynomial<$t>;
            fn add(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                let mut retval = rhs.clone();
                retval += self;
                retval
            }
        }

        impl<$($generics)*> Sub<Polynomial<$t>> for $t
        where
            $t: Coefficient,
        {
            type Output = Polynomial<$t>;
            fn sub(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                let mut retval = Polynomial::constant(self);
                retval -= rhs;
                retval
            }
        }

        impl<'a, $($generics)*> Sub<&'a Polynomial<$t>> for $t
        where
            $t: Coefficient,
        {
            type Output = Polynomial<$t>;
            fn sub(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                let mut retval = Polynomial::constant(self);
                retval -= rhs;
                retval
            }
        }
    };
}

impl_scalar_add_sub!([], i8);
impl_scalar_add_sub!([], i16);
impl_scalar_add_sub!([], i32);
impl_scalar_add_sub!([], i64);
impl_scalar_add_sub!([], i128);
impl_scalar_add_sub!([], isize);
impl_scalar_add_sub!([], f32);
impl_scalar_add_sub!([], f64);
impl_scalar_add_sub!([], BigInt);
impl_scalar_add_sub!([I], Ratio<I>);

impl<T: Coefficient> CheckedAdd for Polynomial<T> {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl<T: Coefficient> CheckedSub for Polynomial<T> {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(self - rhs)
    }
}
