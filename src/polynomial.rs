// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::chebyshev::polynomial_to_chebyshev;
use crate::traits::{Coefficient, PolynomialEval};
use crate::util::{evaluate_polynomial, real_cast};
use num_traits::{NumCast, One, ToPrimitive, Zero};
use std::fmt;
use std::io;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;
use thiserror::Error;

mod add_sub;
mod div_rem;
mod mul;

pub use self::div_rem::{quotient_remainder, unchecked_synthetic_division};

/// A dense single-variable polynomial.
///
/// the term at index `n` is `self[n] * pow(x, n)`
///
/// # Invariants
///
/// Coefficients are never trimmed: zeros left at the top by cancellation stay there, so
/// `degree()` is an upper bound on the mathematical degree, not the exact value.
///
/// A polynomial built with [`Polynomial::new`] (or [`Default`], or from an empty `Vec`) has no
/// coefficients at all. That state is only meant to be filled in by `+=`/`-=`; `degree`,
/// `evaluate` and indexing must not be used on it.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

/// returned when dividing by the zero constant polynomial
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("polynomial division by zero")]
pub struct DivisionByZero;

impl From<DivisionByZero> for io::Error {
    fn from(err: DivisionByZero) -> Self {
        Self::new(io::ErrorKind::InvalidInput, err)
    }
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self {
            coefficients: Vec::default(),
        }
    }
}

impl<T> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        Self { coefficients }
    }
}

impl<T> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            coefficients: iter.into_iter().collect(),
        }
    }
}

impl<T> Polynomial<T> {
    /// the polynomial with no coefficients
    pub fn new() -> Self {
        Self::default()
    }
    /// the degree-0 polynomial `value`
    ///
    /// `From` only takes the whole coefficient `Vec`, so `Polynomial::from(vec![...])` never has
    /// a second reading with a `Vec` coefficient.
    pub fn constant(value: T) -> Self {
        Self {
            coefficients: vec![value],
        }
    }
    /// copy the `order + 1` coefficients `buffer[0..=order]`
    ///
    /// # Panics
    ///
    /// Panics if `buffer` has fewer than `order + 1` elements.
    pub fn from_buffer<U: Clone + Into<T>>(buffer: &[U], order: usize) -> Self {
        buffer[..=order].iter().cloned().map(Into::into).collect()
    }
    /// copy into a polynomial over another coefficient type, converting each coefficient with
    /// `convert`
    pub fn map_coefficients<U, F: FnMut(&T) -> U>(&self, convert: F) -> Polynomial<U> {
        self.iter().map(convert).collect()
    }
    /// copy into a polynomial over another numeric type using [`real_cast`]
    ///
    /// Returns `None` if any coefficient is not representable in `U`.
    pub fn real_cast<U: NumCast>(&self) -> Option<Polynomial<U>>
    where
        T: ToPrimitive + Clone,
    {
        self.iter().cloned().map(|v| real_cast::<U, T>(v)).collect()
    }
    pub fn data(&self) -> &[T] {
        &self.coefficients
    }
    pub fn into_data(self) -> Vec<T> {
        self.coefficients
    }
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.coefficients.iter()
    }
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.coefficients.iter_mut()
    }
    pub fn size(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
    /// `size() - 1`; trailing zero coefficients are counted
    pub fn degree(&self) -> usize {
        debug_assert!(!self.is_empty(), "degree of a polynomial with no coefficients");
        self.size().wrapping_sub(1)
    }
    /// true for a degree-0 polynomial whose only coefficient is zero
    pub fn is_zero_constant(&self) -> bool
    where
        T: Zero,
    {
        match &*self.coefficients {
            [coefficient] => coefficient.is_zero(),
            _ => false,
        }
    }
}

impl<T: Coefficient> Polynomial<T> {
    pub fn evaluate(&self, x: T) -> T {
        debug_assert!(!self.is_empty(), "evaluating a polynomial with no coefficients");
        evaluate_polynomial(&self.coefficients, &x, self.size())
    }
    /// the coefficients of `self` in the Chebyshev basis, with the constant term doubled
    ///
    /// Only [`evaluate_chebyshev`](crate::chebyshev::evaluate_chebyshev) understands that scaling.
    pub fn chebyshev(&self) -> Vec<T> {
        polynomial_to_chebyshev(&self.coefficients)
    }
}

impl<T> Index<usize> for Polynomial<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.coefficients[index]
    }
}

impl<T> IndexMut<usize> for Polynomial<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.coefficients[index]
    }
}

impl<T: Coefficient> PolynomialEval<T> for &'_ Polynomial<T> {
    fn eval(self, x: &T) -> T {
        self.evaluate(x.clone())
    }
}

impl<T: Coefficient> PolynomialEval<T> for Polynomial<T> {
    fn eval(self, x: &T) -> T {
        self.evaluate(x.clone())
    }
}

impl<T: Coefficient> Zero for Polynomial<T> {
    fn zero() -> Self {
        Self::constant(T::zero())
    }
    fn set_zero(&mut self) {
        self.coefficients.clear();
        self.coefficients.push(T::zero());
    }
    fn is_zero(&self) -> bool {
        // test in reverse order since high coefficient is usually non-zero
        for coefficient in self.iter().rev() {
            if !coefficient.is_zero() {
                return false;
            }
        }
        true
    }
}

impl<T: Coefficient> One for Polynomial<T> {
    fn one() -> Self {
        Self::constant(T::one())
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Polynomial<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// formats as `{ c0, c1, ..., cn }`, lowest power first
impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{ ")?;
        for (index, coefficient) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coefficient)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chebyshev::evaluate_chebyshev;
    use crate::util::tests::assert_close;
    use num_rational::Ratio;

    #[test]
    fn test_construction() {
        let buffer = [1, 2, 3, 4, 5];
        assert_eq!(
            Polynomial::<i32>::from_buffer(&buffer, 2),
            vec![1, 2, 3].into()
        );
        assert_eq!(Polynomial::<i32>::from_buffer(&buffer, 0), Polynomial::constant(1));
        let widened = Polynomial::<i64>::from_buffer(&[1i32, -2], 1);
        assert_eq!(widened.data(), &[1i64, -2]);
        let poly = Polynomial::constant(7);
        assert_eq!(poly.size(), 1);
        assert_eq!(poly.degree(), 0);
        let poly: Polynomial<i32> = (1..=4).collect();
        assert_eq!(poly.data(), &[1, 2, 3, 4]);
        assert_eq!(poly.degree(), 3);
        assert!(Polynomial::<f64>::new().is_empty());
    }

    #[test]
    fn test_from_vec_infers_coefficient_type() {
        let poly = Polynomial::from(vec![1, 2, 3]);
        assert_eq!(poly.degree(), 2);
        assert_eq!(poly, vec![1, 2, 3].into());
        let poly: Polynomial<_> = vec![0.5, 1.5].into();
        assert_eq!(poly.evaluate(2.0), 3.5);
        let constant = Polynomial::constant(vec![1, 2]);
        assert_eq!(constant.size(), 1);
        assert_eq!(constant[0], vec![1, 2]);
    }

    #[test]
    fn test_no_trimming() {
        let poly = Polynomial::from(vec![1, 0, 0]);
        assert_eq!(poly.size(), 3);
        assert_eq!(poly.degree(), 2);
    }

    #[test]
    fn test_index() {
        let mut poly = Polynomial::from(vec![1, 2, 3]);
        assert_eq!(poly[1], 2);
        poly[1] = 5;
        assert_eq!(poly.data(), &[1, 5, 3]);
        for coefficient in &mut poly {
            *coefficient *= 2;
        }
        assert_eq!(poly.into_data(), vec![2, 10, 6]);
    }

    #[test]
    fn test_converting_copy() {
        let poly = Polynomial::from(vec![1.75f64, -2.5, 3.0]);
        assert_eq!(
            poly.real_cast::<i32>(),
            Some(Polynomial::from(vec![1, -2, 3]))
        );
        let rounded = poly.map_coefficients(|v| v.round() as i64);
        assert_eq!(rounded.data(), &[2, -3, 3]);
        let exact = Polynomial::from(vec![1, 2]).map_coefficients(|&v| Ratio::from_integer(v));
        assert_eq!(exact[1], Ratio::from_integer(2));
        assert_eq!(Polynomial::from(vec![1e10f64]).real_cast::<i32>(), None);
    }

    #[test]
    fn test_evaluate() {
        let poly = Polynomial::from(vec![1]);
        assert_eq!(poly.evaluate(10), 1);
        let poly = Polynomial::from(vec![1, 2]);
        assert_eq!(poly.evaluate(10), 21);
        let poly = Polynomial::from(vec![1, 2, 3]);
        assert_eq!(poly.evaluate(10), 321);
        assert_eq!((&poly).eval(&10), 321);
        let poly = Polynomial::from(vec![1, 2, 3, 4]);
        assert_eq!(poly.eval(&10), 4321);
    }

    #[test]
    fn test_chebyshev() {
        let poly = Polynomial::from(vec![1.0, 2.0, 3.0]);
        let chebyshev = poly.chebyshev();
        assert_eq!(chebyshev.len(), 3);
        for &x in &[-1.0, -0.5, 0.0, 0.3, 1.0] {
            assert_close(evaluate_chebyshev(&chebyshev, &x), poly.evaluate(x));
        }
    }

    #[test]
    fn test_zero_one() {
        let zero = Polynomial::<i32>::zero();
        assert_eq!(zero.data(), &[0]);
        assert!(zero.is_zero_constant());
        assert!(Polynomial::from(vec![0, 0]).is_zero());
        assert!(!Polynomial::from(vec![0, 0]).is_zero_constant());
        assert!(!Polynomial::from(vec![0, 1]).is_zero());
        let mut poly = Polynomial::from(vec![3, 4]);
        poly.set_zero();
        assert_eq!(poly, Zero::zero());
        assert_eq!(Polynomial::<i32>::one().data(), &[1]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Polynomial::from(vec![1])), "{ 1 }");
        assert_eq!(format!("{}", Polynomial::from(vec![1, 2])), "{ 1, 2 }");
        assert_eq!(
            format!("{}", Polynomial::from(vec![1, -2, 3, 0])),
            "{ 1, -2, 3, 0 }"
        );
        assert_eq!(
            format!("{}", Polynomial::from(vec![0.5, 1.25])),
            "{ 0.5, 1.25 }"
        );
        assert_eq!(format!("{}", Polynomial::<i32>::new()), "{  }");
    }

    #[test]
    fn test_division_by_zero_error() {
        assert_eq!(DivisionByZero.to_string(), "polynomial division by zero");
        let err: io::Error = DivisionByZero.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
