// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Change of basis between monomials and Chebyshev polynomials of the first kind.
//!
//! [`polynomial_to_chebyshev`] and [`evaluate_chebyshev`] are a matched pair: the converted
//! coefficient sequence stores twice the `T_0` coefficient, and the evaluator halves it again.

use crate::traits::Coefficient;
use crate::util::binomial_coefficient;
use num_traits::pow;
use std::mem;

/// the coefficient of `pow(x, m)` in `T_n(x)`
///
/// Computed as `n / 2 * pow(-1, r) / (n - r) * C(n - r, r) * pow(2, m)` with `r = (n - m) / 2`.
/// `T` must support exact division (floats or rationals).
pub fn chebyshev_coefficient<T: Coefficient>(n: usize, m: usize) -> T {
    if m > n || n % 2 != m % 2 {
        return T::zero();
    }
    if n == 0 {
        return T::one();
    }
    let r = (n - m) / 2;
    debug_assert_eq!(n - 2 * r, m);
    let mut retval = T::make_coefficient(n) / T::make_coefficient(2);
    if r % 2 != 0 {
        retval = -retval;
    }
    retval /= T::make_coefficient(n - r);
    retval *= binomial_coefficient::<T>(n - r, r);
    retval *= pow(T::make_coefficient(2), m);
    retval
}

/// solve the triangular system for the indexes with the same parity as `top`, from `top` down
fn solve_same_parity<T: Coefficient>(monomial: &[T], retval: &mut [T], top: usize) {
    for i in (0..=top).rev().step_by(2) {
        let mut value = monomial[i].clone();
        for k in (i + 2..=top).rev().step_by(2) {
            value -= retval[k].clone() * chebyshev_coefficient::<T>(k, i);
        }
        value /= chebyshev_coefficient::<T>(i, i);
        retval[i] = value;
    }
}

/// Convert monomial coefficients (lowest power first) into Chebyshev coefficients.
///
/// `T_n` only has terms whose power has the parity of `n`, so the even and odd indexes are
/// solved independently. The `T_0` coefficient of the result is doubled; evaluate the result
/// with [`evaluate_chebyshev`].
pub fn polynomial_to_chebyshev<T: Coefficient>(coefficients: &[T]) -> Vec<T> {
    let mut retval = coefficients.to_vec();
    let order = match coefficients.len().checked_sub(1) {
        Some(order) => order,
        None => return retval,
    };
    let (even_order, odd_order) = if order % 2 == 0 {
        (order, order.checked_sub(1))
    } else {
        (order - 1, Some(order))
    };
    solve_same_parity(coefficients, &mut retval, even_order);
    retval[0] *= T::make_coefficient(2);
    if let Some(odd_order) = odd_order {
        solve_same_parity(coefficients, &mut retval, odd_order);
    }
    retval
}

/// Evaluate `coefficients[0] / 2 + sum(coefficients[i] * T_i(x))` with Clenshaw's recurrence.
///
/// # Panics
///
/// Panics if `coefficients` is empty.
pub fn evaluate_chebyshev<T: Coefficient>(coefficients: &[T], x: &T) -> T {
    let two = T::make_coefficient(2);
    let mut yk = T::zero();
    let mut yk1 = T::zero();
    for coefficient in coefficients[1..].iter().rev() {
        let next = two.clone() * x.clone() * yk.clone() - yk1.clone() + coefficient.clone();
        yk1 = mem::replace(&mut yk, next);
    }
    coefficients[0].clone() / two + yk * x.clone() - yk1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::Polynomial;
    use crate::util::tests::{assert_close, random_float_polynomial};
    use num_rational::Ratio;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn ri(n: i64) -> Ratio<i64> {
        Ratio::from_integer(n)
    }

    /// `T_0` through `T_6` in the monomial basis
    const CHEBYSHEV_POLYNOMIALS: [&[i64]; 7] = [
        &[1],
        &[0, 1],
        &[-1, 0, 2],
        &[0, -3, 0, 4],
        &[1, 0, -8, 0, 8],
        &[0, 5, 0, -20, 0, 16],
        &[-1, 0, 18, 0, -48, 0, 32],
    ];

    #[test]
    fn test_chebyshev_coefficient() {
        for (n, expected) in CHEBYSHEV_POLYNOMIALS.iter().enumerate() {
            for m in 0..=n {
                assert_eq!(
                    chebyshev_coefficient::<Ratio<i64>>(n, m),
                    ri(expected[m]),
                    "n = {}, m = {}",
                    n,
                    m
                );
            }
        }
        assert_eq!(chebyshev_coefficient::<f64>(10, 10), 512.0);
        assert_eq!(chebyshev_coefficient::<f64>(10, 0), -1.0);
    }

    #[test]
    fn test_chebyshev_coefficient_zero() {
        assert_eq!(chebyshev_coefficient::<f64>(0, 0), 1.0);
        for n in 0..8 {
            for m in 0..10 {
                if m > n || n % 2 != m % 2 {
                    assert_eq!(chebyshev_coefficient::<Ratio<i64>>(n, m), ri(0));
                }
            }
        }
    }

    #[test]
    fn test_polynomial_to_chebyshev() {
        let r = |n: i64, d: i64| Ratio::new(n, d);
        assert_eq!(
            polynomial_to_chebyshev(&[ri(1), ri(2), ri(3)]),
            vec![ri(5), ri(2), r(3, 2)]
        );
        assert_eq!(
            polynomial_to_chebyshev(&[ri(0), ri(0), ri(1)]),
            vec![ri(1), ri(0), r(1, 2)]
        );
        assert_eq!(polynomial_to_chebyshev(&[ri(7)]), vec![ri(14)]);
        assert_eq!(polynomial_to_chebyshev::<f64>(&[]), Vec::<f64>::new());
        for (n, monomial) in CHEBYSHEV_POLYNOMIALS.iter().enumerate() {
            let monomial: Vec<_> = monomial.iter().map(|&v| ri(v)).collect();
            let mut expected = vec![ri(0); n + 1];
            expected[n] = ri(1);
            if n == 0 {
                expected[0] = ri(2);
            }
            assert_eq!(polynomial_to_chebyshev(&monomial), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_evaluate_chebyshev() {
        assert_close(evaluate_chebyshev(&[2.0, 0.0, 1.0], &0.5), 0.5);
        assert_close(evaluate_chebyshev(&[6.0], &0.25), 3.0);
        assert_close(evaluate_chebyshev(&[0.0, 1.0], &-0.75), -0.75);
        assert_close(evaluate_chebyshev(&[0.0, 0.0, 0.0, 1.0], &0.5), -1.0);
    }

    #[test]
    fn test_chebyshev_round_trip_exact() {
        let points = [ri(-2), Ratio::new(-1, 3), ri(0), Ratio::new(1, 2), ri(3)];
        let poly: Polynomial<Ratio<i64>> =
            vec![ri(3), ri(-1), ri(4), ri(1), ri(-5), ri(9), ri(2)].into();
        let chebyshev = poly.chebyshev();
        for x in &points {
            assert_eq!(evaluate_chebyshev(&chebyshev, x), poly.evaluate(*x));
        }
    }

    #[test]
    fn test_chebyshev_round_trip() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        for degree in 0..=6 {
            for _ in 0..20 {
                let poly = random_float_polynomial(&mut rng, degree);
                let chebyshev = polynomial_to_chebyshev(poly.data());
                assert_eq!(chebyshev.len(), poly.size());
                for _ in 0..10 {
                    let x: f64 = rng.gen_range(-1.5..1.5);
                    assert_close(evaluate_chebyshev(&chebyshev, &x), poly.evaluate(x));
                }
            }
        }
    }
}
