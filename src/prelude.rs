// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    chebyshev::{chebyshev_coefficient, evaluate_chebyshev, polynomial_to_chebyshev},
    polynomial::{quotient_remainder, unchecked_synthetic_division, DivisionByZero, Polynomial},
    traits::{Coefficient, MakeCoefficient, PolynomialEval},
};
pub use num_traits::{
    CheckedAdd as _, CheckedDiv as _, CheckedMul as _, CheckedRem as _, CheckedSub as _, One as _,
    Zero as _,
};
