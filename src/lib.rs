// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Dense single-variable polynomials over generic numeric coefficients: arithmetic, synthetic
//! division, and conversion to the Chebyshev basis.

pub mod chebyshev;
pub mod polynomial;
pub mod prelude;
pub mod traits;
pub mod util;
