/*
    Logarithms and binary exponents
*/

use num_traits::AsPrimitive;

use crate::{Float, Number};

/// Returns the natural logarithm of `x`.
///
/// Special cases are:
///  - `log(+Inf) = +Inf`
///  - `log(0) = -Inf`
///  - `log(x < 0) = NaN`
///  - `log(NaN) = NaN`
///
/// The input is converted to an `f64` first, so integers
/// above 2^53 may lose precision.
pub fn log<T: Number>(x: T) -> f64 {
    AsPrimitive::<f64>::as_(x).ln()
}

/// Returns the decimal logarithm of `x`.
/// The special cases are the same as for [`log`].
///
/// The input is converted to an `f64` first, so integers
/// above 2^53 may lose precision.
pub fn log10<T: Number>(x: T) -> f64 {
    AsPrimitive::<f64>::as_(x).log10()
}

/// Returns the natural logarithm of 1 plus `x`.
/// It is more accurate than `log(1 + x)` when `x` is near zero.
///
/// Special cases are:
///  - `log1p(+Inf) = +Inf`
///  - `log1p(±0) = ±0`
///  - `log1p(-1) = -Inf`
///  - `log1p(x < -1) = NaN`
///  - `log1p(NaN) = NaN`
///
/// The input is converted to an `f64` first, so integers
/// above 2^53 may lose precision.
pub fn log1p<T: Number>(x: T) -> f64 {
    AsPrimitive::<f64>::as_(x).ln_1p()
}

/// Returns the binary logarithm of `x`.
/// The special cases are the same as for [`log`].
///
/// The input is converted to an `f64` first, so integers
/// above 2^53 may lose precision.
pub fn log2<T: Number>(x: T) -> f64 {
    AsPrimitive::<f64>::as_(x).log2()
}

/// Returns the binary exponent of `x`.
///
/// Special cases are:
///  - `logb(±Inf) = +Inf`
///  - `logb(±0) = -Inf`
///  - `logb(NaN) = NaN` (the same encoding)
pub fn logb<F: Float>(x: F) -> F {
    let c = x.class();
    if c.is_zero() {
        return F::infinity(true);
    }
    if c.is_infinity() {
        return F::infinity(false);
    }
    if c.is_nan() {
        // widening would quiet a signaling NaN
        return x;
    }
    F::from_f64(exponent(x.as_()) as f64)
}

/// Returns the binary exponent of `x` as an integer.
///
/// Special cases are:
///  - `ilogb(±Inf) = i32::MAX`
///  - `ilogb(±0) = i32::MIN`
///  - `ilogb(NaN) = i32::MAX`
///
/// The input is converted to an `f64` first, so integers
/// above 2^53 may round up into the next binade.
pub fn ilogb<T: Number>(x: T) -> i32 {
    if x.is_zero() {
        return i32::MIN;
    }
    if x.is_inf(0) || x.is_nan() {
        return i32::MAX;
    }
    exponent(x.as_()) as i32
}

// Returns the unbiased exponent of a finite, non-zero double.
// Widening to binary64 is exact for every narrower float format.
fn exponent(w: f64) -> i64 {
    match w.class().exponent() {
        Some(e) => e,
        None => panic!("called on a non-finite or zero float: {:?}", w.class()),
    }
}
