/*
    Operations
*/

use crate::{Float, Number, Signed};

/// Returns the absolute value of `x`.
///
/// Special cases are:
///  - `abs(±Inf) = +Inf`
///  - `abs(NaN) = NaN` (the same encoding)
///  - `abs(T::MIN) = T::MIN` for signed integers, since the negation wraps
pub fn abs<T: Signed>(x: T) -> T {
    if x.is_nan() || x >= T::zero() {
        return x;
    }
    x.negate()
}

/// Returns a value with the magnitude of `x` and the sign of `y`.
/// The sign of `y` is taken from `y >= 0` or `y < 0`, so a negative
/// zero counts as non-negative.
///
/// Special cases are:
///  - `copysign(NaN, y) = NaN`
///  - `copysign(x, NaN) = abs(x)`
///  - `copysign(T::MIN, y >= 0) = T::MIN` for signed integers
pub fn copysign<T: Signed, U: Signed>(x: T, y: U) -> T {
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return abs(x);
    }

    // same sign => nothing to do
    let x_neg = x < T::zero();
    let y_neg = y < U::zero();
    if x_neg == y_neg {
        return x;
    }
    x.negate()
}

/// Returns the maximum of `x - y` or 0.
///
/// Special cases are:
///  - `dim(+Inf, +Inf) = NaN`
///  - `dim(-Inf, -Inf) = NaN`
///  - `dim(x, NaN) = dim(NaN, x) = NaN`
///
/// Integer subtraction saturates, so unsigned operands
/// never wrap around to a large positive difference.
pub fn dim<T: Number>(x: T, y: T) -> T {
    // The special cases produce NaN in the subtraction:
    //  +Inf - +Inf = NaN
    //  -Inf - -Inf = NaN
    //   NaN - y    = NaN
    //     x - NaN  = NaN
    let v = x.difference(y);
    if v <= T::zero() {
        // v is negative or 0
        return T::zero();
    }
    // v is positive or NaN
    v
}

/// Returns the larger of `x` or `y`.
///
/// Special cases are, in order of precedence:
///  - `max(+Inf, y) = max(x, +Inf) = +Inf`
///  - `max(NaN, y) = max(x, NaN) = NaN`
///  - `max(+0, ±0) = max(±0, +0) = +0`
///  - `max(-0, -0) = -0`
pub fn max<T: Number>(x: T, y: T) -> T {
    if x.is_inf(1) {
        x
    } else if y.is_inf(1) {
        y
    } else if x.is_nan() {
        x
    } else if y.is_nan() {
        y
    } else if x.is_zero() && y.is_zero() {
        if x.is_sign_negative() {
            y
        } else {
            x
        }
    } else if x > y {
        x
    } else {
        y
    }
}

/// Returns the smaller of `x` or `y`.
///
/// Special cases are, in order of precedence:
///  - `min(-Inf, y) = min(x, -Inf) = -Inf`
///  - `min(NaN, y) = min(x, NaN) = NaN`
///  - `min(-0, ±0) = min(±0, -0) = -0`
///  - `min(+0, +0) = +0`
pub fn min<T: Number>(x: T, y: T) -> T {
    if x.is_inf(-1) {
        x
    } else if y.is_inf(-1) {
        y
    } else if x.is_nan() {
        x
    } else if y.is_nan() {
        y
    } else if x.is_zero() && y.is_zero() {
        if x.is_sign_negative() {
            x
        } else {
            y
        }
    } else if x < y {
        x
    } else {
        y
    }
}

/// Reports whether `x` is an IEEE-754 "not-a-number" value.
/// Always false for integers.
pub fn is_nan<T: Number>(x: T) -> bool {
    x.is_nan()
}

/// Reports whether `x` is an infinity, according to `sign`.
/// If `sign > 0`, reports whether `x` is positive infinity.
/// If `sign < 0`, reports whether `x` is negative infinity.
/// If `sign == 0`, reports whether `x` is either infinity.
/// Always false for integers.
pub fn is_inf<T: Number>(x: T, sign: i32) -> bool {
    x.is_inf(sign)
}

/// Returns positive infinity if `sign >= 0`, negative infinity if `sign < 0`.
pub fn inf<F: Float>(sign: i32) -> F {
    F::infinity(sign < 0)
}

/// Returns an IEEE-754 "not-a-number" value.
///
/// The result is the canonical quiet NaN of `F`: positive sign,
/// quiet bit set, empty payload (`0x7FC00000` for `f32`,
/// `0x7FF8000000000000` for `f64`).
pub fn nan<F: Float>() -> F {
    F::nan()
}
