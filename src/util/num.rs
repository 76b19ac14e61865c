/// Smallest `f64` strictly above the `i64` range (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// Smallest `f64` inside the `i64` range (`-2^63`).
const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest `f64`.
///
/// Every integer of magnitude up to `2^53` converts exactly; larger values
/// are rounded to the nearest representable double.
///
/// ## Example
/// ```
/// use ccalc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// assert_eq!(i64_to_f64(1 << 60), 1_152_921_504_606_846_976.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` if and only if the value is finite, integral
/// and inside the `i64` range.
///
/// ## Returns
/// - `Some(i64)`: The exact integer value.
/// - `None`: If the value is fractional, non-finite or out of range.
///
/// ## Example
/// ```
/// use ccalc::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(12.0), Some(12));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e19), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if !(I64_LOWER_BOUND..I64_UPPER_BOUND).contains(&value) {
        return None;
    }
    Some(value as i64)
}

/// Converts an `f64` to `i64` the way a C cast does, truncating toward zero.
///
/// Values outside the `i64` range saturate and NaN becomes zero.
///
/// ## Example
/// ```
/// use ccalc::util::num::f64_to_i64_truncating;
///
/// assert_eq!(f64_to_i64_truncating(-3.9), -3);
/// assert_eq!(f64_to_i64_truncating(1e300), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i64_truncating(value: f64) -> i64 {
    value as i64
}

/// Safely converts an `i64` to `u32` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use ccalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45, "bad"), Ok(45));
/// assert_eq!(i64_to_u32_checked(-1, "bad"), Err("bad"));
/// assert_eq!(i64_to_u32_checked(i64::MAX, "bad"), Err("bad"));
/// ```
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}
