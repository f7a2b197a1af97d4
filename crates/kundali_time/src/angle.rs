//! Periodic wrapping shared by every crate that handles angles or hours.

/// Wrap `value` into `[0, period)`.
///
/// `rem_euclid` can return `period` itself for tiny negative inputs; that
/// case is folded back to zero.
pub fn wrap(value: f64, period: f64) -> f64 {
    let r = value.rem_euclid(period);
    if r >= period { 0.0 } else { r }
}

/// Normalize an angle to `[0, 360)` degrees.
pub fn normalize_360(deg: f64) -> f64 {
    wrap(deg, 360.0)
}
