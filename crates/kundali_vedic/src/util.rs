//! Shared angle helpers for vedic calculations.

pub use kundali_time::normalize_360;

/// Forward arc from `a` to `b` in degrees, in [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_360(b - a)
}
