//! Easing curves for the flight scroll.

/// Cubic ease-in/ease-out.
///
/// For normalized progress `t` in `[0, 1]`: `4t³` below the midpoint,
/// `1 - (-2t + 2)³ / 2` above it. Symmetric around `(0.5, 0.5)`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
