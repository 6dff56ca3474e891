use crate::geometry::{distance, Column, Point};

/// Distance at which a placement stops earning any credit.
pub const TOLERANCE_RADIUS: f64 = 5.0;

/// Linear falloff: 1.0 at distance 0, clamped to 0.0 from the tolerance radius on.
#[inline]
pub fn falloff(d: f64) -> f64 {
    (1.0 - d / TOLERANCE_RADIUS).max(0.0)
}

/// Smallest distance from `p` to any of `targets`; infinite when there are none.
pub fn nearest_distance<'a, I>(p: &Point, targets: I) -> f64
where
    I: IntoIterator<Item = &'a Point>,
{
    targets
        .into_iter()
        .map(|t| distance(p, t))
        .fold(f64::INFINITY, f64::min)
}

/// Mean falloff of each column's nearest distance into `targets`.
/// Zero when there are no columns.
pub fn mean_falloff(columns: &[Column], targets: &[Point]) -> f64 {
    if columns.is_empty() {
        return 0.0;
    }
    let total: f64 = columns
        .iter()
        .map(|c| falloff(nearest_distance(&c.position, targets)))
        .sum();
    total / columns.len() as f64
}

/// Fraction in [0, 1] to a whole percentage.
#[inline]
pub fn to_percentage(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}
