//! Reference positions for column placement.
//!
//! This is a coarse interior-sampling heuristic, not a structural optimum:
//! the plan's bounding box is cut into square cells of `grid_size`, and every
//! cell center that falls inside the outline is kept. Scores and fixtures are
//! defined relative to exactly this sampling, so it must not be swapped for a
//! smarter placement search.

use crate::geometry::{point_in_polygon, BoundingBox, Point};
use tracing::debug;

pub const DEFAULT_GRID_SIZE: f64 = 3.0;

/// Cell centers inside `polygon`, x index outer and y index inner. Empty for outlines with fewer than three vertices, for a
/// non-positive or non-finite step, and along any axis narrower than one cell.
pub fn compute_optimal_positions(polygon: &[Point], grid_size: f64) -> Vec<Point> {
    if polygon.len() < 3 || !grid_size.is_finite() || grid_size <= 0.0 {
        return Vec::new();
    }

    let bounds = match BoundingBox::of(polygon) {
        Some(b) => b,
        None => return Vec::new(),
    };

    let num_cols = cell_count(bounds.width(), grid_size);
    let num_rows = cell_count(bounds.height(), grid_size);

    let mut positions = Vec::new();
    for i in 0..num_cols {
        for j in 0..num_rows {
            let center = Point::planar(
                bounds.min_x + (i as f64 + 0.5) * grid_size,
                bounds.min_y + (j as f64 + 0.5) * grid_size,
            );
            if point_in_polygon(&center, polygon) {
                positions.push(center);
            }
        }
    }

    debug!(
        "Sampled {}x{} grid (step {}), kept {} interior centers",
        num_cols,
        num_rows,
        grid_size,
        positions.len()
    );

    positions
}

#[inline]
fn cell_count(extent: f64, grid_size: f64) -> usize {
    let n = (extent / grid_size).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count_floors() {
        assert_eq!(cell_count(10.0, 3.0), 3);
        assert_eq!(cell_count(2.9, 3.0), 0);
        assert_eq!(cell_count(0.0, 3.0), 0);
    }

    #[test]
    fn test_rejects_bad_step() {
        let square = vec![
            Point::planar(0.0, 0.0),
            Point::planar(10.0, 0.0),
            Point::planar(10.0, 10.0),
        ];
        assert!(compute_optimal_positions(&square, 0.0).is_empty());
        assert!(compute_optimal_positions(&square, -1.0).is_empty());
        assert!(compute_optimal_positions(&square, f64::NAN).is_empty());
    }
}
