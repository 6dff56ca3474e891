#![allow(dead_code)]

use colscore::geometry::{Column, FloorPlan, Point};

/// Corners (0,0) (10,0) (10,10) (0,10), left open.
pub fn square_points() -> Vec<Point> {
    vec![
        Point::planar(0.0, 0.0),
        Point::planar(10.0, 0.0),
        Point::planar(10.0, 10.0),
        Point::planar(0.0, 10.0),
    ]
}

pub fn square_plan() -> FloorPlan {
    FloorPlan::new("square.csv", square_points())
}

/// 10x10 square with the 6x6 upper-right quadrant cut away.
pub fn l_shape_points() -> Vec<Point> {
    vec![
        Point::planar(0.0, 0.0),
        Point::planar(10.0, 0.0),
        Point::planar(10.0, 4.0),
        Point::planar(4.0, 4.0),
        Point::planar(4.0, 10.0),
        Point::planar(0.0, 10.0),
    ]
}

pub fn col(x: f64, y: f64) -> Column {
    Column::new(format!("c_{}_{}", x, y), Point::planar(x, y), 0.5)
}

pub fn cols(coords: &[(f64, f64)]) -> Vec<Column> {
    coords.iter().map(|&(x, y)| col(x, y)).collect()
}
