use serde::{Deserialize, Serialize};

/// A position in plan coordinates. `z` is carried through but planar
/// operations only look at `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point on the floor plane (z = 0).
    pub fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub position: Point,
    // Footprint for rendering; scoring ignores it
    #[serde(default)]
    pub size: f64,
}

impl Column {
    pub fn new(id: impl Into<String>, position: Point, size: f64) -> Self {
        Self {
            id: id.into(),
            position,
            size,
        }
    }
}

/// A traced floor-plan outline plus the identity used for history lookups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorPlan {
    pub points: Vec<Point>,
    pub name: String,
    pub id: String,
}

impl FloorPlan {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            points,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Axis-aligned bounds over the x/y components. `None` for an empty slice.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        Some(points.iter().skip(1).fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Euclidean distance over all three components.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Even-odd ray casting over x/y. The outline is closed implicitly when its
/// last vertex differs from its first. Horizontal edges never count as a
/// crossing, so the intersection formula is never evaluated with `yi == yj`.
pub fn point_in_polygon(p: &Point, polygon: &[Point]) -> bool {
    let len = polygon.len();
    if len == 0 {
        return false;
    }

    let closed = polygon[0] == polygon[len - 1];
    let n = if closed { len } else { len + 1 };

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = &polygon[i % len];
        let vj = &polygon[j % len];
        j = i;

        if vi.y == vj.y {
            continue;
        }

        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }

    inside
}
