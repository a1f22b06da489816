//! Two-dimensional point value type.

/// Immutable point in image space.
///
/// `x` is the column axis and `y` is the row axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x (column) coordinate.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y (row) coordinate.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the coordinates as an `(x, y)` tuple.
    pub const fn to_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub(crate) fn distance_sq(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        point.to_tuple()
    }
}
