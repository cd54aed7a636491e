use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::DistanceTo;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    /// Unweighted centroid of a set of points, `None` if the set is empty.
    pub fn centroid_of(points: impl IntoIterator<Item = Point>) -> Option<Point> {
        let (n, sum_x, sum_y) = points
            .into_iter()
            .fold((0usize, 0.0, 0.0), |(n, sx, sy), Point(x, y)| {
                (n + 1, sx + x, sy + y)
            });
        match n {
            0 => None,
            _ => Some(Point(sum_x / n as f64, sum_y / n as f64)),
        }
    }
}

impl DistanceTo<Point> for Point {
    #[inline(always)]
    fn distance_to(&self, other: &Point) -> f64 {
        f64::hypot(self.0 - other.0, self.1 - other.1)
    }

    #[inline(always)]
    fn sq_distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
