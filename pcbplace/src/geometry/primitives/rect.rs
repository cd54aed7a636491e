use std::fmt::{Display, Formatter};

use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;

/// Below this magnitude, a segment direction component is treated as parallel to a rectangle side
const PARALLEL_EPSILON: f64 = 1e-12;

/// Axis-aligned rectangle.
///
/// The y-axis grows downward: `y_min` is the top side and `y_max` the bottom side.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its top-left corner at `corner` and the given dimensions.
    pub fn from_corner(corner: Point, width: f64, height: f64) -> Result<Self> {
        let Point(x, y) = corner;
        Rect::try_new(x, y, x + width, y + height)
    }

    /// Returns true iff the interiors of `self` and `other` intersect with a positive area.
    ///
    /// Rectangles sharing only (part of) an edge or a corner do not overlap.
    #[inline(always)]
    pub fn overlaps(&self, other: &Rect) -> bool {
        f64::max(self.x_min, other.x_min) < f64::min(self.x_max, other.x_max)
            && f64::max(self.y_min, other.y_min) < f64::min(self.y_max, other.y_max)
    }

    /// Returns true iff `other` lies entirely within `self`, boundaries included.
    #[inline(always)]
    pub fn contains(&self, other: &Rect) -> bool {
        other.x_min >= self.x_min
            && other.y_min >= self.y_min
            && other.x_max <= self.x_max
            && other.y_max <= self.y_max
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x_min, b.x_min);
        let y_min = f64::max(a.y_min, b.y_min);
        let x_max = f64::min(a.x_max, b.x_max);
        let y_max = f64::min(a.y_max, b.y_max);
        Rect::try_new(x_min, y_min, x_max, y_max).ok()
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Returns a rectangle with the same centroid, expanded by `dx` on both x-sides and `dy` on both y-sides.
    /// Returns `None` if the result would be degenerate.
    pub fn resize_by(self, dx: f64, dy: f64) -> Option<Self> {
        Rect::try_new(
            self.x_min - dx,
            self.y_min - dy,
            self.x_max + dx,
            self.y_max + dy,
        )
        .ok()
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl CollidesWith<Edge> for Rect {
    /// Liang–Barsky clipping of the edge against `self`.
    ///
    /// The edge is parametrized as `start + t·(end - start)` with `t ∈ [0, 1]`.
    /// Each side of the rectangle bounds `t` from one direction, the edge collides
    /// iff the remaining interval `[u1, u2]` is not empty.
    #[inline(always)]
    fn collides_with(&self, edge: &Edge) -> bool {
        let Point(x0, y0) = edge.start;
        let Point(x1, y1) = edge.end;
        let (dx, dy) = (x1 - x0, y1 - y0);

        let constraints = [
            (-dx, x0 - self.x_min),
            (dx, self.x_max - x0),
            (-dy, y0 - self.y_min),
            (dy, self.y_max - y0),
        ];

        let (mut u1, mut u2) = (0.0, 1.0);
        for (p, q) in constraints {
            if p.abs() < PARALLEL_EPSILON {
                if q < 0.0 {
                    //parallel to this side and entirely on the outside of it
                    return false;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                //entering
                if t > u2 {
                    return false;
                }
                u1 = f64::max(u1, t);
            } else {
                //leaving
                if t < u1 {
                    return false;
                }
                u2 = f64::min(u2, t);
            }
        }
        u1 <= u2
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[x_min: {}, y_min: {}, x_max: {}, y_max: {}]",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}
