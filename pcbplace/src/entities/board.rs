use anyhow::{Result, ensure};
use float_cmp::approx_eq;

use crate::geometry::geo_enums::BoardSide;
use crate::geometry::primitives::{Point, Rect};

/// Rectangular placement surface with its origin at (0, 0).
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub width: f64,
    pub height: f64,
    /// `[0, width] × [0, height]`
    pub bbox: Rect,
}

impl Board {
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "board dimensions must be positive, width: {width}, height: {height}"
        );
        let bbox = Rect::try_new(0.0, 0.0, width, height)?;
        Ok(Board {
            width,
            height,
            bbox,
        })
    }

    pub fn center(&self) -> Point {
        self.bbox.centroid()
    }

    /// Returns true iff `rect` lies within the board, boundaries included.
    pub fn contains(&self, rect: &Rect) -> bool {
        self.bbox.contains(rect)
    }

    /// Returns true iff `rect` touches the given side of the board, within `tolerance`.
    pub fn touches(&self, rect: &Rect, side: BoardSide, tolerance: f64) -> bool {
        let (coord, edge) = match side {
            BoardSide::Top => (rect.y_min, 0.0),
            BoardSide::Bottom => (rect.y_max, self.height),
            BoardSide::Left => (rect.x_min, 0.0),
            BoardSide::Right => (rect.x_max, self.width),
        };
        approx_eq!(f64, coord, edge, epsilon = tolerance)
    }

    /// All sides of the board touched by `rect`, in [`BoardSide::PRIORITY`] order.
    pub fn touched_sides(&self, rect: &Rect, tolerance: f64) -> impl Iterator<Item = BoardSide> {
        BoardSide::PRIORITY
            .into_iter()
            .filter(move |side| self.touches(rect, *side, tolerance))
    }
}
