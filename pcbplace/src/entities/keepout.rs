use anyhow::{Context, Result, ensure};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::entities::{Board, PlacedComponent};
use crate::geometry::geo_enums::BoardSide;
use crate::geometry::primitives::Rect;

/// Maximum distance between a component side and a board side for them to be considered touching
pub const EDGE_TOUCH_TOLERANCE: f64 = 1e-6;

/// Size of the rectangle projected from a board edge into the board.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct KeepoutShape {
    /// Extent parallel to the touched board edge, centered on the component
    pub width: f64,
    /// Extent perpendicular to the touched board edge
    pub depth: f64,
}

impl Default for KeepoutShape {
    fn default() -> Self {
        Self {
            width: 5.0,
            depth: 15.0,
        }
    }
}

/// Exclusion rectangle in front of a component placed against a board edge.
///
/// Only used as an obstacle for line-of-sight checks, never for overlap checks.
#[derive(Clone, Debug, PartialEq)]
pub struct KeepoutZone {
    /// Component from which the zone is projected
    pub owner: usize,
    /// Board side the owner touches
    pub side: BoardSide,
    pub rect: Rect,
}

impl KeepoutZone {
    /// Derives the keepout zone of a component touching at least one side of the board.
    ///
    /// When several sides are touched (corner placement), the first one in
    /// [`BoardSide::PRIORITY`] is used. A component touching no side is an error.
    pub fn derive(board: &Board, owner: &PlacedComponent, shape: KeepoutShape) -> Result<Self> {
        ensure!(
            shape.width > 0.0 && shape.depth > 0.0,
            "keepout dimensions must be positive: {shape:?}"
        );
        let bbox = &owner.bbox;
        let side = board
            .touched_sides(bbox, EDGE_TOUCH_TOLERANCE)
            .next()
            .with_context(|| {
                format!(
                    "component {} at {} touches no board edge, cannot derive keepout",
                    owner.comp_id, bbox
                )
            })?;

        let half_width = shape.width / 2.0;
        let c = bbox.centroid();
        let projected = match side {
            BoardSide::Top => Rect::try_new(
                c.x() - half_width,
                bbox.y_min,
                c.x() + half_width,
                bbox.y_min + shape.depth,
            ),
            BoardSide::Bottom => Rect::try_new(
                c.x() - half_width,
                bbox.y_max - shape.depth,
                c.x() + half_width,
                bbox.y_max,
            ),
            BoardSide::Left => Rect::try_new(
                bbox.x_min,
                c.y() - half_width,
                bbox.x_min + shape.depth,
                c.y() + half_width,
            ),
            BoardSide::Right => Rect::try_new(
                bbox.x_max - shape.depth,
                c.y() - half_width,
                bbox.x_max,
                c.y() + half_width,
            ),
        }?;

        let rect = Rect::intersection(projected, board.bbox)
            .with_context(|| format!("keepout {projected} lies outside of the board"))?;

        debug!(
            "[KEEPOUT] component {} touches {side} side, keepout: {rect}",
            owner.comp_id
        );

        Ok(KeepoutZone {
            owner: owner.comp_id,
            side,
            rect,
        })
    }
}
