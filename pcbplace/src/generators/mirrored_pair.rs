use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::entities::{Board, ComponentSpec, Placement};
use crate::generators::grid_positions;
use crate::geometry::geo_enums::Rotation;
use crate::geometry::primitives::Point;

/// How the twins of a mirrored pair are arranged on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairOrientation {
    /// Upright, against the left and right sides at the same height
    Vertical,
    /// Rotated by 90°, against the top and bottom sides at the same horizontal offset
    Horizontal,
}

impl Display for PairOrientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PairOrientation::Vertical => write!(f, "vertical"),
            PairOrientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Candidate placements for two twins, mirror images of each other across the board center
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MirroredPair {
    pub orientation: PairOrientation,
    pub twins: [Placement; 2],
}

/// Enumerates all mirrored placements of twins `a` and `b` at the given step:
/// first every vertical arrangement (top to bottom), then every horizontal one (left to right).
///
/// Both twins are expected to share the footprint of `a`.
pub fn generate_mirrored_pairs(
    board: &Board,
    a: &ComponentSpec,
    b: &ComponentSpec,
    step: f64,
) -> Vec<MirroredPair> {
    let (w, h) = (a.width, a.height);

    let vertical = grid_positions(board.height - h, step).map(|y| MirroredPair {
        orientation: PairOrientation::Vertical,
        twins: [
            Placement {
                comp_id: a.id,
                position: Point(0.0, y),
                rotation: Rotation::Deg0,
            },
            Placement {
                comp_id: b.id,
                position: Point(board.width - w, y),
                rotation: Rotation::Deg0,
            },
        ],
    });

    //rotated by 90°, the footprint becomes h wide and w high
    let horizontal = grid_positions(board.width - h, step).map(|x| MirroredPair {
        orientation: PairOrientation::Horizontal,
        twins: [
            Placement {
                comp_id: a.id,
                position: Point(x, 0.0),
                rotation: Rotation::Deg90,
            },
            Placement {
                comp_id: b.id,
                position: Point(x, board.height - w),
                rotation: Rotation::Deg90,
            },
        ],
    });

    vertical.chain(horizontal).collect()
}
