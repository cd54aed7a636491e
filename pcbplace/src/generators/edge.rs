use crate::entities::{Board, ComponentSpec, Placement};
use crate::generators::grid_positions;
use crate::geometry::geo_enums::Rotation;
use crate::geometry::primitives::Point;

/// Enumerates all placements of a component against the board sides at the given step.
///
/// Upright placements sweep along the top and bottom sides (alternating per position),
/// followed by 90° rotated placements sweeping along the left and right sides.
pub fn generate_edge_placements(board: &Board, spec: &ComponentSpec, step: f64) -> Vec<Placement> {
    let place = |x: f64, y: f64, rotation: Rotation| Placement {
        comp_id: spec.id,
        position: Point(x, y),
        rotation,
    };

    let (w0, h0) = Rotation::Deg0.placed_dims(spec.width, spec.height);
    let top_bottom = grid_positions(board.width - w0, step).flat_map(|x| {
        [
            place(x, 0.0, Rotation::Deg0),
            place(x, board.height - h0, Rotation::Deg0),
        ]
    });

    let (w90, h90) = Rotation::Deg90.placed_dims(spec.width, spec.height);
    let left_right = grid_positions(board.height - h90, step).flat_map(|y| {
        [
            place(0.0, y, Rotation::Deg90),
            place(board.width - w90, y, Rotation::Deg90),
        ]
    });

    top_bottom.chain(left_right).collect()
}
