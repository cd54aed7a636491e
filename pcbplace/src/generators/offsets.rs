use crate::geometry::primitives::Point;

/// Integer offsets `(dx, dy)` with `dx² + dy² ≤ radius²`.
///
/// Ordered by `dx` first, then `dy`, both ascending from `-radius`.
pub fn offsets_within(radius: u32) -> Vec<(i64, i64)> {
    let r = i64::from(radius);
    //squares of a u32 radius exceed i64
    let r_sq = i128::from(radius).pow(2);
    (-r..=r)
        .flat_map(|dx| (-r..=r).map(move |dy| (dx, dy)))
        .filter(|&(dx, dy)| i128::from(dx).pow(2) + i128::from(dy).pow(2) <= r_sq)
        .collect()
}

/// Grid-aligned top-left corner for a `width` x `height` footprint centered on `target`.
///
/// The half-extents are rounded down before subtracting and the result is
/// snapped down to the unit grid, so integer footprints land on integer coordinates.
pub fn centered_position(target: Point, width: f64, height: f64) -> Point {
    let Point(cx, cy) = target;
    Point(
        (cx - (width / 2.0).floor()).floor(),
        (cy - (height / 2.0).floor()).floor(),
    )
}
