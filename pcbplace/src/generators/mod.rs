mod edge;
mod mirrored_pair;
mod offsets;

#[doc(inline)]
pub use edge::generate_edge_placements;
#[doc(inline)]
pub use mirrored_pair::{MirroredPair, PairOrientation, generate_mirrored_pairs};
#[doc(inline)]
pub use offsets::{centered_position, offsets_within};

/// Positions `0, step, 2·step, ...` up to and including `extent`.
/// Empty if `extent` is negative (the footprint does not fit).
pub fn grid_positions(extent: f64, step: f64) -> impl Iterator<Item = f64> {
    debug_assert!(step > 0.0);
    //small slack so that an extent which is a multiple of step is not lost to rounding
    let n_steps = match extent >= 0.0 {
        true => Some((extent / step + 1e-9).floor() as usize),
        false => None,
    };
    n_steps
        .into_iter()
        .flat_map(move |n| (0..=n).map(move |i| i as f64 * step))
}
