use anyhow::{Context, Result, ensure};

use crate::entities::{KeepoutZone, Layout, PlacedComponent};
use crate::geometry::primitives::Point;

/// A fully constraint-satisfying assignment of all components.
///
/// Created once, when the search accepts an assignment, and never modified afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// All placed components, indexed by component id
    pub placed: Vec<PlacedComponent>,
    /// Keepout zones, one per line-of-sight constraint, in the order of the instance constraints
    pub keepouts: Vec<KeepoutZone>,
    /// Unweighted centroid of all component centers
    pub center_of_mass: Point,
}

impl Solution {
    pub fn from_layout(layout: &Layout, keepouts: Vec<KeepoutZone>) -> Result<Self> {
        ensure!(
            layout.is_complete(),
            "cannot create a solution from an incomplete layout ({} placed)",
            layout.n_placed()
        );
        let placed = layout.placed_components().cloned().collect::<Vec<_>>();
        let center_of_mass = Point::centroid_of(placed.iter().map(|pc| pc.center()))
            .context("cannot create a solution without components")?;
        Ok(Solution {
            placed,
            keepouts,
            center_of_mass,
        })
    }

    pub fn placed_component(&self, comp_id: usize) -> &PlacedComponent {
        &self.placed[comp_id]
    }
}
