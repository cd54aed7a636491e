use crate::entities::PlacedComponent;
use crate::geometry::primitives::Point;

/// A (partial) assignment of components to positions.
///
/// Slots are indexed by component id. During the search the driver commits and
/// discards placements as it advances through the candidate space.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    slots: Vec<Option<PlacedComponent>>,
}

impl Layout {
    pub fn new(n_components: usize) -> Self {
        Layout {
            slots: vec![None; n_components],
        }
    }

    /// Commits a placed component to its slot.
    pub fn place(&mut self, pc: PlacedComponent) {
        let slot = &mut self.slots[pc.comp_id];
        debug_assert!(slot.is_none(), "component {} already placed", pc.comp_id);
        *slot = Some(pc);
    }

    /// Discards the placement of a component, returning it if there was one.
    pub fn remove(&mut self, comp_id: usize) -> Option<PlacedComponent> {
        self.slots[comp_id].take()
    }

    pub fn get(&self, comp_id: usize) -> Option<&PlacedComponent> {
        self.slots[comp_id].as_ref()
    }

    pub fn placed_components(&self) -> impl Iterator<Item = &PlacedComponent> {
        self.slots.iter().flatten()
    }

    pub fn n_placed(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Unweighted centroid of the centers of all placed components
    pub fn center_of_mass(&self) -> Option<Point> {
        Point::centroid_of(self.placed_components().map(|pc| pc.center()))
    }
}
