use anyhow::Result;

use crate::entities::ComponentSpec;
use crate::geometry::geo_enums::Rotation;
use crate::geometry::primitives::{Point, Rect};

/// Position and orientation assigned to a component, not yet materialized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub comp_id: usize,
    /// Top-left corner of the placed footprint
    pub position: Point,
    pub rotation: Rotation,
}

/// A component materialized at a [`Placement`], with its derived geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedComponent {
    pub comp_id: usize,
    pub position: Point,
    pub rotation: Rotation,
    /// Bounding rectangle of the placed footprint
    pub bbox: Rect,
}

impl PlacedComponent {
    pub fn new(spec: &ComponentSpec, placement: Placement) -> Result<Self> {
        debug_assert_eq!(spec.id, placement.comp_id);
        let (w, h) = placement.rotation.placed_dims(spec.width, spec.height);
        let bbox = Rect::from_corner(placement.position, w, h)?;
        Ok(PlacedComponent {
            comp_id: spec.id,
            position: placement.position,
            rotation: placement.rotation,
            bbox,
        })
    }

    pub fn center(&self) -> Point {
        self.bbox.centroid()
    }
}
