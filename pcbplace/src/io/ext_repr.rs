use serde::{Deserialize, Serialize};

use crate::entities::KeepoutShape;
use crate::geometry::geo_enums::{BoardSide, Rotation};
use crate::geometry::primitives::{Point, Rect};

/// The JSON representation of a placement instance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub board: ExtBoard,
    /// Components to place, the order is kept in solutions and reports
    pub components: Vec<ExtComponent>,
    /// Search stages, outermost first
    pub placement: Vec<ExtPlacementRule>,
    pub constraints: Vec<ExtConstraint>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtBoard {
    pub width: f64,
    pub height: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtComponent {
    /// Unique identity of the component, e.g. `"USB"`
    pub id: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ExtPlacementRule {
    MirroredPair {
        a: String,
        b: String,
    },
    EdgeHugging {
        component: String,
    },
    Centered {
        component: String,
    },
    NearReference {
        component: String,
        reference: String,
        radius: u32,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ExtConstraint {
    Containment,
    PairwiseExclusion,
    Proximity {
        a: String,
        b: String,
        max_distance: f64,
    },
    LineOfSight {
        from: String,
        to: String,
        obstacle: String,
        #[serde(default)]
        keepout: KeepoutShape,
    },
    Balance {
        tolerance: f64,
    },
}

impl Default for ExtInstance {
    /// The 50x50 board with a mass-balance pair, a USB connector on the edge,
    /// a centered MCU and a crystal close to the MCU.
    fn default() -> Self {
        let component = |id: &str, width: f64, height: f64| ExtComponent {
            id: id.to_string(),
            width,
            height,
        };
        ExtInstance {
            name: "pcb50".to_string(),
            board: ExtBoard {
                width: 50.0,
                height: 50.0,
            },
            components: vec![
                component("USB", 5.0, 5.0),
                component("MB1", 5.0, 15.0),
                component("MB2", 5.0, 15.0),
                component("MCU", 5.0, 5.0),
                component("CRYSTAL", 5.0, 5.0),
            ],
            placement: vec![
                ExtPlacementRule::MirroredPair {
                    a: "MB1".to_string(),
                    b: "MB2".to_string(),
                },
                ExtPlacementRule::EdgeHugging {
                    component: "USB".to_string(),
                },
                ExtPlacementRule::Centered {
                    component: "MCU".to_string(),
                },
                ExtPlacementRule::NearReference {
                    component: "CRYSTAL".to_string(),
                    reference: "MCU".to_string(),
                    radius: 10,
                },
            ],
            constraints: vec![
                ExtConstraint::Containment,
                ExtConstraint::PairwiseExclusion,
                ExtConstraint::Proximity {
                    a: "CRYSTAL".to_string(),
                    b: "MCU".to_string(),
                    max_distance: 10.0,
                },
                ExtConstraint::LineOfSight {
                    from: "CRYSTAL".to_string(),
                    to: "MCU".to_string(),
                    obstacle: "USB".to_string(),
                    keepout: KeepoutShape::default(),
                },
                ExtConstraint::Balance { tolerance: 2.0 },
            ],
        }
    }
}

/// The JSON representation of the outcome of a search
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    pub instance_name: String,
    pub outcome: ExtOutcome,
    /// Empty unless a solution was found
    pub placed_components: Vec<ExtPlacedComponent>,
    pub keepouts: Vec<ExtKeepout>,
    pub center_of_mass: Option<Point>,
    /// Number of candidates tried during the search
    pub n_candidates: usize,
    /// Wall-clock time spent searching, in seconds
    pub run_time_sec: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtOutcome {
    Found,
    TimedOut,
    Exhausted,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedComponent {
    pub id: String,
    pub top_left: Point,
    pub center: Point,
    /// Rotation in degrees, 0 or 90
    pub rotation: Rotation,
    pub bbox: Rect,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtKeepout {
    /// Component the zone is projected from
    pub owner: String,
    pub side: BoardSide,
    pub rect: Rect,
}
