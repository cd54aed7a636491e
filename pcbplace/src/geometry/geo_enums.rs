use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The two orientations in which a component can be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
}

impl Rotation {
    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
        }
    }

    /// Dimensions of a `width` x `height` footprint when placed in this orientation
    pub fn placed_dims(&self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Rotation::Deg0 => (width, height),
            Rotation::Deg90 => (height, width),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = anyhow::Error;

    fn try_from(degrees: u16) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            _ => bail!("unsupported rotation: {degrees}°, only 0° and 90° are allowed"),
        }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Sides of the board. The y-axis grows downward, so `Top` is the side at `y = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl BoardSide {
    /// Order in which sides are tested when a rectangle touches more than one (e.g. in a corner)
    pub const PRIORITY: [BoardSide; 4] = [
        BoardSide::Top,
        BoardSide::Bottom,
        BoardSide::Left,
        BoardSide::Right,
    ];
}

impl Display for BoardSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BoardSide::Top => "top",
            BoardSide::Bottom => "bottom",
            BoardSide::Left => "left",
            BoardSide::Right => "right",
        };
        write!(f, "{s}")
    }
}
