use crate::entities::Placement;
use crate::generators::MirroredPair;

/// One fully specified option for a search stage
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Candidate {
    Single(Placement),
    Pair(MirroredPair),
}

impl Candidate {
    /// All placements committed when this candidate is tried
    pub fn placements(&self) -> &[Placement] {
        match self {
            Candidate::Single(p) => std::slice::from_ref(p),
            Candidate::Pair(pair) => &pair.twins,
        }
    }
}
