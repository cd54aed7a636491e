/// Describes how the candidates of one search stage are generated.
///
/// Stages are searched in the order the rules appear in the instance, outermost first.
#[derive(Clone, Debug, PartialEq)]
pub enum PlacementRule {
    /// Two components with the same footprint, mirrored across the board center:
    /// either upright against the left and right sides, or rotated against the top and bottom sides.
    MirroredPair { a: usize, b: usize },
    /// A component placed against one of the four board sides
    EdgeHugging { component: usize },
    /// A component placed at the center of the board, not searched
    Centered { component: usize },
    /// A component placed at an integer offset within `radius` from the center of `reference`
    NearReference {
        component: usize,
        reference: usize,
        radius: u32,
    },
}

impl PlacementRule {
    /// Components placed by this rule
    pub fn components(&self) -> Vec<usize> {
        match self {
            PlacementRule::MirroredPair { a, b } => vec![*a, *b],
            PlacementRule::EdgeHugging { component }
            | PlacementRule::Centered { component }
            | PlacementRule::NearReference { component, .. } => vec![*component],
        }
    }
}
