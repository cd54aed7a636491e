use crate::entities::KeepoutShape;

/// Hard geometric constraint every solution must satisfy.
///
/// Components are referred to by their id within the instance.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    /// Every component lies within the board
    Containment,
    /// No two components overlap with positive area
    PairwiseExclusion,
    /// The centers of `a` and `b` are at most `max_distance` apart
    Proximity { a: usize, b: usize, max_distance: f64 },
    /// The segment between the centers of `from` and `to` does not cross
    /// the keepout zone projected from `obstacle`
    LineOfSight {
        from: usize,
        to: usize,
        obstacle: usize,
        keepout: KeepoutShape,
    },
    /// The center of mass of all components lies within `tolerance` of the board center
    Balance { tolerance: f64 },
}

impl Constraint {
    /// Components which must be placed before the constraint can be evaluated.
    /// `None` means every component of the instance.
    pub fn scope(&self) -> Option<Vec<usize>> {
        match self {
            Constraint::Containment | Constraint::PairwiseExclusion => None,
            Constraint::Balance { .. } => None,
            Constraint::Proximity { a, b, .. } => Some(vec![*a, *b]),
            Constraint::LineOfSight {
                from, to, obstacle, ..
            } => Some(vec![*from, *to, *obstacle]),
        }
    }
}
