use std::fmt::{Display, Formatter};

use crate::entities::Solution;

/// Result of a placement search
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// The first assignment, in search order, which satisfies every constraint
    Found(Solution),
    /// The time budget ran out before a solution was found, unexplored candidates remain
    TimedOut,
    /// Every candidate was explored, no assignment satisfies all constraints
    Exhausted,
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::TimedOut | SearchOutcome::Exhausted => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::TimedOut | SearchOutcome::Exhausted => None,
        }
    }
}

impl Display for SearchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SearchOutcome::Found(_) => "found",
            SearchOutcome::TimedOut => "timed out",
            SearchOutcome::Exhausted => "exhausted",
        };
        write!(f, "{s}")
    }
}
