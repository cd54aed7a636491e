mod candidate;
mod driver;
mod outcome;
mod plan;

#[doc(inline)]
pub use candidate::Candidate;
#[doc(inline)]
pub use driver::PlacementSearch;
#[doc(inline)]
pub use outcome::SearchOutcome;
#[doc(inline)]
pub use plan::{Check, KeepoutDerivation, SearchPlan, StagePlan};

use anyhow::Result;

use crate::entities::{Instance, Solution};
use crate::util::SearchConfig;

/// Searches for the first feasible placement of all components of `instance`.
///
/// Does not distinguish between a timed out and an exhausted search, both yield `None`.
/// Use [`PlacementSearch`] directly to tell them apart.
pub fn find_solution(instance: &Instance, config: SearchConfig) -> Result<Option<Solution>> {
    let outcome = PlacementSearch::new(instance, config)?.solve()?;
    Ok(outcome.into_solution())
}
