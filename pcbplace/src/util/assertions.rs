use itertools::Itertools;
use log::error;

use crate::entities::{Constraint, Instance, KeepoutZone, Solution};
use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::Edge;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

/// Checks every constraint of the instance against the solution, independently of the search.
pub fn solution_satisfies_constraints(instance: &Instance, solution: &Solution) -> bool {
    if solution.placed.len() != instance.n_components() {
        error!(
            "solution contains {} components, instance has {}",
            solution.placed.len(),
            instance.n_components()
        );
        return false;
    }
    if let Some(pc) = solution
        .placed
        .iter()
        .enumerate()
        .find(|(i, pc)| pc.comp_id != *i)
    {
        error!("placed component {} stored at index {}", pc.1.comp_id, pc.0);
        return false;
    }

    let board = &instance.board;
    let mut los_idx = 0;
    for constraint in &instance.constraints {
        let holds = match constraint {
            Constraint::Containment => solution.placed.iter().all(|pc| board.contains(&pc.bbox)),
            Constraint::PairwiseExclusion => solution
                .placed
                .iter()
                .tuple_combinations()
                .all(|(a, b)| !a.bbox.overlaps(&b.bbox)),
            Constraint::Proximity { a, b, max_distance } => {
                let (ca, cb) = (
                    solution.placed_component(*a).center(),
                    solution.placed_component(*b).center(),
                );
                ca.distance_to(&cb) <= *max_distance
            }
            Constraint::LineOfSight {
                from,
                to,
                obstacle,
                keepout,
            } => {
                let derived =
                    KeepoutZone::derive(board, solution.placed_component(*obstacle), *keepout);
                let recorded = solution.keepouts.get(los_idx);
                los_idx += 1;
                match derived {
                    Ok(zone) if Some(&zone) == recorded => {
                        let sight = Edge::new(
                            solution.placed_component(*from).center(),
                            solution.placed_component(*to).center(),
                        );
                        !zone.rect.collides_with(&sight)
                    }
                    Ok(zone) => {
                        error!("recorded keepout {recorded:?} differs from derived {zone:?}");
                        false
                    }
                    Err(e) => {
                        error!("could not derive keepout: {e}");
                        false
                    }
                }
            }
            Constraint::Balance { tolerance } => {
                solution.center_of_mass.distance_to(&board.center()) <= *tolerance
            }
        };
        if !holds {
            error!("constraint {constraint:?} violated by solution");
            return false;
        }
    }
    true
}
