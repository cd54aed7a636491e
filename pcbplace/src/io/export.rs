use std::time::Duration;

use crate::entities::{Instance, Solution};
use crate::io::ext_repr::{ExtKeepout, ExtOutcome, ExtPlacedComponent, ExtSolution};
use crate::search::SearchOutcome;

/// Exports the outcome of a search to its external representation.
pub fn export(
    instance: &Instance,
    outcome: &SearchOutcome,
    n_candidates: usize,
    run_time: Duration,
) -> ExtSolution {
    let ext_outcome = match outcome {
        SearchOutcome::Found(_) => ExtOutcome::Found,
        SearchOutcome::TimedOut => ExtOutcome::TimedOut,
        SearchOutcome::Exhausted => ExtOutcome::Exhausted,
    };

    let (placed_components, keepouts) = match outcome.solution() {
        Some(solution) => (
            export_placed_components(instance, solution),
            export_keepouts(instance, solution),
        ),
        None => (vec![], vec![]),
    };

    ExtSolution {
        instance_name: instance.name.clone(),
        outcome: ext_outcome,
        placed_components,
        keepouts,
        center_of_mass: outcome.solution().map(|s| s.center_of_mass),
        n_candidates,
        run_time_sec: run_time.as_secs_f64(),
    }
}

fn export_placed_components(instance: &Instance, solution: &Solution) -> Vec<ExtPlacedComponent> {
    solution
        .placed
        .iter()
        .map(|pc| ExtPlacedComponent {
            id: instance.component(pc.comp_id).name.clone(),
            top_left: pc.position,
            center: pc.center(),
            rotation: pc.rotation,
            bbox: pc.bbox,
        })
        .collect()
}

fn export_keepouts(instance: &Instance, solution: &Solution) -> Vec<ExtKeepout> {
    solution
        .keepouts
        .iter()
        .map(|k| ExtKeepout {
            owner: instance.component(k.owner).name.clone(),
            side: k.side,
            rect: k.rect,
        })
        .collect()
}
