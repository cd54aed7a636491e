use std::fmt;
use std::fmt::Write;

use crate::entities::{Instance, Solution};

/// Message written in place of a report when no solution was found
pub const NO_SOLUTION_MESSAGE: &str = "No solution found";

/// Human-readable summary of a solution: every component's top-left corner, center and rotation,
/// the center of mass and the keepout zones.
pub fn solution_report(instance: &Instance, solution: Option<&Solution>) -> String {
    let Some(solution) = solution else {
        return format!("{NO_SOLUTION_MESSAGE}\n");
    };

    let mut report = String::new();
    write_report(&mut report, instance, solution)
        .map(|_| report)
        .unwrap_or_default()
}

fn write_report(out: &mut impl Write, instance: &Instance, solution: &Solution) -> fmt::Result {
    writeln!(out, "PCB Placement Solution ({})\n", instance.name)?;
    for pc in &solution.placed {
        writeln!(
            out,
            "{}: top-left={}, center={}, rot={}",
            instance.component(pc.comp_id).name,
            pc.position,
            pc.center(),
            pc.rotation
        )?;
    }
    writeln!(out, "Center of Mass: {}", solution.center_of_mass)?;
    for keepout in &solution.keepouts {
        writeln!(
            out,
            "Keepout ({}, {} side): {}",
            instance.component(keepout.owner).name,
            keepout.side,
            keepout.rect
        )?;
    }
    Ok(())
}
