use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use log::info;

use crate::entities::{Board, ComponentSpec, Constraint, Instance, PlacementRule};
use crate::io::ext_repr::{ExtConstraint, ExtInstance, ExtPlacementRule};

/// Converts an external instance into an internal [`Instance`], resolving component
/// identities to ids and validating the result.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let board = Board::try_new(ext_instance.board.width, ext_instance.board.height)
        .with_context(|| format!("invalid board in instance {}", ext_instance.name))?;

    let mut ids: HashMap<&str, usize> = HashMap::new();
    let mut components = vec![];
    for (id, ext_comp) in ext_instance.components.iter().enumerate() {
        if ids.insert(ext_comp.id.as_str(), id).is_some() {
            bail!("duplicate component id: {}", ext_comp.id);
        }
        components.push(ComponentSpec {
            id,
            name: ext_comp.id.clone(),
            width: ext_comp.width,
            height: ext_comp.height,
        });
    }

    let resolve = |name: &str| -> Result<usize> {
        ids.get(name)
            .copied()
            .with_context(|| format!("unknown component id: {name}"))
    };

    let rules = ext_instance
        .placement
        .iter()
        .map(|r| {
            let rule = match r {
                ExtPlacementRule::MirroredPair { a, b } => PlacementRule::MirroredPair {
                    a: resolve(a)?,
                    b: resolve(b)?,
                },
                ExtPlacementRule::EdgeHugging { component } => PlacementRule::EdgeHugging {
                    component: resolve(component)?,
                },
                ExtPlacementRule::Centered { component } => PlacementRule::Centered {
                    component: resolve(component)?,
                },
                ExtPlacementRule::NearReference {
                    component,
                    reference,
                    radius,
                } => PlacementRule::NearReference {
                    component: resolve(component)?,
                    reference: resolve(reference)?,
                    radius: *radius,
                },
            };
            Ok(rule)
        })
        .collect::<Result<Vec<_>>>()?;

    let constraints = ext_instance
        .constraints
        .iter()
        .map(|c| {
            let constraint = match c {
                ExtConstraint::Containment => Constraint::Containment,
                ExtConstraint::PairwiseExclusion => Constraint::PairwiseExclusion,
                ExtConstraint::Proximity { a, b, max_distance } => Constraint::Proximity {
                    a: resolve(a)?,
                    b: resolve(b)?,
                    max_distance: *max_distance,
                },
                ExtConstraint::LineOfSight {
                    from,
                    to,
                    obstacle,
                    keepout,
                } => Constraint::LineOfSight {
                    from: resolve(from)?,
                    to: resolve(to)?,
                    obstacle: resolve(obstacle)?,
                    keepout: *keepout,
                },
                ExtConstraint::Balance { tolerance } => Constraint::Balance {
                    tolerance: *tolerance,
                },
            };
            Ok(constraint)
        })
        .collect::<Result<Vec<_>>>()?;

    let instance = Instance {
        name: ext_instance.name.clone(),
        board,
        components,
        rules,
        constraints,
    };
    instance
        .validate()
        .with_context(|| format!("invalid instance {}", instance.name))?;

    info!(
        "[IMPORT] instance {}: {}x{} board, {} components, {} stages, {} constraints",
        instance.name,
        instance.board.width,
        instance.board.height,
        instance.n_components(),
        instance.rules.len(),
        instance.constraints.len()
    );

    Ok(instance)
}
