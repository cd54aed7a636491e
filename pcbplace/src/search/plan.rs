use std::borrow::Cow;

use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::debug;

use crate::entities::{
    Board, Constraint, Instance, KeepoutShape, KeepoutZone, Layout, PlacedComponent, Placement,
    PlacementRule,
};
use crate::generators;
use crate::geometry::geo_enums::Rotation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::{Edge, Point};
use crate::search::Candidate;
use crate::util::SearchConfig;

/// Upper bound on the number of grid positions along a board side
pub const MAX_GRID_STEPS: f64 = 1e6;

/// A single predicate, decidable as soon as the components it involves are placed.
#[derive(Clone, Debug, PartialEq)]
pub enum Check {
    /// Component lies within the board
    Inside(usize),
    /// Components do not overlap
    Disjoint(usize, usize),
    /// Centers of `a` and `b` are at most `max_distance` apart
    Proximity { a: usize, b: usize, max_distance: f64 },
    /// Segment between the centers of `from` and `to` avoids keepout zone `keepout`
    LineOfSight { from: usize, to: usize, keepout: usize },
    /// Center of mass lies within `tolerance` of the board center
    Balance { tolerance: f64 },
}

impl Check {
    /// Relative cost of evaluating the check, cheaper checks are evaluated first
    fn cost_rank(&self) -> u8 {
        match self {
            Check::Inside(_) => 0,
            Check::Disjoint(_, _) => 1,
            Check::Proximity { .. } => 2,
            Check::LineOfSight { .. } => 3,
            Check::Balance { .. } => 4,
        }
    }

    pub fn holds(
        &self,
        board: &Board,
        layout: &Layout,
        keepouts: &[Option<KeepoutZone>],
    ) -> Result<bool> {
        let holds = match self {
            Check::Inside(c) => board.contains(&placed(layout, *c)?.bbox),
            Check::Disjoint(a, b) => !placed(layout, *a)?.bbox.overlaps(&placed(layout, *b)?.bbox),
            Check::Proximity { a, b, max_distance } => {
                let (ca, cb) = (placed(layout, *a)?.center(), placed(layout, *b)?.center());
                ca.distance_to(&cb) <= *max_distance
            }
            Check::LineOfSight { from, to, keepout } => {
                let zone = keepouts[*keepout]
                    .as_ref()
                    .with_context(|| format!("keepout {keepout} not derived"))?;
                let sight = Edge::new(placed(layout, *from)?.center(), placed(layout, *to)?.center());
                !zone.rect.collides_with(&sight)
            }
            Check::Balance { tolerance } => {
                let com = layout
                    .center_of_mass()
                    .context("no components placed")?;
                com.distance_to(&board.center()) <= *tolerance
            }
        };
        Ok(holds)
    }
}

fn placed(layout: &Layout, comp_id: usize) -> Result<&PlacedComponent> {
    layout
        .get(comp_id)
        .with_context(|| format!("component {comp_id} is not placed"))
}

/// Keepout zone to derive once its obstacle is placed
#[derive(Clone, Debug, PartialEq)]
pub struct KeepoutDerivation {
    /// Index of the zone, equal to the index of its line-of-sight constraint
    pub keepout: usize,
    pub obstacle: usize,
    pub shape: KeepoutShape,
}

/// Everything the search driver needs to know about a single stage
#[derive(Clone, Debug)]
pub struct StagePlan {
    pub rule: PlacementRule,
    /// Candidates independent of the outer stages, generated once up front
    fixed_candidates: Option<Vec<Candidate>>,
    /// Offsets around the reference, for [`PlacementRule::NearReference`]
    offsets: Vec<(i64, i64)>,
    /// Containment and exclusion checks for the components placed in this stage
    pub pruning: Vec<Check>,
    /// Keepout zones whose obstacle is placed in this stage
    pub keepouts: Vec<KeepoutDerivation>,
    /// Remaining checks which become decidable in this stage, cheapest first
    pub checks: Vec<Check>,
}

impl StagePlan {
    /// Components placed in this stage
    pub fn components(&self) -> Vec<usize> {
        self.rule.components()
    }

    /// The candidates of this stage, given the placements committed by the outer stages.
    pub fn candidates<'p>(
        &'p self,
        instance: &Instance,
        layout: &Layout,
    ) -> Result<Cow<'p, [Candidate]>> {
        match (&self.rule, &self.fixed_candidates) {
            (
                PlacementRule::NearReference {
                    component,
                    reference,
                    ..
                },
                _,
            ) => {
                let spec = instance.component(*component);
                let Point(rx, ry) = placed(layout, *reference)?.center();
                let candidates = self
                    .offsets
                    .iter()
                    .map(|&(dx, dy)| {
                        let target = Point(rx + dx as f64, ry + dy as f64);
                        Candidate::Single(Placement {
                            comp_id: *component,
                            position: generators::centered_position(
                                target,
                                spec.width,
                                spec.height,
                            ),
                            rotation: Rotation::Deg0,
                        })
                    })
                    .collect_vec();
                Ok(Cow::Owned(candidates))
            }
            (_, Some(fixed)) => Ok(Cow::Borrowed(fixed)),
            (rule, None) => bail!("no candidates generated for stage {rule:?}"),
        }
    }
}

/// An instance compiled into an ordered list of stages, each with the checks it must pass.
#[derive(Clone, Debug)]
pub struct SearchPlan {
    pub stages: Vec<StagePlan>,
    /// Total number of keepout zones derived during the search
    pub n_keepouts: usize,
}

impl SearchPlan {
    pub fn compile(instance: &Instance, config: &SearchConfig) -> Result<Self> {
        instance.validate()?;
        ensure!(
            config.grid_step > 0.0,
            "grid step must be positive: {}",
            config.grid_step
        );
        let board = &instance.board;
        let n_grid_steps = f64::max(board.width, board.height) / config.grid_step;
        ensure!(
            n_grid_steps <= MAX_GRID_STEPS,
            "grid step {} is too fine for a {}x{} board",
            config.grid_step,
            board.width,
            board.height
        );

        let has_containment = instance.constraints.contains(&Constraint::Containment);
        let has_exclusion = instance
            .constraints
            .contains(&Constraint::PairwiseExclusion);

        //line-of-sight constraints, paired with the index of their keepout zone
        let los_constraints = instance
            .constraints
            .iter()
            .filter(|c| matches!(c, Constraint::LineOfSight { .. }))
            .enumerate()
            .collect_vec();

        let mut committed: Vec<usize> = vec![];
        let mut scheduled = vec![false; instance.constraints.len()];
        let mut stages = vec![];

        for rule in &instance.rules {
            let new = rule.components();

            let mut pruning = vec![];
            if has_containment {
                pruning.extend(new.iter().map(|&c| Check::Inside(c)));
            }
            if has_exclusion {
                pruning.extend(new.iter().tuple_combinations().map(|(&a, &b)| Check::Disjoint(a, b)));
                pruning.extend(
                    new.iter()
                        .cartesian_product(committed.iter())
                        .map(|(&n, &p)| Check::Disjoint(n, p)),
                );
            }
            committed.extend(new.iter().copied());

            let keepouts = los_constraints
                .iter()
                .filter_map(|(k, c)| match c {
                    Constraint::LineOfSight {
                        obstacle, keepout, ..
                    } if new.contains(obstacle) => Some(KeepoutDerivation {
                        keepout: *k,
                        obstacle: *obstacle,
                        shape: *keepout,
                    }),
                    _ => None,
                })
                .collect_vec();

            let mut checks = vec![];
            let mut los_idx = 0;
            for (i, constraint) in instance.constraints.iter().enumerate() {
                let check = match constraint {
                    Constraint::Containment | Constraint::PairwiseExclusion => None,
                    Constraint::Proximity { a, b, max_distance } => Some(Check::Proximity {
                        a: *a,
                        b: *b,
                        max_distance: *max_distance,
                    }),
                    Constraint::LineOfSight { from, to, .. } => {
                        los_idx += 1;
                        Some(Check::LineOfSight {
                            from: *from,
                            to: *to,
                            keepout: los_idx - 1,
                        })
                    }
                    Constraint::Balance { tolerance } => Some(Check::Balance {
                        tolerance: *tolerance,
                    }),
                };
                let ready = match constraint.scope() {
                    Some(scope) => scope.iter().all(|c| committed.contains(c)),
                    None => committed.len() == instance.n_components(),
                };
                if let (Some(check), true) = (check, ready && !scheduled[i]) {
                    scheduled[i] = true;
                    checks.push(check);
                }
            }
            checks.sort_by_key(|c| c.cost_rank());

            let fixed_candidates = match rule {
                PlacementRule::MirroredPair { a, b } => Some(
                    generators::generate_mirrored_pairs(
                        board,
                        instance.component(*a),
                        instance.component(*b),
                        config.grid_step,
                    )
                    .into_iter()
                    .map(Candidate::Pair)
                    .collect_vec(),
                ),
                PlacementRule::EdgeHugging { component } => Some(
                    generators::generate_edge_placements(
                        board,
                        instance.component(*component),
                        config.grid_step,
                    )
                    .into_iter()
                    .map(Candidate::Single)
                    .collect_vec(),
                ),
                PlacementRule::Centered { component } => {
                    let spec = instance.component(*component);
                    Some(vec![Candidate::Single(Placement {
                        comp_id: *component,
                        position: generators::centered_position(
                            board.center(),
                            spec.width,
                            spec.height,
                        ),
                        rotation: Rotation::Deg0,
                    })])
                }
                PlacementRule::NearReference { .. } => None,
            };
            let offsets = match rule {
                PlacementRule::NearReference { radius, .. } => generators::offsets_within(*radius),
                _ => vec![],
            };

            debug!(
                "[PLAN] stage {}: {:?}, {} fixed candidates, {} pruning checks, {} keepouts, {} checks",
                stages.len(),
                rule,
                fixed_candidates.as_ref().map_or(0, |c| c.len()),
                pruning.len(),
                keepouts.len(),
                checks.len()
            );

            stages.push(StagePlan {
                rule: rule.clone(),
                fixed_candidates,
                offsets,
                pruning,
                keepouts,
                checks,
            });
        }

        Ok(SearchPlan {
            stages,
            n_keepouts: los_constraints.len(),
        })
    }
}
