use std::borrow::Cow;
use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info};
use thousands::Separable;

use crate::entities::{Instance, KeepoutZone, Layout, PlacedComponent, Solution};
use crate::search::plan::{SearchPlan, StagePlan};
use crate::search::{Candidate, SearchOutcome};
use crate::util::SearchConfig;
use crate::util::assertions;

/// Ordered nested search over the stages of a [`SearchPlan`].
///
/// The nesting is an explicit stack of stage frames. Each frame commits one candidate at a time
/// into a shared [`Layout`], evaluates the checks of its stage and either descends into the next
/// stage or discards the candidate and advances to the next one.
/// The first assignment passing every check of every stage is returned.
pub struct PlacementSearch<'a> {
    pub instance: &'a Instance,
    pub config: SearchConfig,
    pub plan: SearchPlan,
    /// Number of candidates tried during the last call to [`PlacementSearch::solve`]
    pub n_candidates: usize,
}

struct StageFrame<'p> {
    stage_idx: usize,
    candidates: Cow<'p, [Candidate]>,
    cursor: usize,
}

impl<'p> StageFrame<'p> {
    fn new(stage_idx: usize, candidates: Cow<'p, [Candidate]>) -> Self {
        Self {
            stage_idx,
            candidates,
            cursor: 0,
        }
    }

    fn next_candidate(&mut self) -> Option<Candidate> {
        let candidate = self.candidates.get(self.cursor).copied();
        self.cursor += 1;
        candidate
    }
}

impl<'a> PlacementSearch<'a> {
    pub fn new(instance: &'a Instance, config: SearchConfig) -> Result<Self> {
        let plan = SearchPlan::compile(instance, &config)?;
        Ok(Self {
            instance,
            config,
            plan,
            n_candidates: 0,
        })
    }

    pub fn solve(&mut self) -> Result<SearchOutcome> {
        let start = Instant::now();
        let instance = self.instance;
        let plan = &self.plan;

        info!(
            "[SEARCH] searching {} components over {} stages of instance {} (time limit: {:?})",
            instance.n_components(),
            plan.stages.len(),
            instance.name,
            self.config.time_limit
        );

        let mut layout = Layout::new(instance.n_components());
        let mut keepouts: Vec<Option<KeepoutZone>> = vec![None; plan.n_keepouts];
        let mut stack: Vec<StageFrame> = vec![];
        let mut n_candidates = 0;

        if let Some(first) = plan.stages.first() {
            stack.push(StageFrame::new(0, first.candidates(instance, &layout)?));
        }

        let outcome = loop {
            //cooperative cancellation, polled once per candidate
            if start.elapsed() >= self.config.time_limit {
                break SearchOutcome::TimedOut;
            }
            let Some(frame) = stack.last_mut() else {
                break SearchOutcome::Exhausted;
            };
            let stage = &plan.stages[frame.stage_idx];

            //undo whatever this stage committed for its previous candidate
            discard(stage, &mut layout, &mut keepouts);

            let Some(candidate) = frame.next_candidate() else {
                //stage exhausted, backtrack to the enclosing one
                stack.pop();
                continue;
            };
            n_candidates += 1;

            if !commit(instance, stage, &candidate, &mut layout, &mut keepouts)? {
                continue;
            }

            let next_idx = frame.stage_idx + 1;
            match plan.stages.get(next_idx) {
                Some(next_stage) => {
                    let candidates = next_stage.candidates(instance, &layout)?;
                    stack.push(StageFrame::new(next_idx, candidates));
                }
                None => {
                    let keepouts = keepouts.iter().flatten().cloned().collect_vec();
                    let solution = Solution::from_layout(&layout, keepouts)?;
                    debug_assert!(assertions::solution_satisfies_constraints(
                        instance, &solution
                    ));
                    break SearchOutcome::Found(solution);
                }
            }
        };

        self.n_candidates = n_candidates;
        info!(
            "[SEARCH] search {} after {} candidates in {:.3}ms",
            outcome,
            n_candidates.separate_with_commas(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        if let SearchOutcome::Found(solution) = &outcome {
            info!(
                "[SEARCH] solution with center of mass {}",
                solution.center_of_mass
            );
        }
        Ok(outcome)
    }
}

/// Commits all placements of `candidate` to the layout and evaluates the checks of `stage`.
///
/// Returns `false` at the first failing check. The committed placements are left in the
/// layout either way, they are removed by [`discard`] before the next candidate of the stage.
fn commit(
    instance: &Instance,
    stage: &StagePlan,
    candidate: &Candidate,
    layout: &mut Layout,
    keepouts: &mut [Option<KeepoutZone>],
) -> Result<bool> {
    let board = &instance.board;
    for placement in candidate.placements() {
        let pc = PlacedComponent::new(instance.component(placement.comp_id), *placement)?;
        layout.place(pc);
    }

    for check in &stage.pruning {
        if !check.holds(board, layout, keepouts)? {
            return Ok(false);
        }
    }

    for derivation in &stage.keepouts {
        let obstacle = layout
            .get(derivation.obstacle)
            .with_context(|| format!("obstacle {} is not placed", derivation.obstacle))?;
        keepouts[derivation.keepout] = Some(KeepoutZone::derive(board, obstacle, derivation.shape)?);
    }

    for check in &stage.checks {
        if !check.holds(board, layout, keepouts)? {
            return Ok(false);
        }
    }

    debug!(
        "[SEARCH] committed {:?} ({} of {} components placed)",
        candidate,
        layout.n_placed(),
        instance.n_components()
    );
    Ok(true)
}

/// Removes the placements and keepout zones of `stage` from the layout.
fn discard(stage: &StagePlan, layout: &mut Layout, keepouts: &mut [Option<KeepoutZone>]) {
    for comp_id in stage.components() {
        layout.remove(comp_id);
    }
    for derivation in &stage.keepouts {
        keepouts[derivation.keepout] = None;
    }
}
