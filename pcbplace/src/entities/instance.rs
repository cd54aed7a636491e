use anyhow::{Result, bail, ensure};
use itertools::Itertools;

use crate::entities::{Board, ComponentSpec, Constraint, PlacementRule};

/// The static (unmodifiable) representation of a placement problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub name: String,
    pub board: Board,
    /// All components, indexed by their id
    pub components: Vec<ComponentSpec>,
    /// One rule per search stage, outermost first
    pub rules: Vec<PlacementRule>,
    pub constraints: Vec<Constraint>,
}

impl Instance {
    pub fn component(&self, id: usize) -> &ComponentSpec {
        &self.components[id]
    }

    pub fn component_id(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name == name)
    }

    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// Index of the rule which places the given component
    pub fn rule_placing(&self, comp_id: usize) -> Option<usize> {
        self.rules
            .iter()
            .position(|r| r.components().contains(&comp_id))
    }

    /// Verifies the instance is well-formed and can be searched.
    pub fn validate(&self) -> Result<()> {
        let n = self.n_components();
        ensure!(n > 0, "instance {} contains no components", self.name);

        for (i, c) in self.components.iter().enumerate() {
            ensure!(c.id == i, "component {} has id {}, expected {i}", c.name, c.id);
            ensure!(
                c.width > 0.0 && c.height > 0.0,
                "component {} has non-positive dimensions: {}x{}",
                c.name,
                c.width,
                c.height
            );
        }
        if let Some(dup) = self.components.iter().map(|c| &c.name).duplicates().next() {
            bail!("duplicate component id: {dup}");
        }

        let referenced = self
            .rules
            .iter()
            .flat_map(|r| r.components())
            .chain(self.constraints.iter().flat_map(|c| c.scope()).flatten());
        for id in referenced {
            ensure!(id < n, "reference to unknown component index {id}");
        }

        for c in &self.components {
            let n_rules = self
                .rules
                .iter()
                .filter(|r| r.components().contains(&c.id))
                .count();
            ensure!(
                n_rules == 1,
                "component {} is placed by {n_rules} rules, expected exactly one",
                c.name
            );
        }

        for (i, rule) in self.rules.iter().enumerate() {
            match rule {
                PlacementRule::MirroredPair { a, b } => {
                    let (ca, cb) = (self.component(*a), self.component(*b));
                    ensure!(a != b, "component {} cannot be its own twin", ca.name);
                    ensure!(
                        ca.width == cb.width && ca.height == cb.height,
                        "mirrored twins {} and {} have different footprints",
                        ca.name,
                        cb.name
                    );
                }
                PlacementRule::NearReference {
                    component,
                    reference,
                    radius,
                } => {
                    let max_radius = f64::max(self.board.width, self.board.height);
                    ensure!(
                        f64::from(*radius) <= max_radius,
                        "search radius {radius} of component {} exceeds the board extent {max_radius}",
                        self.component(*component).name
                    );
                    let ref_stage = self.rule_placing(*reference);
                    ensure!(
                        ref_stage.is_some_and(|r| r < i),
                        "reference {} of component {} must be placed by an earlier rule",
                        self.component(*reference).name,
                        self.component(*component).name
                    );
                }
                PlacementRule::EdgeHugging { .. } | PlacementRule::Centered { .. } => {}
            }
        }

        for constraint in &self.constraints {
            match constraint {
                Constraint::LineOfSight {
                    obstacle, keepout, ..
                } => {
                    let obstacle_rule = self.rule_placing(*obstacle).map(|r| &self.rules[r]);
                    ensure!(
                        matches!(obstacle_rule, Some(PlacementRule::EdgeHugging { .. })),
                        "line-of-sight obstacle {} must be placed against a board edge",
                        self.component(*obstacle).name
                    );
                    ensure!(
                        keepout.width > 0.0 && keepout.depth > 0.0,
                        "keepout dimensions must be positive: {keepout:?}"
                    );
                }
                Constraint::Proximity { max_distance, .. } => {
                    ensure!(
                        *max_distance >= 0.0,
                        "proximity bound must be non-negative: {max_distance}"
                    );
                }
                Constraint::Balance { tolerance } => {
                    ensure!(
                        *tolerance >= 0.0,
                        "balance tolerance must be non-negative: {tolerance}"
                    );
                }
                Constraint::Containment | Constraint::PairwiseExclusion => {}
            }
        }

        Ok(())
    }
}
