//! `pcbplace` places a fixed set of rectangular components on a rectangular board
//! such that a conjunction of hard geometric constraints holds.
//!
//! It is a feasibility search, not an optimizer: candidates are enumerated in a fixed order
//! and the first assignment satisfying every constraint is returned.

/// Geometric primitives and the predicates used as pruning oracles
pub mod geometry;

/// Entities to model a placement instance and its solution
pub mod entities;

/// Enumeration of discrete placement candidates
pub mod generators;

/// The ordered nested search composing generators and constraints into a full placement
pub mod search;

/// Importing instances, exporting solutions, rendering and reporting
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
