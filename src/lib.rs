//! eristic - marginal inference over bipolar argumentation frameworks.
//!
//! A bipolar argumentation framework (BAF) is a set of named binary argument
//! variables connected by pairwise attack and support relations. This crate
//! parses the textual relation language into a validated model, compiles it
//! into a pairwise binary Markov random field with explicit potential tables,
//! and computes the marginal belief that each argument is accepted - either
//! exactly, by full joint enumeration, or approximately, by single-site Gibbs
//! sampling.

pub mod generator;
pub mod graph;
pub mod inference;
pub mod parser;
pub mod potential;
pub mod report;
pub mod util;

pub use graph::{Factor, FactorGraph, Variable};
pub use inference::{compute_marginals, Engine, ExactEngine, GibbsEngine, MarginalInference, Marginals};
pub use parser::{parse, ParsedModel, Relation};
pub use potential::{PotentialTable, Preset, RelationKind, Semantics};
pub use util::{EristicError, Result};
