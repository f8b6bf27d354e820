//! Marginal inference engines over a `FactorGraph`.
//!
//! Two interchangeable strategies implement the `MarginalInference` trait:
//! `ExactEngine` enumerates the full joint and serves as the ground-truth
//! oracle, `GibbsEngine` estimates the same marginals by single-site
//! sampling. Both consume the graph read-only and must agree in expectation.
//!
//! Tests that exercise both engines against each other are hoisted here to
//! avoid duplication; engine-specific tests live with the engine.

use crate::graph::FactorGraph;
use crate::util::Result;

use indexmap::IndexMap;

mod exact;
mod gibbs;

pub use self::exact::ExactEngine;
pub use self::gibbs::{GibbsEngine, DEFAULT_BURN_IN, DEFAULT_TOTAL_STEPS};

/// Per-variable marginal beliefs, keyed by argument label in declaration
/// order.
///
/// For every label the pair holds `[P(v=0), P(v=1)]` with `P0 + P1 = 1`
/// within floating tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct Marginals {
    probabilities: IndexMap<String, [f64; 2]>
}

impl Marginals {

    /// Assemble a result from per-variable `P(v=1)` values, in the graph's
    /// variable order.
    pub(crate) fn new(graph: &FactorGraph, p_one: Vec<f64>) -> Self {
        let probabilities = graph
            .variables()
            .iter()
            .zip(p_one)
            .map(|(v, p1)| (String::from(v.label()), [1.0 - p1, p1]))
            .collect();

        Marginals { probabilities }
    }

    /// `[P(v=0), P(v=1)]` for the given label, if it exists in the model.
    pub fn get(&self, label: &str) -> Option<[f64; 2]> {
        self.probabilities.get(label).copied()
    }

    /// Iterate `(label, [P0, P1])` in variable-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, [f64; 2])> + '_ {
        self.probabilities.iter().map(|(label, p)| (label.as_str(), *p))
    }

    /// The number of variables covered by this result.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

}

/// A marginal inference strategy over a read-only `FactorGraph`.
///
/// Engines are stateful (the sampler owns its chain and RNG), so `infer`
/// takes `&mut self`; each invocation produces one independent
/// `Marginals`.
pub trait MarginalInference {

    /// Compute the marginal belief of every variable in the graph.
    fn infer(&mut self, graph: &FactorGraph) -> Result<Marginals>;

}

/// Engine selector for `compute_marginals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    /// Full joint enumeration; exponential in the variable count.
    Exact,
    /// Gibbs sampling with the default step counts.
    Gibbs
}

/// Run marginal inference with a default-configured engine.
pub fn compute_marginals(graph: &FactorGraph, engine: Engine) -> Result<Marginals> {
    match engine {
        Engine::Exact => ExactEngine::new().infer(graph),
        Engine::Gibbs => GibbsEngine::new().infer(graph)
    }
}
