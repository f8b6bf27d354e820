//! Approximate marginal inference via single-site Gibbs sampling.
//!
//! One mutable assignment vector is resampled one coordinate at a time in
//! sequential round-robin order. The default schedule discards the first
//! 10,000 steps and keeps counting toward a 50,000-step total, leaving
//! 40,000 collection steps; each collection step increments the tally of the
//! resampled variable when the drawn value is 1, and the marginal estimate is
//! tally over visits. The chain is strictly sequential; there is no
//! multi-chain averaging.

use crate::graph::FactorGraph;
use crate::util::{EristicError, Result};
use super::{MarginalInference, Marginals};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::time::Instant;

/// Number of initial single-site steps discarded.
pub const DEFAULT_BURN_IN: usize = 10_000;

/// Total number of single-site steps, burn-in included.
pub const DEFAULT_TOTAL_STEPS: usize = 50_000;

/// The Gibbs sampling engine. Owns its chain state and RNG; each `infer`
/// call runs one fresh chain.
#[derive(Clone, Debug)]
pub struct GibbsEngine {
    burn_in: usize,
    total_steps: usize,
    rng: StdRng
}

impl GibbsEngine {

    /// An engine with the default schedule and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// An engine with the default schedule and a fixed seed, for
    /// reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        GibbsEngine {
            burn_in: DEFAULT_BURN_IN,
            total_steps: DEFAULT_TOTAL_STEPS,
            rng
        }
    }

    /// Override the default step counts. `total_steps` includes the
    /// burn-in.
    pub fn with_schedule(mut self, burn_in: usize, total_steps: usize) -> Self {
        self.burn_in = burn_in;
        self.total_steps = total_steps;
        self
    }

}

impl Default for GibbsEngine {

    fn default() -> Self {
        GibbsEngine::new()
    }

}

impl MarginalInference for GibbsEngine {

    /// Estimate marginals from empirical resampling frequencies.
    ///
    /// # Errors
    /// * `EristicError::DegenerateModel` if both conditional weights of the
    ///   resampled variable are zero at some step
    /// * `EristicError::General` if the collection phase is too short to
    ///   visit every variable at least once
    fn infer(&mut self, graph: &FactorGraph) -> Result<Marginals> {
        let n = graph.num_variables();
        if n == 0 {
            return Ok(Marginals::new(graph, Vec::new()));
        }

        let incident = graph.incidence();
        let factors = graph.factors();

        let start = Instant::now();

        let mut assignment = vec![0usize; n];
        let mut tally = vec![0u64; n];
        let mut visits = vec![0u64; n];

        for step in 0..self.total_steps {
            // Sequential round-robin site selection; all other coordinates
            // are untouched by this step.
            let v = step % n;

            let mut weights = [0.0f64; 2];
            for value in 0..2 {
                assignment[v] = value;
                weights[value] = incident[v]
                    .iter()
                    .map(|&f| factors[f].value(&assignment))
                    .product();
            }

            let sum = weights[0] + weights[1];
            if sum == 0.0 {
                // both conditionals undefined; fail rather than pick a default
                return Err(EristicError::DegenerateModel);
            }

            let drawn = if self.rng.gen::<f64>() < weights[1] / sum { 1 } else { 0 };
            assignment[v] = drawn;

            if step >= self.burn_in {
                visits[v] += 1;
                if drawn == 1 {
                    tally[v] += 1;
                }
            }
        }

        if visits.iter().any(|&count| count == 0) {
            return Err(EristicError::General(format!(
                "collection phase of {} steps never visited every one of {} variables",
                self.total_steps.saturating_sub(self.burn_in),
                n
            )));
        }

        tracing::debug!(
            variables = n,
            steps = self.total_steps,
            burn_in = self.burn_in,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "gibbs inference done"
        );

        let p_one = tally
            .iter()
            .zip(&visits)
            .map(|(&ones, &count)| ones as f64 / count as f64)
            .collect();
        Ok(Marginals::new(graph, p_one))
    }

}
