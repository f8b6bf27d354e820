//! Exact marginal inference by full joint enumeration.
//!
//! Enumerates all 2^n assignments, accumulates the partition function Z and
//! each variable's weighted `=1` mass, and divides. Deliberately a direct,
//! auditable enumeration rather than structure-exploiting exact inference;
//! the cost is exponential in the variable count, so this engine is meant for
//! small models and as the oracle the sampler is validated against.

use crate::graph::FactorGraph;
use crate::util::{EristicError, Result};
use super::{MarginalInference, Marginals};

use std::time::Instant;

/// Enumeration is driven by a `u64` assignment index.
const MAX_VARIABLES: usize = 63;

/// The full-enumeration engine. Stateless; one instance can serve any number
/// of graphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactEngine;

impl ExactEngine {

    pub fn new() -> Self {
        ExactEngine
    }

}

impl MarginalInference for ExactEngine {

    /// Compute exact marginals.
    ///
    /// Assignment vectors are enumerated in increasing binary order of their
    /// index, most significant bit = variable 0. The unnormalized weight of
    /// an assignment is the product of all factor potentials; a graph with
    /// zero factors enumerates uniformly, so untouched variables come out at
    /// exactly 0.5.
    ///
    /// # Errors
    /// * `EristicError::DegenerateModel` if Z evaluates to exactly zero
    /// * `EristicError::General` if the graph has too many variables to
    ///   enumerate
    fn infer(&mut self, graph: &FactorGraph) -> Result<Marginals> {
        let n = graph.num_variables();
        if n > MAX_VARIABLES {
            return Err(EristicError::General(format!(
                "exact inference cannot enumerate {} variables (limit {})",
                n, MAX_VARIABLES
            )));
        }

        let start = Instant::now();

        let mut partition = 0.0;
        let mut ones = vec![0.0; n];
        let mut assignment = vec![0usize; n];

        for index in 0..(1u64 << n) {
            for v in 0..n {
                assignment[v] = ((index >> (n - 1 - v)) & 1) as usize;
            }

            let weight = graph.weight(&assignment);
            partition += weight;
            for v in 0..n {
                if assignment[v] == 1 {
                    ones[v] += weight;
                }
            }
        }

        if partition == 0.0 {
            return Err(EristicError::DegenerateModel);
        }

        tracing::debug!(
            variables = n,
            partition,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "exact inference done"
        );

        let p_one = ones.into_iter().map(|mass| mass / partition).collect();
        Ok(Marginals::new(graph, p_one))
    }

}
