//! Random sample-model generators.
//!
//! Produce model text in the parser's language, for building test inputs of
//! a given size. `RandomModel` draws arbitrary relations and may produce
//! cycles; `PolyTreeModel` keeps the undirected relation graph acyclic.
//! Neither generator guarantees connectivity.

use crate::potential::RelationKind;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Relation density of a generated model, relative to the argument count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    /// n / 2 relations
    Sparse,
    /// 0.8 * n relations; intentionally not denser, so generated models stay
    /// readable and remain below the cycle-free bound of n - 1
    Dense
}

impl Density {

    fn relation_count(self, num_args: usize) -> usize {
        match self {
            Density::Sparse => num_args / 2,
            Density::Dense => (num_args as f64 * 0.8) as usize
        }
    }

}

fn args_line(labels: &[String]) -> String {
    format!("args{{{}}}\n", labels.iter().join(","))
}

fn labels(num_args: usize) -> Vec<String> {
    (0..num_args).map(|i| format!("A{}", i)).collect()
}

fn random_kind(rng: &mut StdRng) -> RelationKind {
    if rng.gen::<bool>() {
        RelationKind::Attack
    } else {
        RelationKind::Support
    }
}

/// Generates arbitrary relation graphs, possibly cyclic.
///
/// No self-referring relations, no duplicate argument pair in either kind,
/// and no inverse of an existing relation of the opposite kind (a
/// `support(A,B)` rules out a later `attack(B,A)`).
pub struct RandomModel {
    num_args: usize,
    density: Density,
    rng: StdRng
}

impl RandomModel {

    pub fn new(num_args: usize, density: Density) -> Self {
        Self::with_rng(num_args, density, StdRng::from_entropy())
    }

    /// A generator with a fixed seed, for reproducible model files.
    pub fn with_seed(num_args: usize, density: Density, seed: u64) -> Self {
        Self::with_rng(num_args, density, StdRng::seed_from_u64(seed))
    }

    fn with_rng(num_args: usize, density: Density, rng: StdRng) -> Self {
        RandomModel { num_args, density, rng }
    }

    /// Generate one model as parseable text.
    pub fn generate(&mut self) -> String {
        let labels = labels(self.num_args);
        let mut model = args_line(&labels);

        let mut pairs: Vec<(usize, usize)> = Vec::new();
        let mut relations: Vec<(RelationKind, usize, usize)> = Vec::new();

        while relations.len() < self.density.relation_count(self.num_args) {
            let source = self.rng.gen_range(0..self.num_args);
            let mut target = self.rng.gen_range(0..self.num_args);
            while target == source {
                target = self.rng.gen_range(0..self.num_args);
            }
            let kind = random_kind(&mut self.rng);

            if pairs.contains(&(source, target)) {
                continue;
            }
            let inverse = match kind {
                RelationKind::Attack => (RelationKind::Support, target, source),
                RelationKind::Support => (RelationKind::Attack, target, source)
            };
            if relations.contains(&inverse) {
                continue;
            }

            pairs.push((source, target));
            relations.push((kind, source, target));
        }

        for (kind, source, target) in relations {
            model.push_str(&format!(
                "{}({},{})\n",
                kind.keyword(),
                labels[source],
                labels[target]
            ));
        }
        model
    }

}

/// Generates relation graphs whose undirected form is a forest.
///
/// Every candidate relation is checked against the adjacency built so far; a
/// candidate that would close an undirected cycle is rejected and redrawn.
pub struct PolyTreeModel {
    num_args: usize,
    density: Density,
    rng: StdRng,
    adjacency: Vec<Vec<bool>>
}

impl PolyTreeModel {

    pub fn new(num_args: usize, density: Density) -> Self {
        Self::with_rng(num_args, density, StdRng::from_entropy())
    }

    /// A generator with a fixed seed, for reproducible model files.
    pub fn with_seed(num_args: usize, density: Density, seed: u64) -> Self {
        Self::with_rng(num_args, density, StdRng::seed_from_u64(seed))
    }

    fn with_rng(num_args: usize, density: Density, rng: StdRng) -> Self {
        PolyTreeModel {
            num_args,
            density,
            rng,
            adjacency: vec![vec![false; num_args]; num_args]
        }
    }

    /// Generate one model as parseable text.
    pub fn generate(&mut self) -> String {
        let labels = labels(self.num_args);
        let mut model = args_line(&labels);

        for _ in 0..self.density.relation_count(self.num_args) {
            let (kind, source, target) = self.acyclic_relation();
            model.push_str(&format!(
                "{}({},{})\n",
                kind.keyword(),
                labels[source],
                labels[target]
            ));
        }
        model
    }

    /// Draw a relation that neither duplicates an existing undirected edge
    /// nor closes a cycle, and record its edge.
    fn acyclic_relation(&mut self) -> (RelationKind, usize, usize) {
        loop {
            let source = self.rng.gen_range(0..self.num_args);
            let mut target = self.rng.gen_range(0..self.num_args);
            while target == source {
                target = self.rng.gen_range(0..self.num_args);
            }

            if self.adjacency[source][target] {
                continue;
            }

            // adding an edge between two nodes of the same component would
            // close a cycle
            if self.reachable(source, target) {
                continue;
            }

            self.adjacency[source][target] = true;
            self.adjacency[target][source] = true;
            return (random_kind(&mut self.rng), source, target);
        }
    }

    fn reachable(&self, from: usize, to: usize) -> bool {
        let mut visited = vec![false; self.num_args];
        let mut stack = vec![from];
        visited[from] = true;

        while let Some(node) = stack.pop() {
            if node == to {
                return true;
            }
            for (next, &adjacent) in self.adjacency[node].iter().enumerate() {
                if adjacent && !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        false
    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::FactorGraph;
    use crate::parser::parse;
    use crate::potential::Semantics;

    #[test]
    fn random_model_parses_and_builds() {
        let text = RandomModel::with_seed(10, Density::Dense, 17).generate();
        let model = parse(&text).unwrap();

        assert_eq!(model.labels().len(), 10);
        assert_eq!(model.relations().len(), 8);
        assert!(FactorGraph::build(&model, &Semantics::default()).is_ok());
    }

    #[test]
    fn random_model_has_no_self_relations_or_duplicate_pairs() {
        let text = RandomModel::with_seed(12, Density::Dense, 99).generate();
        let model = parse(&text).unwrap();

        let mut seen: Vec<(&str, &str)> = Vec::new();
        for relation in model.relations() {
            assert_ne!(relation.source, relation.target);
            let pair = (relation.source.as_str(), relation.target.as_str());
            assert!(!seen.contains(&pair));
            seen.push(pair);
        }
    }

    #[test]
    fn sparse_density_halves_the_relation_count() {
        let text = RandomModel::with_seed(10, Density::Sparse, 4).generate();
        assert_eq!(parse(&text).unwrap().relations().len(), 5);
    }

    #[test]
    fn poly_tree_model_is_acyclic() {
        let text = PolyTreeModel::with_seed(15, Density::Dense, 7).generate();
        let model = parse(&text).unwrap();
        assert_eq!(model.relations().len(), 12);

        // union-find over the undirected relation edges; acyclic means every
        // edge joins two distinct components
        let mut parent: Vec<usize> = (0..model.labels().len()).collect();
        fn root(parent: &mut Vec<usize>, mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }

        for relation in model.relations() {
            let s = model.labels().iter().position(|l| *l == relation.source).unwrap();
            let t = model.labels().iter().position(|l| *l == relation.target).unwrap();
            let (rs, rt) = (root(&mut parent, s), root(&mut parent, t));
            assert_ne!(rs, rt, "cycle through {:?}", relation);
            parent[rs] = rt;
        }
    }

    #[test]
    fn generated_models_support_inference() {
        use crate::inference::{Engine, compute_marginals};

        let text = PolyTreeModel::with_seed(8, Density::Sparse, 21).generate();
        let graph = FactorGraph::build(&parse(&text).unwrap(), &Semantics::default()).unwrap();

        let marginals = compute_marginals(&graph, Engine::Exact).unwrap();
        assert_eq!(marginals.len(), 8);
    }

}
