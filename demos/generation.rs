//! Generate sample model files and run exact inference over one of them.

use eristic::generator::{Density, PolyTreeModel, RandomModel};
use eristic::{compute_marginals, parse, Engine, FactorGraph, Semantics};

fn main() -> eristic::Result<()> {
    let random = RandomModel::new(10, Density::Sparse).generate();
    println!("Random model:\n{}", random);

    let tree = PolyTreeModel::new(10, Density::Dense).generate();
    println!("Poly-tree model:\n{}", tree);

    let graph = FactorGraph::build(&parse(&tree)?, &Semantics::default())?;
    let marginals = compute_marginals(&graph, Engine::Exact)?;
    for (label, [_, p1]) in marginals.iter() {
        println!("P({} = 1) = {:.4}", label, p1);
    }

    Ok(())
}
