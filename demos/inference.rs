//! End-to-end walkthrough: parse a model, build the factor graph, run both
//! inference engines and render the result table.

use eristic::report;
use eristic::{compute_marginals, parse, Engine, FactorGraph, Semantics};

fn main() -> eristic::Result<()> {
    let text = "\
# A small bipolar argumentation framework
args{T,A1,A2,A3}
attack(A2,T)
support(A1,T)
support(A3,A1)
";

    /////////////////////////////////////////////////////
    // Step 1: Parse the model text
    let model = parse(text)?;

    /////////////////////////////////////////////////////
    // Step 2: Compile it against the default (weak) tables
    let graph = FactorGraph::build(&model, &Semantics::default())?;

    /////////////////////////////////////////////////////
    // Step 3: Exact marginals by full enumeration
    let exact = compute_marginals(&graph, Engine::Exact)?;
    println!("Exact:");
    println!("{}", report::render_table(&exact));

    /////////////////////////////////////////////////////
    // Step 4: Approximate marginals by Gibbs sampling
    let sampled = compute_marginals(&graph, Engine::Gibbs)?;
    println!("Gibbs:");
    println!("{}", report::render_table(&sampled));

    Ok(())
}
