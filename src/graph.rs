//! The pairwise binary Markov random field compiled from a parsed model.
//!
//! `FactorGraph::build` maps parsed labels to dense variable indices and each
//! relation to a pairwise factor carrying a copy of the active table for its
//! kind. The build step performs no numeric computation; its contract is a
//! correct, total, order-preserving mapping from textual identifiers to
//! indices.

use crate::parser::ParsedModel;
use crate::potential::{PotentialTable, Semantics};
use crate::util::{EristicError, Result};

use indexmap::IndexSet;

/// A binary argument variable.
///
/// `id` indexes into the owning graph's variable list; ids are assigned
/// sequentially in first-declaration order. The domain is fixed to `{0, 1}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    id: usize,
    label: String
}

impl Variable {

    /// The dense index of this variable within its graph.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The argument label this variable was declared with.
    pub fn label(&self) -> &str {
        &self.label
    }

}

/// A pairwise factor between two variables.
///
/// Directional: `left` is the first relation argument and `right` the second;
/// any asymmetry is already encoded in the table.
#[derive(Clone, Debug, PartialEq)]
pub struct Factor {
    left: usize,
    right: usize,
    table: PotentialTable
}

impl Factor {

    /// Index of the first relation argument.
    pub fn left(&self) -> usize {
        self.left
    }

    /// Index of the second relation argument.
    pub fn right(&self) -> usize {
        self.right
    }

    /// The potential table captured at build time.
    pub fn table(&self) -> &PotentialTable {
        &self.table
    }

    /// Potential of this factor under a full assignment to the graph.
    pub fn value(&self, assignment: &[usize]) -> f64 {
        self.table.value(assignment[self.left], assignment[self.right])
    }

}

/// An immutable factor graph over binary variables.
///
/// Every factor's `left`/`right` reference valid indices into `variables`,
/// and labels are pairwise distinct. A graph is rebuilt from scratch for
/// every new parse; there is no incremental mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct FactorGraph {
    variables: Vec<Variable>,
    factors: Vec<Factor>
}

impl FactorGraph {

    /// Compile a parsed model against the active semantics.
    ///
    /// Tables are captured by value: editing the `Semantics` afterwards never
    /// alters a graph that was already built.
    ///
    /// # Errors
    /// * `EristicError::UnknownVariable` if a relation references a label
    ///   missing from the label list. This cannot happen for the output of
    ///   `parser::parse`, which validates relations against the declared
    ///   labels.
    pub fn build(model: &ParsedModel, semantics: &Semantics) -> Result<FactorGraph> {
        let variables: Vec<Variable> = model
            .labels()
            .iter()
            .enumerate()
            .map(|(id, label)| Variable { id, label: label.clone() })
            .collect();

        let index: IndexSet<&str> = model.labels().iter().map(String::as_str).collect();

        let mut factors: Vec<Factor> = Vec::with_capacity(model.relations().len());
        for relation in model.relations() {
            let left = index
                .get_index_of(relation.source.as_str())
                .ok_or(EristicError::UnknownVariable(relation.line))?;
            let right = index
                .get_index_of(relation.target.as_str())
                .ok_or(EristicError::UnknownVariable(relation.line))?;

            factors.push(Factor {
                left,
                right,
                table: semantics.table(relation.kind).clone()
            });
        }

        Ok(FactorGraph { variables, factors })
    }

    /// The variables of the graph, in first-declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The number of variables in the graph.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// The factors of the graph, in relation-declaration order.
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Unnormalized joint weight of a full assignment: the product of every
    /// factor's potential. A graph with zero factors weighs every assignment
    /// at 1.
    pub fn weight(&self, assignment: &[usize]) -> f64 {
        self.factors.iter().map(|f| f.value(assignment)).product()
    }

    /// For each variable, the indices of the factors incident to it.
    pub fn incidence(&self) -> Vec<Vec<usize>> {
        let mut incident = vec![Vec::new(); self.variables.len()];
        for (i, factor) in self.factors.iter().enumerate() {
            incident[factor.left].push(i);
            if factor.right != factor.left {
                incident[factor.right].push(i);
            }
        }
        incident
    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::parser::parse;
    use crate::potential::Preset;

    #[test]
    fn build_maps_labels_in_declaration_order() {
        let model = parse("args{T,A1,A2}\nattack(A2,T)\nsupport(A1,T)\n").unwrap();
        let graph = FactorGraph::build(&model, &Semantics::default()).unwrap();

        let labels: Vec<&str> = graph.variables().iter().map(Variable::label).collect();
        assert_eq!(labels, ["T", "A1", "A2"]);
        for (i, v) in graph.variables().iter().enumerate() {
            assert_eq!(v.id(), i);
        }

        assert_eq!(graph.factors().len(), 2);
        assert_eq!(graph.factors()[0].left(), 2);
        assert_eq!(graph.factors()[0].right(), 0);
        assert_eq!(graph.factors()[1].left(), 1);
        assert_eq!(graph.factors()[1].right(), 0);
    }

    #[test]
    fn factors_carry_the_table_of_their_kind() {
        let model = parse("args{A,B}\nattack(A,B)\nsupport(B,A)\n").unwrap();
        let graph = FactorGraph::build(&model, &Semantics::preset(Preset::Strong)).unwrap();

        assert_eq!(graph.factors()[0].table().values(), [1.0, 1.0, 2.0, 0.0]);
        assert_eq!(graph.factors()[1].table().values(), [1.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn tables_are_captured_by_value() {
        let model = parse("args{A,B}\nattack(A,B)\n").unwrap();
        let mut semantics = Semantics::default();
        let graph = FactorGraph::build(&model, &semantics).unwrap();

        semantics.set_attack([9.0, 9.0, 9.0, 9.0]);
        assert_eq!(graph.factors()[0].table().values(), [1.0, 1.0, 1.5, 0.5]);
    }

    #[test]
    fn reparse_yields_identical_graphs() {
        let text = "args{A,B,C}\nattack(A,B)\nsupport(C,B)\n";
        let first = FactorGraph::build(&parse(text).unwrap(), &Semantics::default()).unwrap();
        let second = FactorGraph::build(&parse(text).unwrap(), &Semantics::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn weight_is_the_product_of_incident_potentials() {
        // weak attack table: (0,0)=1, (0,1)=1, (1,0)=1.5, (1,1)=0.5
        let model = parse("args{A,B}\nattack(A,B)\n").unwrap();
        let graph = FactorGraph::build(&model, &Semantics::default()).unwrap();

        assert_eq!(graph.weight(&[0, 0]), 1.0);
        assert_eq!(graph.weight(&[0, 1]), 1.0);
        assert_eq!(graph.weight(&[1, 0]), 1.5);
        assert_eq!(graph.weight(&[1, 1]), 0.5);
    }

    #[test]
    fn incidence_lists_every_touching_factor() {
        let model = parse("args{A,B,C}\nattack(A,B)\nsupport(C,B)\n").unwrap();
        let graph = FactorGraph::build(&model, &Semantics::default()).unwrap();

        let incident = graph.incidence();
        assert_eq!(incident[0], [0]);
        assert_eq!(incident[1], [0, 1]);
        assert_eq!(incident[2], [1]);
    }

}
