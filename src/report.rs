//! Plain-text and CSV rendering of marginal results.
//!
//! Renders a bordered result table, two rows per variable (outcome 0 and
//! outcome 1), and a CSV conversion of that table, which strips
//! the border rows and all spaces and turns the remaining cell pipes into
//! commas. This layer sits on top of `Marginals`; the inference core never
//! depends on it.

use crate::inference::Marginals;

use itertools::Itertools;

const SEPARATOR: &str = "+----------+---------+-------------+";

/// Render the bordered result table.
pub fn render_table(marginals: &Marginals) -> String {
    let mut out = String::new();

    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str("| Variable | Outcome | Probability |\n");
    out.push_str(SEPARATOR);
    out.push('\n');

    for (label, [p0, p1]) in marginals.iter() {
        out.push_str(&format!("| {:>8} | {:>7} | {:11.4} |\n", label, 0, p0));
        out.push_str(&format!("| {:>8} | {:>7} | {:11.4} |\n", label, 1, p1));
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    out
}

/// Convert a rendered result table to CSV.
///
/// Separator rows disappear, spaces are removed, the leading and trailing
/// pipe of each row is cropped and the inner pipes become commas.
pub fn table_to_csv(table: &str) -> String {
    table
        .lines()
        .filter(|line| *line != SEPARATOR)
        .map(|line| line.replace(' ', ""))
        .map(|line| {
            let cropped = line.trim_start_matches('|').trim_end_matches('|');
            cropped.replace('|', ",")
        })
        .map(|line| line + "\n")
        .join("")
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::FactorGraph;
    use crate::inference::{ExactEngine, MarginalInference};
    use crate::parser::parse;
    use crate::potential::Semantics;

    fn fixture_marginals() -> Marginals {
        // the hand-computed weak fixture: P(A=1) = 0.5, P(B=1) = 0.375
        let graph =
            FactorGraph::build(&parse("args{A,B}\nattack(A,B)\n").unwrap(), &Semantics::default())
                .unwrap();
        ExactEngine::new().infer(&graph).unwrap()
    }

    #[test]
    fn table_layout() {
        let expected = "\
+----------+---------+-------------+
| Variable | Outcome | Probability |
+----------+---------+-------------+
|        A |       0 |      0.5000 |
|        A |       1 |      0.5000 |
+----------+---------+-------------+
|        B |       0 |      0.6250 |
|        B |       1 |      0.3750 |
+----------+---------+-------------+
";
        assert_eq!(render_table(&fixture_marginals()), expected);
    }

    #[test]
    fn csv_conversion() {
        let expected = "\
Variable,Outcome,Probability
A,0,0.5000
A,1,0.5000
B,0,0.6250
B,1,0.3750
";
        assert_eq!(table_to_csv(&render_table(&fixture_marginals())), expected);
    }

}
