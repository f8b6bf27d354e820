//! Parser for the textual model language describing a bipolar argumentation
//! framework.
//!
//! The language is line-oriented; whitespace is stripped by the caller before
//! parsing. Line by line:
//!
//! * empty lines and lines starting with `#` are ignored
//! * `args{L1,L2,...,Ln}` declares argument labels
//! * `attack(Li,Lj)` and `support(Li,Lj)` declare binary relations
//! * anything else is a syntax error
//!
//! Parsing is two-pass: the first pass collects every declared label, the
//! second validates and emits relations. A relation may therefore reference a
//! label declared on any line, before or after it. Parsing stops at the first
//! error; it never accumulates diagnostics.

use crate::potential::RelationKind;
use crate::util::{EristicError, Result};

use indexmap::IndexSet;

/// A typed relation between two declared arguments.
///
/// `source` and `target` are labels, resolved to variable indices by
/// `FactorGraph::build`. `line` is the 1-based line the relation was declared
/// on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,
    pub source: String,
    pub target: String,
    pub line: usize
}

/// The validated output of a parse: declared labels in first-seen order plus
/// relations in declaration order.
///
/// A `ParsedModel` is ephemeral; it exists to be consumed exactly once by
/// `FactorGraph::build`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedModel {
    labels: Vec<String>,
    relations: Vec<Relation>
}

impl ParsedModel {

    /// Declared argument labels, in first-declaration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Declared relations, in declaration order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

}

/// Parse model text into a validated list of labels and relations.
///
/// # Errors
/// * `EristicError::EmptyModel` if the text holds no content at all
/// * `EristicError::Syntax` for an unrecognized non-empty line
/// * `EristicError::DuplicateVariable` if a label repeats across all `args{}`
///   lines combined
/// * `EristicError::Arity` if a relation does not have exactly two arguments
/// * `EristicError::UnknownVariable` if a relation references an undeclared
///   label
pub fn parse(text: &str) -> Result<ParsedModel> {
    if text.trim().is_empty() {
        return Err(EristicError::EmptyModel);
    }

    let lines: Vec<&str> = text.lines().collect();

    // First pass: collect argument labels. Relation lines are skipped so that
    // forward references across lines all resolve in the second pass.
    let mut labels: IndexSet<String> = IndexSet::new();
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() || is_comment(line) || is_attack(line) || is_support(line) {
            continue;
        }

        if is_args(line) {
            let content = &line["args{".len()..line.len() - 1];
            for label in content.split(',') {
                if !labels.insert(String::from(label)) {
                    return Err(EristicError::DuplicateVariable(i + 1));
                }
            }
        } else {
            return Err(EristicError::Syntax(i + 1));
        }
    }

    // Second pass: validate and emit relations.
    let mut relations: Vec<Relation> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let (kind, content) = if is_attack(line) {
            (RelationKind::Attack, &line["attack(".len()..line.len() - 1])
        } else if is_support(line) {
            (RelationKind::Support, &line["support(".len()..line.len() - 1])
        } else {
            continue;
        };

        let args: Vec<&str> = content.split(',').collect();
        if args.len() != 2 {
            return Err(EristicError::Arity(i + 1));
        }
        if !labels.contains(args[0]) || !labels.contains(args[1]) {
            return Err(EristicError::UnknownVariable(i + 1));
        }

        relations.push(Relation {
            kind,
            source: String::from(args[0]),
            target: String::from(args[1]),
            line: i + 1
        });
    }

    tracing::debug!(
        arguments = labels.len(),
        relations = relations.len(),
        "parsed model"
    );

    Ok(ParsedModel {
        labels: labels.into_iter().collect(),
        relations
    })
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

fn is_args(line: &str) -> bool {
    line.starts_with("args{") && line.ends_with('}')
}

fn is_attack(line: &str) -> bool {
    line.starts_with("attack(") && line.ends_with(')')
}

fn is_support(line: &str) -> bool {
    line.starts_with("support(") && line.ends_with(')')
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn labels_and_relations() {
        let model = parse("args{A,B,C}\nattack(A,B)\nsupport(C,B)\n").unwrap();

        assert_eq!(model.labels(), ["A", "B", "C"]);
        assert_eq!(model.relations().len(), 2);

        let att = &model.relations()[0];
        assert_eq!(att.kind, RelationKind::Attack);
        assert_eq!(att.source, "A");
        assert_eq!(att.target, "B");
        assert_eq!(att.line, 2);

        let sup = &model.relations()[1];
        assert_eq!(sup.kind, RelationKind::Support);
        assert_eq!(sup.source, "C");
        assert_eq!(sup.target, "B");
        assert_eq!(sup.line, 3);
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let model = parse("# a comment\n\nargs{A,B}\n\n# another\nattack(A,B)\n").unwrap();
        assert_eq!(model.labels(), ["A", "B"]);
        assert_eq!(model.relations().len(), 1);
        assert_eq!(model.relations()[0].line, 6);
    }

    #[test]
    fn forward_reference_across_lines() {
        // B is declared after the relation that uses it
        let model = parse("args{A}\nattack(A,B)\nargs{B}\n").unwrap();
        assert_eq!(model.labels(), ["A", "B"]);
        assert_eq!(model.relations().len(), 1);
    }

    #[test]
    fn empty_model() {
        assert_eq!(parse("").unwrap_err(), EristicError::EmptyModel);
        assert_eq!(parse("\n\n").unwrap_err(), EristicError::EmptyModel);
    }

    #[test]
    fn duplicate_variable_cites_args_line() {
        assert_eq!(
            parse("args{A,B,A}\n").unwrap_err(),
            EristicError::DuplicateVariable(1)
        );
        // duplicates are detected across separate args lines as well
        assert_eq!(
            parse("args{A,B}\nargs{B}\n").unwrap_err(),
            EristicError::DuplicateVariable(2)
        );
    }

    #[test]
    fn arity_error() {
        assert_eq!(
            parse("args{A,B,C}\nattack(A,B,C)\n").unwrap_err(),
            EristicError::Arity(2)
        );
        assert_eq!(
            parse("args{A}\nsupport(A)\n").unwrap_err(),
            EristicError::Arity(2)
        );
    }

    #[test]
    fn unknown_variable() {
        assert_eq!(
            parse("args{A,B}\nattack(A,Z)\n").unwrap_err(),
            EristicError::UnknownVariable(2)
        );
    }

    #[test]
    fn syntax_error_on_typo() {
        assert_eq!(
            parse("args{A,B}\nsupprot(A,B)\n").unwrap_err(),
            EristicError::Syntax(2)
        );
    }

    #[test]
    fn syntax_error_before_relation_errors() {
        // the bad line is found in the first pass, before the arity check of
        // the relation above it would run
        assert_eq!(
            parse("args{A,B}\nattack(A,B,B)\nnonsense\n").unwrap_err(),
            EristicError::Syntax(3)
        );
    }

    #[test]
    fn reparse_is_deterministic() {
        let text = "args{A,B,C}\nattack(A,B)\nsupport(C,B)\n";
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    }

}
