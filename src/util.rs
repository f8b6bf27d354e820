//! Defines the `Error` type for the eristic library

use std::error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, EristicError>;

/// Errors surfaced by parsing, graph construction and inference.
///
/// Line numbers are 1-based and refer to the model text as supplied by the
/// caller. Every error is terminal for the operation that raised it: a failed
/// parse leaves no partial `FactorGraph` behind, and a failed inference run
/// produces no marginals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EristicError {

    /// The model text contained nothing to parse
    EmptyModel,

    /// A non-empty line that is not a comment, an `args{}` declaration or a
    /// relation
    Syntax(usize),

    /// An argument label was declared more than once across all `args{}`
    /// lines combined
    DuplicateVariable(usize),

    /// A relation whose parenthesized content does not split into exactly two
    /// comma-separated tokens
    Arity(usize),

    /// A relation referencing a label that no `args{}` line declared
    UnknownVariable(usize),

    /// Every joint assignment has zero weight, so marginals are undefined
    DegenerateModel,

    /// A general error with the given description
    General(String)

}

impl EristicError {

    /// The offending 1-based line number, for the errors that carry one.
    pub fn line(&self) -> Option<usize> {
        match *self {
            EristicError::Syntax(line) => Some(line),
            EristicError::DuplicateVariable(line) => Some(line),
            EristicError::Arity(line) => Some(line),
            EristicError::UnknownVariable(line) => Some(line),
            _ => None
        }
    }

}

impl fmt::Display for EristicError {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EristicError::EmptyModel =>
                write!(f, "the model is empty; enter or upload a model first"),
            EristicError::Syntax(line) =>
                write!(f, "error in line {}: illegal start of expression", line),
            EristicError::DuplicateVariable(line) =>
                write!(f, "error in line {}: duplicate variable", line),
            EristicError::Arity(line) =>
                write!(f, "error in line {}: relations are binary and need exactly two arguments", line),
            EristicError::UnknownVariable(line) =>
                write!(f, "error in line {}: variable not found", line),
            EristicError::DegenerateModel =>
                write!(f, "degenerate model: every assignment has zero weight"),
            EristicError::General(ref err) =>
                write!(f, "{}", err)
        }
    }

}

impl error::Error for EristicError {}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn line_numbers() {
        assert_eq!(EristicError::Syntax(3).line(), Some(3));
        assert_eq!(EristicError::DuplicateVariable(1).line(), Some(1));
        assert_eq!(EristicError::Arity(7).line(), Some(7));
        assert_eq!(EristicError::UnknownVariable(2).line(), Some(2));
        assert_eq!(EristicError::EmptyModel.line(), None);
        assert_eq!(EristicError::DegenerateModel.line(), None);
    }

    #[test]
    fn display_cites_line() {
        let msg = format!("{}", EristicError::UnknownVariable(4));
        assert!(msg.contains("line 4"));
    }

}
