//! Text syntax for terms, literals, clauses and propositional formulas
//!
//! ```text
//! term     := Name | Name(term, ...)
//! literal  := [¬ | ~ | ! | not] atom
//! clause   := literal ((∨ | '|' | ,) literal)*
//! formula  := NOT > AND > OR > IMPLIES > IFF, parentheses group
//! ```
//!
//! In argument position a bare name is a variable when it is alphabetic and
//! starts lower-case. In literal and formula position a bare name is a
//! proposition and always a constant.

mod grammar;

use crate::error::{ResoluteError, Result};
use crate::fol::{Clause, Formula, Literal, Term};
use nom::IResult;

pub fn parse_term(input: &str) -> Result<Term> {
    finish(input, grammar::term(input.trim()))
}

pub fn parse_literal(input: &str) -> Result<Literal> {
    finish(input, grammar::literal(input))
}

pub fn parse_clause(input: &str) -> Result<Clause> {
    finish(input, grammar::clause(input))
}

pub fn parse_formula(input: &str) -> Result<Formula> {
    finish(input, grammar::formula(input))
}

/// Require the whole input to be consumed and convert nom errors
fn finish<T>(input: &str, result: IResult<&str, T>) -> Result<T> {
    if input.trim().is_empty() {
        return Err(ResoluteError::parse(input, "empty input"));
    }
    match result {
        Ok((rest, value)) => {
            let rest = rest.trim();
            if rest.is_empty() {
                Ok(value)
            } else {
                Err(ResoluteError::parse(input, format!("unexpected `{}`", rest)))
            }
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let at = e.input.trim();
            let message = if at.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected `{}`", at)
            };
            Err(ResoluteError::parse(input, message))
        }
        Err(nom::Err::Incomplete(_)) => Err(ResoluteError::parse(input, "incomplete input")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predicate_literal() {
        let lit = parse_literal("Parent(x, John)").unwrap();
        assert!(lit.polarity);
        assert_eq!(
            lit.atom,
            Term::function("Parent", vec![Term::var("x"), Term::constant("John")])
        );
    }

    #[test]
    fn test_parse_negative_literals() {
        for input in ["¬King(x)", "~King(x)", "!King(x)", "not King(x)", "NOT King(x)"] {
            let lit = parse_literal(input).unwrap();
            assert!(!lit.polarity, "{}", input);
            assert_eq!(lit.atom.head(), Some(("King", 1)));
        }
    }

    #[test]
    fn test_bare_literal_is_constant() {
        let lit = parse_literal("rain").unwrap();
        assert_eq!(lit.atom, Term::constant("rain"));
    }

    #[test]
    fn test_parse_clause_separators() {
        let expected = parse_clause("¬King(x) ∨ ¬Greedy(x) ∨ Evil(x)").unwrap();
        assert_eq!(expected.len(), 3);
        assert_eq!(parse_clause("~King(x) | ~Greedy(x) | Evil(x)").unwrap(), expected);
        assert_eq!(parse_clause("~King(x), ~Greedy(x), Evil(x)").unwrap(), expected);
    }

    #[test]
    fn test_parse_formula_precedence() {
        let f = parse_formula("P & Q | R => S").unwrap();
        let expected = Formula::implies(
            Formula::or(Formula::and(Formula::atom("P"), Formula::atom("Q")), Formula::atom("R")),
            Formula::atom("S"),
        );
        assert_eq!(f, expected);

        let g = parse_formula("P ∧ Q ∨ R ⇒ S").unwrap();
        assert_eq!(g, expected);

        let h = parse_formula("P and Q or R implies S").unwrap();
        assert_eq!(h, expected);
    }

    #[test]
    fn test_parse_formula_negation_and_parens() {
        let f = parse_formula("B11 <=> (P12 | P21)").unwrap();
        assert_eq!(
            f,
            Formula::iff(
                Formula::atom("B11"),
                Formula::or(Formula::atom("P12"), Formula::atom("P21"))
            )
        );

        let g = parse_formula("¬(P ∧ Q)").unwrap();
        assert_eq!(g, Formula::negation(Formula::and(Formula::atom("P"), Formula::atom("Q"))));
    }

    #[test]
    fn test_implication_is_right_associative() {
        let f = parse_formula("P => Q -> R").unwrap_err();
        // `-` is not an operator
        assert!(matches!(f, ResoluteError::Parse { .. }));

        let g = parse_formula("P => Q → R").unwrap();
        assert_eq!(
            g,
            Formula::implies(Formula::atom("P"), Formula::implies(Formula::atom("Q"), Formula::atom("R")))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_literal("").is_err());
        assert!(parse_literal("P(x").is_err());
        assert!(parse_term("f()").is_err());
        assert!(parse_clause("P |").is_err());
        assert!(parse_formula("(P & Q").is_err());
        assert!(parse_formula("P Q").is_err());

        match parse_formula("P & ") {
            Err(ResoluteError::Parse { input, .. }) => assert_eq!(input, "P & "),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }
}
