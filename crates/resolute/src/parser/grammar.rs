//! nom grammar for terms, literals, clauses and propositional formulas

use crate::fol::{Clause, Formula, Literal, Term};
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while1},
    character::complete::{char, multispace0, satisfy},
    combinator::{map, not, opt},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Wrap a parser so it skips surrounding whitespace
fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Case-insensitive word operator such as `and`; must not run into an identifier
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag_no_case(word), not(satisfy(is_ident_char)))
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_ident_char)(input)
}

/// `(t1, t2, ...)` with at least one argument
fn arguments(input: &str) -> IResult<&str, Vec<Term>> {
    delimited(
        tuple((char('('), multispace0)),
        separated_list1(tuple((multispace0, char(','), multispace0)), term),
        tuple((multispace0, char(')'))),
    )(input)
}

/// Parse a term. A bare identifier is a variable when it is alphabetic and
/// starts lower-case, otherwise a constant.
pub(super) fn term(input: &str) -> IResult<&str, Term> {
    let (input, name) = identifier(input)?;
    let (input, args) = opt(preceded(multispace0, arguments))(input)?;
    let term = match args {
        Some(args) => Term::function(name, args),
        None => Term::from_name(name),
    };
    Ok((input, term))
}

/// Parse an atom in literal or formula position. Bare names here are
/// propositions, so they are always constants.
fn atom(input: &str) -> IResult<&str, Term> {
    let (input, name) = identifier(input)?;
    let (input, args) = opt(preceded(multispace0, arguments))(input)?;
    let atom = match args {
        Some(args) => Term::function(name, args),
        None => Term::constant(name),
    };
    Ok((input, atom))
}

fn negation_sign(input: &str) -> IResult<&str, &str> {
    alt((tag("¬"), tag("~"), tag("!"), keyword("not")))(input)
}

pub(super) fn literal(input: &str) -> IResult<&str, Literal> {
    alt((
        map(preceded(ws(negation_sign), literal), |lit| lit.negate()),
        map(ws(atom), Literal::positive),
    ))(input)
}

fn clause_separator(input: &str) -> IResult<&str, &str> {
    alt((tag("∨"), tag("|"), tag(",")))(input)
}

pub(super) fn clause(input: &str) -> IResult<&str, Clause> {
    map(separated_list1(ws(clause_separator), literal), Clause::new)(input)
}

fn and_op(input: &str) -> IResult<&str, &str> {
    alt((tag("∧"), tag("&"), keyword("and")))(input)
}

fn or_op(input: &str) -> IResult<&str, &str> {
    alt((tag("∨"), tag("|"), keyword("or")))(input)
}

fn implies_op(input: &str) -> IResult<&str, &str> {
    alt((tag("⇒"), tag("→"), tag("=>"), keyword("implies")))(input)
}

fn iff_op(input: &str) -> IResult<&str, &str> {
    alt((tag("⇔"), tag("↔"), tag("<=>"), keyword("iff")))(input)
}

/// Lowest precedence: `A ⇔ B`, right-associative
pub(super) fn formula(input: &str) -> IResult<&str, Formula> {
    let (input, left) = implication(input)?;
    match preceded(ws(iff_op), formula)(input) {
        Ok((input, right)) => Ok((input, Formula::iff(left, right))),
        Err(nom::Err::Error(_)) => Ok((input, left)),
        Err(e) => Err(e),
    }
}

fn implication(input: &str) -> IResult<&str, Formula> {
    let (input, left) = disjunction(input)?;
    match preceded(ws(implies_op), implication)(input) {
        Ok((input, right)) => Ok((input, Formula::implies(left, right))),
        Err(nom::Err::Error(_)) => Ok((input, left)),
        Err(e) => Err(e),
    }
}

fn disjunction(input: &str) -> IResult<&str, Formula> {
    let (input, (first, rest)) = pair(conjunction, many0(preceded(ws(or_op), conjunction)))(input)?;
    Ok((input, rest.into_iter().fold(first, Formula::or)))
}

fn conjunction(input: &str) -> IResult<&str, Formula> {
    let (input, (first, rest)) = pair(unary, many0(preceded(ws(and_op), unary)))(input)?;
    Ok((input, rest.into_iter().fold(first, Formula::and)))
}

fn unary(input: &str) -> IResult<&str, Formula> {
    ws(alt((
        map(preceded(ws(negation_sign), unary), Formula::negation),
        delimited(tuple((char('('), multispace0)), formula, tuple((multispace0, char(')')))),
        map(atom, Formula::Atom),
    )))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_variable_rule() {
        assert_eq!(term("x").unwrap().1, Term::var("x"));
        assert_eq!(term("John").unwrap().1, Term::constant("John"));
        assert_eq!(term("x1").unwrap().1, Term::constant("x1"));
        assert_eq!(
            term("father( x )").unwrap().1,
            Term::function("father", vec![Term::var("x")])
        );
    }

    #[test]
    fn test_keyword_needs_boundary() {
        // "notary" is an atom, not a negation
        let (rest, lit) = literal("notary").unwrap();
        assert_eq!(rest, "");
        assert!(lit.polarity);

        let (_, lit) = literal("not Rich(x)").unwrap();
        assert!(!lit.polarity);
    }

    #[test]
    fn test_double_negation_in_literal() {
        let (_, lit) = literal("~~P").unwrap();
        assert_eq!(lit, Literal::positive(Term::constant("P")));
    }

    #[test]
    fn test_iff_is_right_associative() {
        let (_, f) = formula("A <=> B <=> C").unwrap();
        assert_eq!(
            f,
            Formula::iff(Formula::atom("A"), Formula::iff(Formula::atom("B"), Formula::atom("C")))
        );
    }

    #[test]
    fn test_or_is_left_folded() {
        let (_, f) = formula("A | B | C").unwrap();
        assert_eq!(
            f,
            Formula::or(Formula::or(Formula::atom("A"), Formula::atom("B")), Formula::atom("C"))
        );
    }
}
