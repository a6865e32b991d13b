//! Conversion from propositional formulas to CNF
//!
//! Implications and biconditionals are rewritten into disjunctions,
//! negations are pushed down to the atoms (double negations cancel,
//! De Morgan's laws handle negated compounds), conjunctions contribute
//! their clauses side by side and disjunctions merge their operands into
//! one clause.
//!
//! A disjunction whose operand is itself a conjunction is **not** distributed
//! unless [`CnfConfig::distribute`] is set: the literals of every clause of
//! the conjunction are merged into a single clause. `(A ∧ B) ∨ C` becomes
//! `{A, B, C}` instead of `{A, C}, {B, C}`. The merged clause is implied by
//! the input, so entailment proofs stay sound, but some entailments are
//! missed.

use crate::config::CnfConfig;
use crate::fol::{Clause, Formula, Literal};
use indexmap::IndexSet;
use tracing::debug;

/// Convert a formula to CNF with the default configuration
pub fn formula_to_cnf(formula: &Formula) -> Vec<Clause> {
    formula_to_cnf_with_config(formula, &CnfConfig::default())
}

/// Convert a formula to a list of clauses.
///
/// The result has no duplicate clauses and no tautologies. An empty list
/// means the formula is trivially true.
pub fn formula_to_cnf_with_config(formula: &Formula, config: &CnfConfig) -> Vec<Clause> {
    let mut converter = CNFConverter::new(config);
    let clauses = converter.convert(formula, false);

    if converter.merged_conjunctions > 0 {
        debug!(
            formula = %formula,
            merged = converter.merged_conjunctions,
            "conjunction under disjunction merged into a single clause"
        );
    }

    clauses
        .into_iter()
        .filter(|clause| !clause.is_tautology())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

struct CNFConverter<'a> {
    config: &'a CnfConfig,
    merged_conjunctions: usize,
}

impl<'a> CNFConverter<'a> {
    fn new(config: &'a CnfConfig) -> Self {
        CNFConverter {
            config,
            merged_conjunctions: 0,
        }
    }

    /// Clauses for `formula`, or for its negation when `negated` is set.
    ///
    /// Intermediate results keep tautologies so that every subformula yields
    /// at least one clause; an empty list would read as `true` and merging it
    /// into a disjunction would strengthen the result.
    fn convert(&mut self, formula: &Formula, negated: bool) -> Vec<Clause> {
        match (formula, negated) {
            (Formula::Atom(atom), false) => vec![Clause::unit(Literal::positive(atom.clone()))],
            (Formula::Atom(atom), true) => vec![Clause::unit(Literal::negative(atom.clone()))],

            // Double negation - just flip and continue
            (Formula::Not(inner), neg) => self.convert(inner, !neg),

            // A ∧ B, and De Morgan: ~(A | B) = ~A & ~B
            (Formula::And(a, b), false) | (Formula::Or(a, b), true) => {
                let mut clauses = self.convert(a, negated);
                clauses.extend(self.convert(b, negated));
                clauses
            }

            // A | B, and De Morgan: ~(A & B) = ~A | ~B
            (Formula::Or(a, b), false) | (Formula::And(a, b), true) => {
                let left = self.convert(a, negated);
                let right = self.convert(b, negated);
                self.disjoin(left, right)
            }

            // A => B = ~A | B
            (Formula::Implies(a, b), false) => {
                let left = self.convert(a, true);
                let right = self.convert(b, false);
                self.disjoin(left, right)
            }
            // ~(A => B) = A & ~B
            (Formula::Implies(a, b), true) => {
                let mut clauses = self.convert(a, false);
                clauses.extend(self.convert(b, true));
                clauses
            }

            // A <=> B = (~A | B) & (~B | A)
            (Formula::Iff(a, b), false) => {
                let forward = {
                    let left = self.convert(a, true);
                    let right = self.convert(b, false);
                    self.disjoin(left, right)
                };
                let backward = {
                    let left = self.convert(b, true);
                    let right = self.convert(a, false);
                    self.disjoin(left, right)
                };
                let mut clauses = forward;
                clauses.extend(backward);
                clauses
            }
            // ~(A <=> B) = (A | B) & (~A | ~B)
            (Formula::Iff(a, b), true) => {
                let some = {
                    let left = self.convert(a, false);
                    let right = self.convert(b, false);
                    self.disjoin(left, right)
                };
                let not_both = {
                    let left = self.convert(a, true);
                    let right = self.convert(b, true);
                    self.disjoin(left, right)
                };
                let mut clauses = some;
                clauses.extend(not_both);
                clauses
            }
        }
    }

    /// Disjunction of two clause lists
    fn disjoin(&mut self, left: Vec<Clause>, right: Vec<Clause>) -> Vec<Clause> {
        if self.config.distribute {
            let mut clauses = Vec::with_capacity(left.len() * right.len());
            for l in &left {
                for r in &right {
                    clauses.push(l.union(r));
                }
            }
            return clauses;
        }

        if left.len() > 1 || right.len() > 1 {
            self.merged_conjunctions += 1;
        }
        let merged = left
            .iter()
            .chain(right.iter())
            .fold(Clause::empty(), |acc, clause| acc.union(clause));
        vec![merged]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::Term;

    fn pos(name: &str) -> Literal {
        Literal::positive(Term::constant(name))
    }

    fn neg(name: &str) -> Literal {
        Literal::negative(Term::constant(name))
    }

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    #[test]
    fn test_atom_and_negated_atom() {
        assert_eq!(formula_to_cnf(&atom("P")), vec![Clause::unit(pos("P"))]);
        assert_eq!(
            formula_to_cnf(&Formula::negation(atom("P"))),
            vec![Clause::unit(neg("P"))]
        );
    }

    #[test]
    fn test_double_negation() {
        let f = Formula::negation(Formula::negation(atom("P")));
        assert_eq!(formula_to_cnf(&f), vec![Clause::unit(pos("P"))]);
    }

    #[test]
    fn test_implication() {
        let f = Formula::implies(atom("P"), atom("Q"));
        assert_eq!(formula_to_cnf(&f), vec![Clause::new(vec![neg("P"), pos("Q")])]);
    }

    #[test]
    fn test_conjunction_is_union_of_clauses() {
        let f = Formula::and(atom("P"), Formula::and(atom("Q"), atom("P")));
        assert_eq!(
            formula_to_cnf(&f),
            vec![Clause::unit(pos("P")), Clause::unit(pos("Q"))]
        );
    }

    #[test]
    fn test_nested_disjunction_flattens() {
        let f = Formula::or(
            Formula::or(atom("P"), Formula::negation(atom("Q"))),
            Formula::or(atom("R"), atom("P")),
        );
        assert_eq!(
            formula_to_cnf(&f),
            vec![Clause::new(vec![pos("P"), neg("Q"), pos("R")])]
        );
    }

    #[test]
    fn test_biconditional() {
        // B11 <=> P12  ->  (~B11 | P12) & (~P12 | B11)
        let f = Formula::iff(atom("B11"), atom("P12"));
        assert_eq!(
            formula_to_cnf(&f),
            vec![
                Clause::new(vec![neg("B11"), pos("P12")]),
                Clause::new(vec![neg("P12"), pos("B11")]),
            ]
        );
    }

    #[test]
    fn test_tautologies_are_dropped() {
        let f = Formula::and(Formula::or(atom("P"), Formula::negation(atom("P"))), atom("Q"));
        assert_eq!(formula_to_cnf(&f), vec![Clause::unit(pos("Q"))]);

        let always = Formula::implies(atom("P"), atom("P"));
        assert!(formula_to_cnf(&always).is_empty());
    }

    #[test]
    fn test_de_morgan() {
        let f = Formula::negation(Formula::or(atom("P"), atom("Q")));
        assert_eq!(
            formula_to_cnf(&f),
            vec![Clause::unit(neg("P")), Clause::unit(neg("Q"))]
        );

        let g = Formula::negation(Formula::and(atom("P"), atom("Q")));
        assert_eq!(formula_to_cnf(&g), vec![Clause::new(vec![neg("P"), neg("Q")])]);
    }

    #[test]
    fn test_negated_implication() {
        let f = Formula::negation(Formula::implies(atom("P"), atom("Q")));
        assert_eq!(
            formula_to_cnf(&f),
            vec![Clause::unit(pos("P")), Clause::unit(neg("Q"))]
        );
    }

    #[test]
    fn test_conjunction_under_disjunction_is_merged_by_default() {
        // (P & Q) | R
        let f = Formula::or(Formula::and(atom("P"), atom("Q")), atom("R"));
        assert_eq!(
            formula_to_cnf(&f),
            vec![Clause::new(vec![pos("P"), pos("Q"), pos("R")])]
        );
    }

    #[test]
    fn test_conjunction_under_disjunction_distributes_when_enabled() {
        let f = Formula::or(Formula::and(atom("P"), atom("Q")), atom("R"));
        let config = CnfConfig { distribute: true };
        assert_eq!(
            formula_to_cnf_with_config(&f, &config),
            vec![
                Clause::new(vec![pos("P"), pos("R")]),
                Clause::new(vec![pos("Q"), pos("R")]),
            ]
        );
    }

    #[test]
    fn test_breeze_biconditional() {
        // B11 <=> (P12 | P21)
        let f = Formula::iff(atom("B11"), Formula::or(atom("P12"), atom("P21")));
        let clauses = formula_to_cnf(&f);
        assert_eq!(
            clauses[0],
            Clause::new(vec![neg("B11"), pos("P12"), pos("P21")])
        );
        // ~(P12 | P21) | B11 is merged into one clause
        assert_eq!(
            clauses[1],
            Clause::new(vec![neg("P12"), neg("P21"), pos("B11")])
        );

        let exact = formula_to_cnf_with_config(&f, &CnfConfig { distribute: true });
        assert_eq!(exact.len(), 3);
        assert!(exact.contains(&Clause::new(vec![neg("P12"), pos("B11")])));
        assert!(exact.contains(&Clause::new(vec![neg("P21"), pos("B11")])));
    }
}
