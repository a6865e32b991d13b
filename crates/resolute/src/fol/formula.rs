//! Propositional formulas prior to CNF conversion

use super::literal::Literal;
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Propositional formula over atoms.
///
/// Atoms are nullary constants (`P12`) or, when first-order atoms are used
/// as opaque propositions, predicate terms (`Breeze(x1, y1)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// Atomic formula
    Atom(Term),
    /// Negation
    Not(Box<Formula>),
    /// Conjunction
    And(Box<Formula>, Box<Formula>),
    /// Disjunction
    Or(Box<Formula>, Box<Formula>),
    /// Implication
    Implies(Box<Formula>, Box<Formula>),
    /// Biconditional
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Propositional atom with the given name
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(Term::constant(name))
    }

    pub fn negation(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// Collect the distinct atoms of this formula in order of first occurrence
    pub fn atoms(&self) -> Vec<&Term> {
        let mut atoms = Vec::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms<'a>(&'a self, atoms: &mut Vec<&'a Term>) {
        match self {
            Formula::Atom(t) => {
                if !atoms.contains(&t) {
                    atoms.push(t);
                }
            }
            Formula::Not(f) => f.collect_atoms(atoms),
            Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) | Formula::Iff(a, b) => {
                a.collect_atoms(atoms);
                b.collect_atoms(atoms);
            }
        }
    }

    /// Evaluate under a truth assignment for atoms
    pub fn evaluate(&self, assignment: &impl Fn(&Term) -> bool) -> bool {
        match self {
            Formula::Atom(t) => assignment(t),
            Formula::Not(f) => !f.evaluate(assignment),
            Formula::And(a, b) => a.evaluate(assignment) && b.evaluate(assignment),
            Formula::Or(a, b) => a.evaluate(assignment) || b.evaluate(assignment),
            Formula::Implies(a, b) => !a.evaluate(assignment) || b.evaluate(assignment),
            Formula::Iff(a, b) => a.evaluate(assignment) == b.evaluate(assignment),
        }
    }
}

impl From<Literal> for Formula {
    fn from(literal: Literal) -> Self {
        let atom = Formula::Atom(literal.atom);
        if literal.polarity {
            atom
        } else {
            Formula::negation(atom)
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(t) => write!(f, "{}", t),
            Formula::Not(inner) => write!(f, "¬{}", inner),
            Formula::And(a, b) => write!(f, "({} ∧ {})", a, b),
            Formula::Or(a, b) => write!(f, "({} ∨ {})", a, b),
            Formula::Implies(a, b) => write!(f, "({} ⇒ {})", a, b),
            Formula::Iff(a, b) => write!(f, "({} ⇔ {})", a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atoms_are_distinct() {
        // B11 <=> (P12 | B11)
        let f = Formula::iff(
            Formula::atom("B11"),
            Formula::or(Formula::atom("P12"), Formula::atom("B11")),
        );
        let names: Vec<String> = f.atoms().iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["B11", "P12"]);
    }

    #[test]
    fn test_evaluate_implication() {
        let f = Formula::implies(Formula::atom("P"), Formula::atom("Q"));
        let p_only = |t: &Term| t == &Term::constant("P");
        let both = |_: &Term| true;
        assert!(!f.evaluate(&p_only));
        assert!(f.evaluate(&both));
    }

    #[test]
    fn test_from_negative_literal() {
        let f: Formula = Literal::negative(Term::constant("Q")).into();
        assert_eq!(f, Formula::negation(Formula::atom("Q")));
    }

    #[test]
    fn test_display() {
        let f = Formula::and(
            Formula::negation(Formula::atom("B11")),
            Formula::implies(Formula::atom("P"), Formula::atom("Q")),
        );
        assert_eq!(f.to_string(), "(¬B11 ∧ (P ⇒ Q))");
    }
}
