//! Literals: signed atomic formulas

use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal (positive or negative atom).
///
/// The atom is a predicate term such as `King(John)`, or a nullary
/// constant such as `P12` in propositional problems.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub atom: Term,
    pub polarity: bool, // true = positive, false = negative
}

impl Literal {
    /// Create a new positive literal
    pub fn positive(atom: Term) -> Self {
        Literal {
            atom,
            polarity: true,
        }
    }

    /// Create a new negative literal
    pub fn negative(atom: Term) -> Self {
        Literal {
            atom,
            polarity: false,
        }
    }

    /// Get the negation of this literal (same atom, flipped polarity)
    pub fn negate(&self) -> Literal {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// Syntactic complement: same atom, opposite polarity
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.polarity != other.polarity && self.atom == other.atom
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "¬")?;
        }
        write!(f, "{}", self.atom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn king(arg: Term) -> Term {
        Term::function("King", vec![arg])
    }

    #[test]
    fn test_negate_flips_polarity_only() {
        let lit = Literal::positive(king(Term::constant("John")));
        let neg = lit.negate();
        assert!(!neg.polarity);
        assert_eq!(neg.atom, lit.atom);
        assert_eq!(neg.negate(), lit);
    }

    #[test]
    fn test_complement_is_syntactic() {
        let pos = Literal::positive(king(Term::constant("John")));
        let neg = Literal::negative(king(Term::constant("John")));
        let neg_var = Literal::negative(king(Term::var("x")));

        assert!(pos.is_complement_of(&neg));
        assert!(neg.is_complement_of(&pos));
        assert!(!pos.is_complement_of(&pos));
        // Unifiable but not identical atoms are not complements here
        assert!(!pos.is_complement_of(&neg_var));
    }

    #[test]
    fn test_display() {
        assert_eq!(Literal::negative(king(Term::var("x"))).to_string(), "¬King(x)");
        assert_eq!(Literal::positive(Term::constant("P12")).to_string(), "P12");
    }
}
