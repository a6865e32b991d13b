//! Clauses (disjunctions of literals)

use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Where an input clause came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseRole {
    /// Sentence of the knowledge base
    #[default]
    Axiom,
    /// Clause obtained by negating the query
    NegatedQuery,
}

/// A clause: a set of literals read as their disjunction.
///
/// Duplicate literals collapse and literal order is irrelevant, so two
/// clauses with the same literals are equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// The empty clause (contradiction)
    pub fn empty() -> Self {
        Clause::default()
    }

    /// A clause with a single literal
    pub fn unit(literal: Literal) -> Self {
        Clause::new([literal])
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if this clause contains a literal together with its exact
    /// complement. Literals that merely unify are not considered.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .filter(|lit| lit.polarity)
            .any(|lit| self.literals.contains(&lit.negate()))
    }

    /// This clause without `literal`
    pub fn without(&self, literal: &Literal) -> Clause {
        Clause {
            literals: self
                .literals
                .iter()
                .filter(|lit| *lit != literal)
                .cloned()
                .collect(),
        }
    }

    /// Disjunction of two clauses
    pub fn union(&self, other: &Clause) -> Clause {
        Clause {
            literals: self.literals.union(&other.literals).cloned().collect(),
        }
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause::unit(literal)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}
