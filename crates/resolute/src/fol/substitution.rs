//! Variable substitutions

use super::clause::Clause;
use super::literal::Literal;
use super::term::{Term, Variable};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A substitution mapping variables to terms.
///
/// Bindings are kept in insertion order and may chain (`x -> y`, `y -> John`);
/// [`Substitution::dereference`] follows the chain. Cycles cannot arise as
/// long as every binding goes through the occurs-check in the unifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Substitution {
    map: IndexMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the term a variable is directly bound to
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    /// Check if a variable is bound
    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    /// Iterate over the raw bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.map.iter()
    }

    /// Bind an unbound variable. Callers are responsible for the occurs-check.
    pub(crate) fn bind(&mut self, var: Variable, term: Term) {
        debug_assert!(!self.map.contains_key(&var), "rebinding {}", var);
        self.map.insert(var, term);
    }

    /// Marker for [`Substitution::rollback`]
    pub(crate) fn snapshot(&self) -> usize {
        self.map.len()
    }

    /// Drop every binding added after `mark`
    pub(crate) fn rollback(&mut self, mark: usize) {
        self.map.truncate(mark);
    }

    /// Follow variable bindings at the root of `term` until reaching a
    /// non-variable or an unbound variable
    pub fn walk<'a>(&'a self, term: &'a Term) -> &'a Term {
        let mut current = term;
        while let Term::Variable(v) = current {
            match self.map.get(v) {
                Some(bound) => current = bound,
                None => break,
            }
        }
        current
    }

    /// Fully apply this substitution: chase every variable and rebuild
    /// compound terms with dereferenced arguments
    pub fn dereference(&self, term: &Term) -> Term {
        match self.walk(term) {
            Term::Function(f, args) => Term::Function(
                f.clone(),
                args.iter().map(|arg| self.dereference(arg)).collect(),
            ),
            resolved => resolved.clone(),
        }
    }

    /// Check whether `var` occurs in `term` once bindings are applied
    pub fn occurs(&self, var: &Variable, term: &Term) -> bool {
        match self.walk(term) {
            Term::Variable(v) => v == var,
            Term::Constant(_) => false,
            Term::Function(_, args) => args.iter().any(|arg| self.occurs(var, arg)),
        }
    }

    /// Equivalent substitution where every bound term is fully dereferenced
    pub fn resolved(&self) -> Substitution {
        Substitution {
            map: self
                .map
                .keys()
                .map(|var| (var.clone(), self.dereference(&Term::Variable(var.clone()))))
                .collect(),
        }
    }
}

impl Literal {
    /// Apply a substitution to this literal
    pub fn apply_substitution(&self, subst: &Substitution) -> Literal {
        Literal {
            atom: subst.dereference(&self.atom),
            polarity: self.polarity,
        }
    }
}

impl Clause {
    /// Apply a substitution to every literal of this clause
    pub fn apply_substitution(&self, subst: &Substitution) -> Clause {
        self.literals()
            .map(|lit| lit.apply_substitution(subst))
            .collect()
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", var, term)?;
        }
        write!(f, "}}")
    }
}
