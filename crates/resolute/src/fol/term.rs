//! Terms in first-order logic

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A variable in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable {
    pub name: String,
}

/// A constant symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constant {
    pub name: String,
}

/// A function (or predicate) symbol with arity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub name: String,
    pub arity: usize,
}

/// A term in first-order logic.
///
/// Atomic formulas share this representation: `King(John)` is a
/// `Function` term whose symbol is the predicate, and a propositional
/// atom such as `P12` is a `Constant`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Function(FunctionSymbol, Vec<Term>),
}

/// Lexical variable convention: fully alphabetic with a lower-case first
/// character (`x`, `person`). Everything else (`John`, `x1`, `P12`) is a
/// constant.
pub fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.is_lowercase() && first.is_alphabetic() && chars.all(char::is_alphabetic),
        None => false,
    }
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FunctionSymbol {
            name: name.into(),
            arity,
        }
    }
}

impl Term {
    /// Create a variable term
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(Variable::new(name))
    }

    /// Create a constant term
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant(Constant::new(name))
    }

    /// Create a compound term; the arity is the argument count
    pub fn function(name: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Function(FunctionSymbol::new(name, args.len()), args)
    }

    /// Create a variable or a constant from a bare identifier, following
    /// the lexical variable convention
    pub fn from_name(name: &str) -> Self {
        if is_variable_name(name) {
            Term::var(name)
        } else {
            Term::constant(name)
        }
    }

    /// Name and arity of the outermost symbol, `None` for variables
    pub fn head(&self) -> Option<(&str, usize)> {
        match self {
            Term::Variable(_) => None,
            Term::Constant(c) => Some((&c.name, 0)),
            Term::Function(f, _) => Some((&f.name, f.arity)),
        }
    }

    /// Get all variables in this term, in order of first occurrence
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen = HashSet::new();
        let mut vars = Vec::new();
        self.walk_variables(&mut |v| {
            if seen.insert(v.clone()) {
                vars.push(v.clone());
            }
        });
        vars
    }

    /// Check if the term contains no variables
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Constant(_) => true,
            Term::Function(_, args) => args.iter().all(Term::is_ground),
        }
    }

    fn walk_variables(&self, visit: &mut impl FnMut(&Variable)) {
        match self {
            Term::Variable(v) => visit(v),
            Term::Constant(_) => {}
            Term::Function(_, args) => {
                for arg in args {
                    arg.walk_variables(visit);
                }
            }
        }
    }
}

// Display implementations for pretty printing

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Function(func, args) => {
                write!(f, "{}(", func.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
