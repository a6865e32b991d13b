//! Logic data structures
//!
//! This module provides the fundamental types for representing sentences:
//! terms, literals, clauses, substitutions, and propositional formulas.

pub mod clause;
pub mod formula;
pub mod literal;
pub mod substitution;
pub mod term;

// Re-export commonly used types
pub use clause::{Clause, ClauseRole};
pub use formula::Formula;
pub use literal::Literal;
pub use substitution::Substitution;
pub use term::{is_variable_name, Constant, FunctionSymbol, Term, Variable};
