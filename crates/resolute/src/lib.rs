//! resolute: a resolution-refutation reasoning engine
//!
//! This library decides whether a knowledge base entails a query by
//! saturating its clause form with binary resolution. It provides
//! first-order terms with Robinson unification, propositional formulas
//! with CNF conversion, and a text syntax for both.

pub mod cnf;
pub mod config;
pub mod error;
pub mod fol;
pub mod inference;
pub mod json;
pub mod parser;
pub mod problem;
pub mod prover;
pub mod saturation;
pub mod unification;

// Re-export commonly used types from fol
pub use fol::{
    is_variable_name, Clause, ClauseRole, Constant, Formula, FunctionSymbol, Literal,
    Substitution, Term, Variable,
};

pub use cnf::{formula_to_cnf, formula_to_cnf_with_config};
pub use config::{CnfConfig, ProverConfig, ReasoningMode};
pub use error::{ResoluteError, Result};
pub use inference::{resolution, resolvents, Derivation, Proof, ProofStep};
pub use parser::{parse_clause, parse_formula, parse_literal, parse_term};
pub use problem::Problem;
pub use prover::{
    detect_mode, entails, entails_first_order, entails_propositional, Outcome, Prover, Query,
    Sentence, Verdict,
};
pub use saturation::{saturate, ResourceLimit, SaturationResult, SaturationState, SaturationStats};
pub use unification::{mgu, unify, unify_sentences};
