//! Conjunctive normal form for propositional formulas

mod conversion;


pub use conversion::{formula_to_cnf, formula_to_cnf_with_config};
