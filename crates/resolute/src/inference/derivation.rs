//! Clause derivation tracking.
//!
//! Records how each clause entered the clause set (input role, or the
//! resolution premises that produced it).

use crate::fol::ClauseRole;
use serde::{Deserialize, Serialize};

/// How a clause was derived.
///
/// Premises are indices into the clause set of the saturation run that
/// produced the clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    /// Name of the inference rule that produced this clause
    pub rule_name: String,
    /// Indices of the premise clauses used in the inference
    pub premises: Vec<usize>,
}

impl Derivation {
    /// Create an input derivation (no premises)
    pub fn input(role: ClauseRole) -> Self {
        let rule_name = match role {
            ClauseRole::Axiom => "Axiom",
            ClauseRole::NegatedQuery => "NegatedQuery",
        };
        Derivation {
            rule_name: rule_name.into(),
            premises: vec![],
        }
    }

    /// Binary resolution between two clauses
    pub fn resolution(premise1: usize, premise2: usize) -> Self {
        Derivation {
            rule_name: "Resolution".into(),
            premises: vec![premise1, premise2],
        }
    }

    pub fn is_input(&self) -> bool {
        self.premises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_input() {
        let input = Derivation::input(ClauseRole::NegatedQuery);
        assert_eq!(input.rule_name, "NegatedQuery");
        assert!(input.is_input());
    }

    #[test]
    fn test_derivation_resolution() {
        let res = Derivation::resolution(1, 2);
        assert_eq!(res.rule_name, "Resolution");
        assert_eq!(res.premises, vec![1, 2]);
        assert!(!res.is_input());
    }

    #[test]
    fn test_serialization() {
        let deriv = Derivation::resolution(1, 2);
        let json = serde_json::to_string(&deriv).unwrap();
        let parsed: Derivation = serde_json::from_str(&json).unwrap();
        assert_eq!(deriv, parsed);
    }
}
