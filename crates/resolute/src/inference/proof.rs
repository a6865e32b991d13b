//! Proof tracking structures

use super::derivation::Derivation;
use crate::fol::Clause;
use std::fmt;

/// A single step in a refutation. Every step produces a clause.
#[derive(Debug, Clone)]
pub struct ProofStep {
    pub clause_idx: usize,
    pub derivation: Derivation,
    pub conclusion: Clause,
}

/// A refutation: the clauses needed to derive the empty clause, in
/// derivation order. The last step concludes `⊥`.
#[derive(Debug, Clone)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
    pub empty_clause_idx: usize,
}

impl Proof {
    /// Number of resolution steps (input clauses excluded)
    pub fn inference_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| !step.derivation.is_input())
            .count()
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{:>4}. {}", step.clause_idx, step.conclusion)?;
            if step.derivation.is_input() {
                writeln!(f, "  [{}]", step.derivation.rule_name)?;
            } else {
                let premises: Vec<String> =
                    step.derivation.premises.iter().map(|p| p.to_string()).collect();
                writeln!(f, "  [{} {}]", step.derivation.rule_name, premises.join(", "))?;
            }
        }
        Ok(())
    }
}
