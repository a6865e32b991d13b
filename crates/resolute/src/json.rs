//! JSON output types for prover runs and unification

use crate::config::ReasoningMode;
use crate::fol::Substitution;
use crate::inference::{Proof, ProofStep};
use crate::prover::{Outcome, Verdict};
use crate::saturation::SaturationStats;
use indexmap::IndexMap;
use serde::Serialize;

/// JSON representation of a proof step
#[derive(Debug, Clone, Serialize)]
pub struct ProofStepJson {
    pub clause_idx: usize,
    pub clause: String,
    pub rule: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub premises: Vec<usize>,
}

impl ProofStepJson {
    pub fn from_step(step: &ProofStep) -> Self {
        ProofStepJson {
            clause_idx: step.clause_idx,
            clause: step.conclusion.to_string(),
            rule: step.derivation.rule_name.clone(),
            premises: step.derivation.premises.clone(),
        }
    }

    pub fn from_proof(proof: &Proof) -> Vec<Self> {
        proof.steps.iter().map(ProofStepJson::from_step).collect()
    }
}

/// JSON representation of a prover outcome
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeJson {
    pub entailed: bool,
    #[serde(flatten)]
    pub verdict: Verdict,
    pub mode: ReasoningMode,
    pub stats: SaturationStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Vec<ProofStepJson>>,
}

impl OutcomeJson {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        OutcomeJson {
            entailed: outcome.verdict.is_entailed(),
            verdict: outcome.verdict,
            mode: outcome.mode,
            stats: outcome.stats.clone(),
            proof: outcome.proof.as_ref().map(ProofStepJson::from_proof),
        }
    }
}

/// JSON representation of a unification result.
///
/// Bindings are fully dereferenced, in binding order.
#[derive(Debug, Clone, Serialize)]
pub struct UnificationJson {
    pub unified: bool,
    pub bindings: IndexMap<String, String>,
}

impl UnificationJson {
    pub fn new(unified: bool, subst: &Substitution) -> Self {
        let bindings = subst
            .resolved()
            .iter()
            .map(|(var, term)| (var.to_string(), term.to_string()))
            .collect();
        UnificationJson { unified, bindings }
    }
}
