//! Entailment by refutation.
//!
//! `KB ⊨ query` is decided by adding the negated query to the clause form
//! of the knowledge base and saturating with binary resolution. Deriving
//! the empty clause means the query is entailed. Reaching a fixed point
//! means it is not.
//!
//! Formulas always pass through CNF conversion first. A run is
//! propositional, with literals matching only when their atoms are
//! identical, when the knowledge base holds no clause and at least one
//! formula is given. Every other run is first-order, with unification
//! between complementary literals.
//! Ground atoms unify exactly when they are equal, so mixing formulas into
//! a clause set never loses a first-order inference.

use crate::cnf::formula_to_cnf_with_config;
use crate::config::{ProverConfig, ReasoningMode};
use crate::fol::{Clause, ClauseRole, Formula, Literal};
use crate::inference::Proof;
use crate::saturation::{saturate, ResourceLimit, SaturationResult, SaturationStats};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// A knowledge-base sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentence {
    Clause(Clause),
    Formula(Formula),
}

impl From<Clause> for Sentence {
    fn from(clause: Clause) -> Self {
        Sentence::Clause(clause)
    }
}

impl From<Literal> for Sentence {
    fn from(literal: Literal) -> Self {
        Sentence::Clause(Clause::unit(literal))
    }
}

impl From<Formula> for Sentence {
    fn from(formula: Formula) -> Self {
        Sentence::Formula(formula)
    }
}

/// The sentence whose entailment is asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Literal(Literal),
    Formula(Formula),
}

impl From<Literal> for Query {
    fn from(literal: Literal) -> Self {
        Query::Literal(literal)
    }
}

impl From<Formula> for Query {
    fn from(formula: Formula) -> Self {
        Query::Formula(formula)
    }
}

/// Reasoning mode implied by the shape of the inputs.
///
/// Propositional only when every knowledge-base sentence is a formula and
/// at least one formula is present. Any clause keeps the run first-order.
pub fn detect_mode(kb: &[Sentence], query: &Query) -> ReasoningMode {
    let has_clause = kb.iter().any(|s| matches!(s, Sentence::Clause(_)));
    let has_formula = matches!(query, Query::Formula(_))
        || kb.iter().any(|s| matches!(s, Sentence::Formula(_)));
    if has_formula && !has_clause {
        ReasoningMode::Propositional
    } else {
        ReasoningMode::FirstOrder
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "limit", rename_all = "snake_case")]
pub enum Verdict {
    /// The empty clause was derived
    Entailed,
    /// Saturation reached a fixed point without the empty clause
    NotEntailed,
    /// A configured budget ran out before either of the above
    ResourceExhausted(ResourceLimit),
}

impl Verdict {
    pub fn is_entailed(&self) -> bool {
        matches!(self, Verdict::Entailed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Entailed => write!(f, "entailed"),
            Verdict::NotEntailed => write!(f, "not entailed"),
            Verdict::ResourceExhausted(limit) => write!(f, "unknown ({})", limit),
        }
    }
}

/// Verdict of one run plus what was learned along the way
#[derive(Debug, Clone)]
pub struct Outcome {
    pub verdict: Verdict,
    pub mode: ReasoningMode,
    pub stats: SaturationStats,
    /// Present when the verdict is `Entailed`
    pub proof: Option<Proof>,
}

/// Refutation prover with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Prover {
    config: ProverConfig,
}

impl Prover {
    pub fn new(config: ProverConfig) -> Self {
        Prover { config }
    }

    /// Decide `kb ⊨ query`, choosing the mode from the inputs
    pub fn prove(&self, kb: &[Sentence], query: &Query) -> Outcome {
        let mut clauses = Vec::new();
        for sentence in kb {
            match sentence {
                Sentence::Clause(c) => clauses.push((c.clone(), ClauseRole::Axiom)),
                Sentence::Formula(f) => clauses.extend(self.axiom_clauses(f)),
            }
        }
        match query {
            Query::Literal(lit) => {
                clauses.push((Clause::unit(lit.negate()), ClauseRole::NegatedQuery))
            }
            Query::Formula(f) => clauses.extend(self.negated_query_clauses(f)),
        }
        self.run(clauses, detect_mode(kb, query))
    }

    /// First-order entailment of a literal by a set of clauses.
    ///
    /// Clauses are not renamed apart: a variable name shared by two clauses
    /// is one variable during resolution. `{P(x, A), ¬P(B, x) ∨ Q}` does not
    /// entail `Q` unless one `x` is renamed by hand.
    pub fn prove_first_order(&self, kb: &[Clause], query: &Literal) -> Outcome {
        let clauses = kb
            .iter()
            .map(|c| (c.clone(), ClauseRole::Axiom))
            .chain(std::iter::once((
                Clause::unit(query.negate()),
                ClauseRole::NegatedQuery,
            )))
            .collect();
        self.run(clauses, ReasoningMode::FirstOrder)
    }

    /// Propositional entailment of a formula by a set of formulas
    pub fn prove_propositional(&self, kb: &[Formula], query: &Formula) -> Outcome {
        let mut clauses: Vec<_> = kb.iter().flat_map(|f| self.axiom_clauses(f)).collect();
        clauses.extend(self.negated_query_clauses(query));
        self.run(clauses, ReasoningMode::Propositional)
    }

    fn axiom_clauses(&self, formula: &Formula) -> Vec<(Clause, ClauseRole)> {
        formula_to_cnf_with_config(formula, &self.config.cnf)
            .into_iter()
            .map(|c| (c, ClauseRole::Axiom))
            .collect()
    }

    fn negated_query_clauses(&self, query: &Formula) -> Vec<(Clause, ClauseRole)> {
        let negated = Formula::negation(query.clone());
        formula_to_cnf_with_config(&negated, &self.config.cnf)
            .into_iter()
            .map(|c| (c, ClauseRole::NegatedQuery))
            .collect()
    }

    fn run(&self, clauses: Vec<(Clause, ClauseRole)>, mode: ReasoningMode) -> Outcome {
        debug!(?mode, clauses = clauses.len(), "starting saturation");
        let (result, stats) = saturate(clauses, mode, self.config.clone());

        let (verdict, proof) = match result {
            SaturationResult::Proof(proof) => (Verdict::Entailed, Some(proof)),
            SaturationResult::Saturated => (Verdict::NotEntailed, None),
            SaturationResult::ResourceLimit(limit) => (Verdict::ResourceExhausted(limit), None),
        };

        info!(
            %verdict,
            rounds = stats.rounds,
            clauses = stats.final_clauses,
            elapsed_ms = stats.total_time.as_millis() as u64,
            "saturation finished"
        );

        Outcome {
            verdict,
            mode,
            stats,
            proof,
        }
    }
}

/// Whether `kb` entails `query`, with default (unbounded) configuration.
///
/// A run that exhausts no budget always ends in `Entailed` or
/// `NotEntailed`, but a first-order problem may not terminate.
pub fn entails(kb: &[Sentence], query: &Query) -> bool {
    Prover::default().prove(kb, query).verdict.is_entailed()
}

/// First-order entailment with default configuration.
///
/// Incomplete: clauses are not renamed apart, so proofs that need the same
/// variable name instantiated differently in two clauses are missed. Give
/// every clause its own variable names to avoid this.
pub fn entails_first_order(kb: &[Clause], query: &Literal) -> bool {
    Prover::default().prove_first_order(kb, query).verdict.is_entailed()
}

pub fn entails_propositional(kb: &[Formula], query: &Formula) -> bool {
    Prover::default().prove_propositional(kb, query).verdict.is_entailed()
}
