//! Main saturation state and algorithm
//!
//! Refutation by exhaustive binary resolution.
//!
//! ## Clause Set
//!
//! The clause set starts as the knowledge base plus the negated query and
//! only ever grows. It is an insertion-ordered set: a clause's index is its
//! position, which derivations use to name their premises.
//!
//! ## Algorithm
//!
//! Each round:
//!
//! 1. For every unordered pair of distinct clauses in the set, compute all
//!    resolvents.
//! 2. An empty resolvent ends the run: the negated query is inconsistent
//!    with the knowledge base.
//! 3. Tautologies and clauses already in the set (or already derived this
//!    round) are dropped.
//! 4. If nothing new survived, the set is saturated and the query is not
//!    entailed. Otherwise the new clauses are added and every pair is
//!    scanned again, old pairs included.
//!
//! Without resource limits a first-order problem that keeps producing
//! deeper terms never saturates, and this loop does not return.

use super::profile::SaturationStats;
use crate::config::{ProverConfig, ReasoningMode};
use crate::fol::{Clause, ClauseRole};
use crate::inference::{resolvents, Derivation, Proof, ProofStep};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::time::Instant;
use tracing::{debug, trace};

/// Which configured budget stopped saturation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceLimit {
    Rounds,
    Clauses,
    Timeout,
}

impl fmt::Display for ResourceLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLimit::Rounds => write!(f, "round limit reached"),
            ResourceLimit::Clauses => write!(f, "clause limit reached"),
            ResourceLimit::Timeout => write!(f, "timeout"),
        }
    }
}

/// Result of saturation
#[derive(Debug, Clone)]
pub enum SaturationResult {
    /// Empty clause derived - the clause set is unsatisfiable
    Proof(Proof),
    /// Fixed point reached without the empty clause
    Saturated,
    /// A configured budget ran out first
    ResourceLimit(ResourceLimit),
}

enum Exit {
    Refuted(Derivation),
    Saturated,
    Limit(ResourceLimit),
}

/// Clause set and bookkeeping for one refutation attempt.
///
/// See module documentation for algorithm details.
pub struct SaturationState {
    /// All clauses with their derivations, indexed by insertion order
    clauses: IndexMap<Clause, Derivation>,
    mode: ReasoningMode,
    config: ProverConfig,
    stats: SaturationStats,
}

impl SaturationState {
    /// Create new saturation state from initial clauses.
    ///
    /// Tautologies and duplicates among the inputs are dropped here.
    pub fn new(
        initial_clauses: impl IntoIterator<Item = (Clause, ClauseRole)>,
        mode: ReasoningMode,
        config: ProverConfig,
    ) -> Self {
        let mut clauses = IndexMap::new();
        let mut stats = SaturationStats::default();

        for (clause, role) in initial_clauses {
            if clause.is_tautology() {
                trace!(clause = %clause, "input tautology dropped");
                stats.tautologies_deleted += 1;
                continue;
            }
            if clauses.contains_key(&clause) {
                stats.duplicates_deleted += 1;
                continue;
            }
            clauses.insert(clause, Derivation::input(role));
        }
        stats.initial_clauses = clauses.len();

        SaturationState {
            clauses,
            mode,
            config,
            stats,
        }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Run saturation to a verdict or until a budget is exhausted
    pub fn saturate(mut self) -> (SaturationResult, SaturationStats) {
        let start_time = Instant::now();

        let exit = match self.clauses.get_index_of(&Clause::empty()) {
            Some(idx) => {
                debug!(clause_idx = idx, "empty clause among inputs");
                self.stats.total_time = start_time.elapsed();
                self.stats.final_clauses = self.clauses.len();
                let proof = self.extract_proof(idx);
                return (SaturationResult::Proof(proof), self.stats);
            }
            None => self.run_rounds(start_time),
        };

        let result = match exit {
            Exit::Refuted(derivation) => {
                let (idx, _) = self.clauses.insert_full(Clause::empty(), derivation);
                SaturationResult::Proof(self.extract_proof(idx))
            }
            Exit::Saturated => SaturationResult::Saturated,
            Exit::Limit(limit) => SaturationResult::ResourceLimit(limit),
        };

        self.stats.final_clauses = self.clauses.len();
        self.stats.total_time = start_time.elapsed();
        (result, self.stats)
    }

    fn run_rounds(&mut self, start_time: Instant) -> Exit {
        loop {
            if let Some(max) = self.config.max_rounds {
                if self.stats.rounds >= max {
                    return Exit::Limit(ResourceLimit::Rounds);
                }
            }
            if let Some(max) = self.config.max_clauses {
                if self.clauses.len() > max {
                    return Exit::Limit(ResourceLimit::Clauses);
                }
            }
            self.stats.rounds += 1;
            let round = self.stats.rounds;

            let new = match self.resolve_all_pairs(round, start_time) {
                Ok(new) => new,
                Err(exit) => return exit,
            };

            if new.is_empty() {
                debug!(round, total = self.clauses.len(), "saturated");
                return Exit::Saturated;
            }

            debug!(round, added = new.len(), total = self.clauses.len() + new.len(), "round complete");
            self.clauses.extend(new);
        }
    }

    /// One full pass over all clause pairs. Returns the clauses derived
    /// this round, or the reason to stop.
    fn resolve_all_pairs(
        &mut self,
        round: usize,
        start_time: Instant,
    ) -> Result<IndexMap<Clause, Derivation>, Exit> {
        let clauses = &self.clauses;
        let stats = &mut self.stats;
        let mut new: IndexMap<Clause, Derivation> = IndexMap::new();

        for (i, (clause1, _)) in clauses.iter().enumerate() {
            for (j, (clause2, _)) in clauses.iter().enumerate().skip(i + 1) {
                if let Some(timeout) = self.config.timeout {
                    if start_time.elapsed() >= timeout {
                        return Err(Exit::Limit(ResourceLimit::Timeout));
                    }
                }
                stats.pairs_examined += 1;

                for resolvent in resolvents(clause1, clause2, self.mode) {
                    stats.resolvents_generated += 1;

                    if resolvent.is_empty() {
                        debug!(round, premises = ?(i, j), "empty clause derived");
                        return Err(Exit::Refuted(Derivation::resolution(i, j)));
                    }
                    if resolvent.is_tautology() {
                        stats.tautologies_deleted += 1;
                        continue;
                    }
                    if clauses.contains_key(&resolvent) || new.contains_key(&resolvent) {
                        stats.duplicates_deleted += 1;
                        continue;
                    }

                    trace!(round, clause = %resolvent, premises = ?(i, j), "derived");
                    new.insert(resolvent, Derivation::resolution(i, j));

                    if let Some(max) = self.config.max_clauses {
                        if clauses.len() + new.len() > max {
                            return Err(Exit::Limit(ResourceLimit::Clauses));
                        }
                    }
                }
            }
        }

        Ok(new)
    }

    /// Collect the derivation tree of `empty_idx`. Premises always precede
    /// their conclusion, so index order is a valid derivation order.
    fn extract_proof(&self, empty_idx: usize) -> Proof {
        let mut needed = BTreeSet::new();
        let mut stack = vec![empty_idx];
        while let Some(idx) = stack.pop() {
            if needed.insert(idx) {
                if let Some((_, derivation)) = self.clauses.get_index(idx) {
                    stack.extend(derivation.premises.iter().copied());
                }
            }
        }

        let steps = needed
            .into_iter()
            .filter_map(|idx| {
                self.clauses
                    .get_index(idx)
                    .map(|(clause, derivation)| ProofStep {
                        clause_idx: idx,
                        derivation: derivation.clone(),
                        conclusion: clause.clone(),
                    })
            })
            .collect();

        Proof {
            steps,
            empty_clause_idx: empty_idx,
        }
    }
}
