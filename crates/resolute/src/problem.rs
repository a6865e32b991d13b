//! Problem files: a knowledge base, a query and prover settings in JSON
//!
//! ```json
//! {
//!   "mode": "first_order",
//!   "kb": ["~King(x) | ~Greedy(x) | Evil(x)", "King(John)", "Greedy(John)"],
//!   "query": "Evil(John)",
//!   "config": { "max_rounds": 50 }
//! }
//! ```
//!
//! In `first_order` mode every KB entry is a clause and the query a
//! literal. In `propositional` mode they are formulas.

use crate::config::{ProverConfig, ReasoningMode};
use crate::error::{ResoluteError, Result};
use crate::parser::{parse_clause, parse_formula, parse_literal};
use crate::prover::{Outcome, Prover, Query, Sentence};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub mode: ReasoningMode,
    pub kb: Vec<String>,
    pub query: String,
    #[serde(default)]
    pub config: ProverConfig,
}

impl Problem {
    pub fn from_json(input: &str) -> Result<Self> {
        let problem: Problem = serde_json::from_str(input)?;
        if problem.query.trim().is_empty() {
            return Err(ResoluteError::InvalidInput("query is empty".into()));
        }
        Ok(problem)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading problem file");
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse the knowledge base and query according to the mode
    pub fn sentences(&self) -> Result<(Vec<Sentence>, Query)> {
        match self.mode {
            ReasoningMode::FirstOrder => {
                let kb = self
                    .kb
                    .iter()
                    .map(|s| parse_clause(s).map(Sentence::Clause))
                    .collect::<Result<Vec<_>>>()?;
                let query = Query::Literal(parse_literal(&self.query)?);
                Ok((kb, query))
            }
            ReasoningMode::Propositional => {
                let kb = self
                    .kb
                    .iter()
                    .map(|s| parse_formula(s).map(Sentence::Formula))
                    .collect::<Result<Vec<_>>>()?;
                let query = Query::Formula(parse_formula(&self.query)?);
                Ok((kb, query))
            }
        }
    }

    pub fn solve(&self) -> Result<Outcome> {
        let (kb, query) = self.sentences()?;
        Ok(Prover::new(self.config.clone()).prove(&kb, &query))
    }
}
