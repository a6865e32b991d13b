//! Saturation-based refutation by exhaustive binary resolution

mod profile;
mod state;

pub use profile::SaturationStats;
pub use state::{ResourceLimit, SaturationResult, SaturationState};

use crate::config::{ProverConfig, ReasoningMode};
use crate::fol::{Clause, ClauseRole};

/// Run saturation on a set of input clauses
pub fn saturate(
    clauses: impl IntoIterator<Item = (Clause, ClauseRole)>,
    mode: ReasoningMode,
    config: ProverConfig,
) -> (SaturationResult, SaturationStats) {
    SaturationState::new(clauses, mode, config).saturate()
}
