//! Counters collected during saturation
//!
//! Always on; the counters are plain integers updated in the inner loop.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::time::Duration;

fn secs(d: &Duration) -> f64 {
    d.as_secs_f64()
}

/// Statistics for one saturation run.
///
/// `total_time` is serialized as `f64` seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaturationStats {
    /// Full passes over all clause pairs
    pub rounds: usize,
    /// Clause pairs tried for resolution
    pub pairs_examined: usize,
    /// Resolvents produced, before any filtering
    pub resolvents_generated: usize,
    /// Tautologies discarded (input clauses and resolvents)
    pub tautologies_deleted: usize,
    /// Clauses already present in the set or the current round
    pub duplicates_deleted: usize,
    /// Clauses in the set before the first round
    pub initial_clauses: usize,
    /// Clauses in the set when saturation stopped
    pub final_clauses: usize,
    pub total_time: Duration,
}

impl SaturationStats {
    /// Resolvents that survived filtering and joined the clause set
    pub fn clauses_added(&self) -> usize {
        self.final_clauses.saturating_sub(self.initial_clauses)
    }
}

impl Serialize for SaturationStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SaturationStats", 9)?;
        s.serialize_field("rounds", &self.rounds)?;
        s.serialize_field("pairs_examined", &self.pairs_examined)?;
        s.serialize_field("resolvents_generated", &self.resolvents_generated)?;
        s.serialize_field("tautologies_deleted", &self.tautologies_deleted)?;
        s.serialize_field("duplicates_deleted", &self.duplicates_deleted)?;
        s.serialize_field("initial_clauses", &self.initial_clauses)?;
        s.serialize_field("final_clauses", &self.final_clauses)?;
        s.serialize_field("clauses_added", &self.clauses_added())?;
        s.serialize_field("total_time", &secs(&self.total_time))?;
        s.end()
    }
}
