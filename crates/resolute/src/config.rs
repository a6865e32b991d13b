//! Prover configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How complementary literals are matched during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningMode {
    /// Atoms are complementary when they unify
    #[default]
    FirstOrder,
    /// Atoms are complementary only when syntactically equal
    Propositional,
}

/// Configuration for CNF conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CnfConfig {
    /// Distribute disjunction over conjunction. Off by default: a
    /// conjunction under a disjunction is merged into one clause.
    pub distribute: bool,
}

/// Configuration for the saturation loop.
///
/// Every limit defaults to `None`, meaning unbounded: saturation runs until
/// it refutes or reaches a fixed point, which for first-order problems that
/// keep generating deeper terms means it may never return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProverConfig {
    /// Maximum number of full saturation rounds
    pub max_rounds: Option<usize>,
    /// Maximum size of the clause set
    pub max_clauses: Option<usize>,
    /// Wall-clock budget, written as seconds in problem files
    #[serde(with = "secs", rename = "timeout_secs")]
    pub timeout: Option<Duration>,
    pub cnf: CnfConfig,
}

impl ProverConfig {
    /// Whether any resource limit is configured
    pub fn is_bounded(&self) -> bool {
        self.max_rounds.is_some() || self.max_clauses.is_some() || self.timeout.is_some()
    }
}

mod secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => serializer.serialize_some(&d.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<f64>::deserialize(deserializer)?;
        match secs {
            Some(s) if s.is_finite() && s >= 0.0 => Ok(Some(Duration::from_secs_f64(s))),
            Some(s) => Err(serde::de::Error::custom(format!("invalid timeout: {}", s))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = ProverConfig::default();
        assert!(!config.is_bounded());
        assert!(!config.cnf.distribute);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ProverConfig =
            serde_json::from_str(r#"{"max_rounds": 5, "timeout_secs": 1.5}"#).unwrap();
        assert_eq!(config.max_rounds, Some(5));
        assert_eq!(config.max_clauses, None);
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
        assert!(config.is_bounded());
    }

    #[test]
    fn test_deserialize_rejects_negative_timeout() {
        let result: Result<ProverConfig, _> = serde_json::from_str(r#"{"timeout_secs": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_mode_names() {
        let mode: ReasoningMode = serde_json::from_str(r#""propositional""#).unwrap();
        assert_eq!(mode, ReasoningMode::Propositional);
        assert_eq!(serde_json::to_string(&ReasoningMode::FirstOrder).unwrap(), r#""first_order""#);
    }
}
