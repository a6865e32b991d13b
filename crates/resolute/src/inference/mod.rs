//! Inference rules and derivation records

pub mod derivation;
pub mod proof;
pub mod resolution;

pub use derivation::Derivation;
pub use proof::{Proof, ProofStep};
pub use resolution::{complementary_unifier, resolution, resolvents};
