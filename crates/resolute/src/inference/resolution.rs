//! Binary resolution inference rule

use crate::config::ReasoningMode;
use crate::fol::{Clause, Literal, Substitution};
use crate::unification::mgu;

/// Unifier making two literals complementary, if any.
///
/// Polarities must differ. In propositional mode the atoms must be equal
/// and the unifier is empty.
pub fn complementary_unifier(
    lit1: &Literal,
    lit2: &Literal,
    mode: ReasoningMode,
) -> Option<Substitution> {
    if lit1.polarity == lit2.polarity {
        return None;
    }
    match mode {
        ReasoningMode::Propositional => (lit1.atom == lit2.atom).then(Substitution::new),
        ReasoningMode::FirstOrder => mgu(&lit1.atom, &lit2.atom),
    }
}

/// Every resolvent of two clauses, tautologies included.
///
/// For each pair of complementary literals `l1 ∈ clause1`, `l2 ∈ clause2`
/// the resolvent is `(clause1 ∖ {l1}) ∪ (clause2 ∖ {l2})` with the unifier
/// applied. Variables are not renamed apart: a name shared by both clauses
/// denotes the same variable.
pub fn resolvents(clause1: &Clause, clause2: &Clause, mode: ReasoningMode) -> Vec<Clause> {
    let mut results = Vec::new();

    for lit1 in clause1.literals() {
        for lit2 in clause2.literals() {
            if let Some(sigma) = complementary_unifier(lit1, lit2, mode) {
                let rest1 = clause1.without(lit1);
                let rest2 = clause2.without(lit2);
                let resolvent = if sigma.is_empty() {
                    rest1.union(&rest2)
                } else {
                    rest1
                        .apply_substitution(&sigma)
                        .union(&rest2.apply_substitution(&sigma))
                };
                results.push(resolvent);
            }
        }
    }

    results
}

/// Resolvents of two clauses with tautologies discarded
pub fn resolution(clause1: &Clause, clause2: &Clause, mode: ReasoningMode) -> Vec<Clause> {
    resolvents(clause1, clause2, mode)
        .into_iter()
        .filter(|clause| !clause.is_tautology())
        .collect()
}
