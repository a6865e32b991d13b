//! Most General Unifier (MGU) computation

use crate::fol::{Substitution, Term, Variable};
use thiserror::Error;
use tracing::trace;

/// Why a unification attempt failed. Only surfaced in trace logs; callers
/// see a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum Mismatch {
    #[error("{var} occurs in {term}")]
    OccursCheck { var: Variable, term: Term },
    #[error("symbol clash: {0} vs {1}")]
    SymbolClash(String, String),
    #[error("arity mismatch for {symbol}: {left} vs {right}")]
    ArityMismatch {
        symbol: String,
        left: usize,
        right: usize,
    },
}

/// Unify two terms, extending `subst` in place.
///
/// Returns `false` when the terms do not unify; in that case `subst` is
/// left exactly as it was on entry.
pub fn unify(term1: &Term, term2: &Term, subst: &mut Substitution) -> bool {
    let mark = subst.snapshot();
    match unify_with_subst(term1, term2, subst) {
        Ok(()) => true,
        Err(mismatch) => {
            trace!(left = %term1, right = %term2, reason = %mismatch, "unification failed");
            subst.rollback(mark);
            false
        }
    }
}

/// Unify two terms from the empty substitution
pub fn mgu(term1: &Term, term2: &Term) -> Option<Substitution> {
    let mut subst = Substitution::new();
    unify(term1, term2, &mut subst).then_some(subst)
}

/// Check whether two predicate sentences unify.
///
/// Sentences whose heads differ in name or arity fail immediately.
/// Otherwise the arguments are unified position by position; the returned
/// substitution holds the accumulated bindings on success and is empty on
/// failure.
pub fn unify_sentences(sentence1: &Term, sentence2: &Term) -> (bool, Substitution) {
    let (args1, args2) = match (sentence1, sentence2) {
        (Term::Function(f1, args1), Term::Function(f2, args2)) => {
            if f1.name != f2.name || args1.len() != args2.len() {
                return (false, Substitution::new());
            }
            (args1.as_slice(), args2.as_slice())
        }
        _ => {
            return match mgu(sentence1, sentence2) {
                Some(subst) => (true, subst),
                None => (false, Substitution::new()),
            }
        }
    };

    let mut subst = Substitution::new();
    for (arg1, arg2) in args1.iter().zip(args2) {
        if !unify(arg1, arg2, &mut subst) {
            return (false, Substitution::new());
        }
    }
    (true, subst)
}

/// Robinson's algorithm. Bindings made before a failure are not undone
/// here; [`unify`] rolls them back.
fn unify_with_subst(
    term1: &Term,
    term2: &Term,
    subst: &mut Substitution,
) -> Result<(), Mismatch> {
    let t1 = subst.walk(term1).clone();
    let t2 = subst.walk(term2).clone();

    match (&t1, &t2) {
        // Same term - nothing to do
        _ if t1 == t2 => Ok(()),

        // Variable cases come before decomposition so partially
        // instantiated terms bind correctly
        (Term::Variable(v), t) | (t, Term::Variable(v)) => {
            if subst.occurs(v, t) {
                Err(Mismatch::OccursCheck {
                    var: v.clone(),
                    term: subst.dereference(t),
                })
            } else {
                subst.bind(v.clone(), t.clone());
                Ok(())
            }
        }

        // Function terms
        (Term::Function(f1, args1), Term::Function(f2, args2)) => {
            if f1.name != f2.name {
                return Err(Mismatch::SymbolClash(f1.name.clone(), f2.name.clone()));
            }
            if args1.len() != args2.len() {
                return Err(Mismatch::ArityMismatch {
                    symbol: f1.name.clone(),
                    left: args1.len(),
                    right: args2.len(),
                });
            }

            // Unify arguments pairwise
            for (arg1, arg2) in args1.iter().zip(args2.iter()) {
                unify_with_subst(arg1, arg2, subst)?;
            }
            Ok(())
        }

        // Constant clash, or constant against compound
        _ => Err(Mismatch::SymbolClash(t1.to_string(), t2.to_string())),
    }
}
