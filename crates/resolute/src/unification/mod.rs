//! Unification algorithm for first-order terms

mod mgu;


pub use mgu::{mgu, unify, unify_sentences};
