//! Integration tests for entailment and unification

use resolute::{
    entails, entails_first_order, entails_propositional, parse_clause, parse_formula,
    parse_literal, parse_term, unify_sentences, Clause, Formula, Literal, Query, Sentence, Term,
};

fn clauses(sentences: &[&str]) -> Vec<Clause> {
    sentences.iter().map(|s| parse_clause(s).unwrap()).collect()
}

fn formulas(sentences: &[&str]) -> Vec<Formula> {
    sentences.iter().map(|s| parse_formula(s).unwrap()).collect()
}

#[test]
fn test_evil_king() {
    let kb = clauses(&["¬King(x) ∨ ¬Greedy(x) ∨ Evil(x)", "King(John)", "Greedy(John)"]);
    assert!(entails_first_order(&kb, &parse_literal("Evil(John)").unwrap()));
    assert!(!entails_first_order(&kb, &parse_literal("Evil(Richard)").unwrap()));
}

#[test]
fn test_modus_ponens() {
    let kb = formulas(&["P", "P ⇒ Q"]);
    assert!(entails_propositional(&kb, &parse_formula("Q").unwrap()));
    assert!(!entails_propositional(&kb, &parse_formula("¬Q").unwrap()));
}

#[test]
fn test_breeze_biconditional() {
    let kb = formulas(&["¬B11", "B11 ⇔ (P12 ∨ P21)"]);
    assert!(!entails_propositional(&kb, &parse_formula("P21").unwrap()));
    assert!(!entails_propositional(&kb, &parse_formula("P12").unwrap()));
}

#[test]
fn test_unify_parent() {
    let a = parse_term("Parent(x, y)").unwrap();
    let b = parse_term("Parent(John, Mary)").unwrap();
    let (unified, subst) = unify_sentences(&a, &b);
    assert!(unified);
    assert_eq!(subst.len(), 2);
    assert_eq!(subst.to_string(), "{x -> John, y -> Mary}");
}

#[test]
fn test_unify_loves_fails() {
    let a = parse_term("Loves(father(x), x)").unwrap();
    let b = parse_term("Loves(father(John), Mary)").unwrap();
    let (unified, _) = unify_sentences(&a, &b);
    assert!(!unified);
}

#[test]
fn test_unify_different_predicates() {
    let a = parse_term("Parent(x, y)").unwrap();
    let b = parse_term("Loves(John, Mary)").unwrap();
    let (unified, subst) = unify_sentences(&a, &b);
    assert!(!unified);
    assert!(subst.is_empty());
}

#[test]
fn test_chained_first_order_rules() {
    // Every man is mortal, every king is a man
    let kb = clauses(&["~Man(x) | Mortal(x)", "~King(y) | Man(y)", "King(Arthur)"]);
    assert!(entails_first_order(&kb, &parse_literal("Mortal(Arthur)").unwrap()));
    assert!(!entails_first_order(&kb, &parse_literal("King(Lancelot)").unwrap()));
}

#[test]
fn test_negative_query() {
    let kb = clauses(&["~Fly(Penguin)"]);
    assert!(entails_first_order(&kb, &parse_literal("~Fly(Penguin)").unwrap()));
    assert!(!entails_first_order(&kb, &parse_literal("Fly(Penguin)").unwrap()));
}

#[test]
fn test_inconsistent_kb_entails_anything() {
    let kb = formulas(&["P", "¬P"]);
    assert!(entails_propositional(&kb, &parse_formula("Q").unwrap()));
}

#[test]
fn test_wumpus_pit_reasoning() {
    // A breeze at [2,1] with no pit at [1,1] and [2,2] puts a pit at [3,1]
    let kb = formulas(&[
        "B21 ⇔ (P11 ∨ P22 ∨ P31)",
        "B21",
        "¬P11",
        "¬P22",
    ]);
    assert!(entails_propositional(&kb, &parse_formula("P31").unwrap()));
}

#[test]
fn test_mixed_sentence_api() {
    let kb = vec![
        Sentence::from(Literal::positive(Term::constant("Rain"))),
        Sentence::from(parse_formula("Rain → Wet").unwrap()),
    ];
    assert!(entails(&kb, &Query::from(parse_literal("Wet").unwrap())));
    assert!(!entails(&kb, &Query::from(parse_formula("¬Wet").unwrap())));
}

#[test]
fn test_adding_a_formula_keeps_first_order_entailment() {
    let mut kb: Vec<Sentence> = clauses(&["~King(x) | Evil(x)", "King(John)"])
        .into_iter()
        .map(Sentence::from)
        .collect();
    let literal_query = Query::from(parse_literal("Evil(John)").unwrap());
    let formula_query = Query::from(parse_formula("Evil(John)").unwrap());

    assert!(entails(&kb, &literal_query));
    assert!(entails(&kb, &formula_query));

    kb.push(Sentence::from(parse_formula("Rain").unwrap()));
    assert!(entails(&kb, &literal_query));
    assert!(entails(&kb, &formula_query));
}

#[test]
fn test_clauses_share_variable_names() {
    // `x` in both clauses is one variable, so P(x, A) and P(B, x) clash
    let kb = clauses(&["P(x, A)", "~P(B, x) | Q"]);
    assert!(!entails_first_order(&kb, &parse_literal("Q").unwrap()));

    let renamed = clauses(&["P(x, A)", "~P(B, y) | Q"]);
    assert!(entails_first_order(&renamed, &parse_literal("Q").unwrap()));
}
