use polycalc::{Polynomial, Term, TermOrder};

fn poly(input: &str) -> Polynomial {
    Polynomial::parse(input).expect("parse polynomial")
}

fn degrees(p: &Polynomial) -> Vec<usize> {
    p.iter().map(|t| t.degree).collect()
}

#[test]
fn polynomial_add_scenario() {
    let sum = poly("3x^2 + 2x - 5").add(&poly("x^2 - 1"));
    assert_eq!(sum.to_text(), "4x^2 + 2x - 6");
}

#[test]
fn polynomial_subtract_scenario() {
    let diff = poly("3x^2 + 2x - 5").subtract(&poly("x^2 - 1"));
    assert_eq!(diff.to_text(), "2x^2 + 2x - 4");
}

#[test]
fn polynomial_operators_match_methods() {
    let a = poly("x^3 - 2x + 7");
    let b = poly("-x^3 + 4x^2 + 2x");
    assert_eq!(&a + &b, a.add(&b));
    assert_eq!(&a - &b, a.subtract(&b));
    assert_eq!(-&a, a.negate());
    assert_eq!((a.clone() + b.clone()).to_text(), "4x^2 + 7");
}

#[test]
fn polynomial_subtract_matches_termwise_difference() {
    let a = poly("5x^4 - 3x^2 + x");
    let b = poly("2x^4 + x^3 - 3x^2 + 8");
    let mut direct = Polynomial::zero();
    for t in a.iter() {
        direct.insert_or_merge(t.coefficient, t.degree);
    }
    for t in b.iter() {
        direct.insert_or_merge(-t.coefficient, t.degree);
    }
    assert_eq!(a.subtract(&b), direct);
    assert_eq!(direct.to_text(), "3x^4 - x^3 + x - 8");
}

#[test]
fn polynomial_subtract_self_is_zero() {
    let a = poly("3x^2 + 2x - 5");
    let zero = a.subtract(&a);
    assert!(zero.is_zero());
    assert_eq!(zero.to_text(), "0");
}

#[test]
fn polynomial_insert_keeps_descending_order() {
    let mut p = Polynomial::zero();
    p.insert_or_merge(1.0, 0);
    p.insert_or_merge(4.0, 3);
    p.insert_or_merge(-2.0, 1);
    p.insert_or_merge(0.5, 5);
    assert_eq!(degrees(&p), vec![5, 3, 1, 0]);
    assert_eq!(p.to_text(), "0.5x^5 + 4x^3 - 2x + 1");
}

#[test]
fn polynomial_insert_merges_equal_degrees() {
    let mut p = poly("2x^2 + 1");
    p.insert_or_merge(3.0, 2);
    assert_eq!(p.search_term(2), Some(5.0));
    assert_eq!(p.len(), 2);
}

#[test]
fn polynomial_insert_then_cancel_removes_degree() {
    let mut p = poly("x^3 + 4x");
    p.insert_or_merge(2.5, 1);
    p.insert_or_merge(-2.5, 1);
    assert_eq!(p, poly("x^3 + 4x"));
    p.insert_or_merge(-4.0, 1);
    assert_eq!(p.search_term(1), None);
    assert_eq!(degrees(&p), vec![3]);
}

#[test]
fn polynomial_insert_zero_is_noop() {
    let mut p = poly("x + 1");
    p.insert_or_merge(0.0, 7);
    assert_eq!(p, poly("x + 1"));
}

#[test]
fn polynomial_delete_missing_degree_is_noop() {
    let mut p = poly("3x^2 - 1");
    let before = p.clone();
    assert!(!p.delete_term(5));
    assert_eq!(p, before);
}

#[test]
fn polynomial_delete_existing_degree() {
    let mut p = poly("3x^2 + 2x - 1");
    assert!(p.delete_term(1));
    assert_eq!(p.to_text(), "3x^2 - 1");
    assert!(p.delete_term(2));
    assert!(p.delete_term(0));
    assert!(p.is_zero());
}

#[test]
fn polynomial_search_term() {
    let p = poly("3x^2 - 1");
    assert_eq!(p.search_term(2), Some(3.0));
    assert_eq!(p.search_term(0), Some(-1.0));
    assert_eq!(p.search_term(1), None);
}

#[test]
fn polynomial_sort_ascending_is_a_display_order() {
    let mut p = poly("3x^2 + 2x - 5");
    p.sort_terms(true);
    assert_eq!(p.order(), TermOrder::Ascending);
    assert_eq!(degrees(&p), vec![0, 1, 2]);
    assert_eq!(p.to_text(), "-5 + 2x + 3x^2");
    assert_eq!(p.degree(), Some(2));
    assert_eq!(p.leading_coefficient(), Some(3.0));

    p.sort_terms(false);
    assert!(p.is_canonical());
    assert_eq!(p.to_text(), "3x^2 + 2x - 5");
}

#[test]
fn polynomial_insert_after_ascending_sort_renormalizes() {
    let mut p = poly("3x^2 + 2x - 5");
    p.sort_terms(true);
    p.insert_or_merge(1.0, 4);
    assert!(p.is_canonical());
    assert_eq!(degrees(&p), vec![4, 2, 1, 0]);
    assert_eq!(p.to_text(), "x^4 + 3x^2 + 2x - 5");
}

#[test]
fn polynomial_delete_keeps_ascending_order() {
    let mut p = poly("3x^2 + 2x - 5");
    p.sort_terms(true);
    assert!(p.delete_term(1));
    assert_eq!(p.to_text(), "-5 + 3x^2");
}

#[test]
fn polynomial_add_reads_ascending_operands_canonically() {
    let mut a = poly("x^3 + x");
    a.sort_terms(true);
    let sum = a.add(&poly("2x^2 - x"));
    assert!(sum.is_canonical());
    assert_eq!(sum.to_text(), "x^3 + 2x^2");
}

#[test]
fn polynomial_clone_is_independent() {
    let original = poly("x^2 + 1");
    let mut snapshot = original.clone();
    snapshot.insert_or_merge(1.0, 2);
    snapshot.delete_term(0);
    assert_eq!(original.to_text(), "x^2 + 1");
    assert_eq!(snapshot.to_text(), "2x^2");
}

#[test]
fn polynomial_evaluate() {
    let p = poly("3x^2 + 2x - 5");
    assert_eq!(p.evaluate(0.0), -5.0);
    assert_eq!(p.evaluate(2.0), 11.0);
    assert_eq!(Polynomial::zero().evaluate(3.0), 0.0);
}

#[test]
fn polynomial_from_terms() {
    let p: Polynomial = vec![Term::new(1.0, 1), Term::new(2.0, 3), Term::new(-1.0, 1)]
        .into_iter()
        .collect();
    assert_eq!(p.to_text(), "2x^3");
    assert_eq!(p.degree(), Some(3));
    assert_eq!(Polynomial::from_constant(0.0), Polynomial::zero());
    assert_eq!(Polynomial::zero().degree(), None);
}

#[test]
fn polynomial_equality_ignores_display_order() {
    let mut p = poly("3x^2 + 2x - 5");
    p.sort_terms(true);
    assert_eq!(p, poly("3x^2 + 2x - 5"));
    assert_ne!(p, poly("3x^2 + 2x"));

    let mut zero = Polynomial::zero();
    zero.sort_terms(true);
    assert_eq!(zero, Polynomial::zero());

    let mut constant = poly("5");
    constant.sort_terms(true);
    assert_eq!(constant, poly("5"));
}

#[test]
fn polynomial_insert_drops_non_finite_coefficients() {
    let mut p = poly("x + 1");
    p.insert_or_merge(f64::NAN, 2);
    p.insert_or_merge(f64::INFINITY, 1);
    p.insert_or_merge(f64::NEG_INFINITY, 0);
    assert_eq!(p, poly("x + 1"));
    assert_eq!(p.to_text(), "x + 1");
}
