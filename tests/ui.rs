use polycalc::PolyError;
use polycalc::prelude::*;

#[test]
fn string_api_arithmetic() {
    assert_eq!(add("3x^2 + 2x - 5", "x^2 - 1").unwrap(), "4x^2 + 2x - 6");
    assert_eq!(sub("3x^2 + 2x - 5", "x^2 - 1").unwrap(), "2x^2 + 2x - 4");
    assert_eq!(sub("x^2 - 1", "x^2 - 1").unwrap(), "0");
}

#[test]
fn string_api_term_edits() {
    assert_eq!(add_term("x^2", "-3", "1").unwrap(), "x^2 - 3x");
    assert_eq!(delete_term("3x^2 - 1", "5").unwrap(), (false, "3x^2 - 1".to_string()));
    assert_eq!(delete_term("3x^2 - 1", "2").unwrap(), (true, "-1".to_string()));
    assert_eq!(search_term("3x^2 - 1", "2").unwrap(), Some(3.0));
    assert_eq!(search_term("3x^2 - 1", "4").unwrap(), None);
    assert_eq!(sort("3x^2 + 2x - 5", true).unwrap(), "-5 + 2x + 3x^2");
    assert_eq!(evaluate("x^2 - 1", 3.0).unwrap(), 8.0);
}

#[test]
fn string_api_reports_bad_fields() {
    assert!(matches!(add("x +", "1"), Err(PolyError::Parse(_))));
    assert!(matches!(add_term("x", "1", "-2"), Err(PolyError::InvalidDegree(_))));
    assert!(matches!(add_term("x", "one", "2"), Err(PolyError::InvalidCoefficient(_))));
    assert!(matches!(search_term("x", "x"), Err(PolyError::InvalidDegree(_))));
    assert_eq!(parse("").unwrap().to_text(), "0");
}
