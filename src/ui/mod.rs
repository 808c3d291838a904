//! String-based helpers: text in, rendered text out.

use crate::error::Result;
use crate::parser::{parse_coefficient, parse_degree, parse_polynomial};
use crate::polynomial::Polynomial;

pub fn parse(input: &str) -> Result<Polynomial> {
    parse_polynomial(input)
}

pub fn add(lhs: &str, rhs: &str) -> Result<String> {
    Ok(parse(lhs)?.add(&parse(rhs)?).to_text())
}

pub fn sub(lhs: &str, rhs: &str) -> Result<String> {
    Ok(parse(lhs)?.subtract(&parse(rhs)?).to_text())
}

pub fn add_term(input: &str, coefficient: &str, degree: &str) -> Result<String> {
    let mut poly = parse(input)?;
    poly.insert_or_merge(parse_coefficient(coefficient)?, parse_degree(degree)?);
    Ok(poly.to_text())
}

/// Returns whether a term was removed along with the rendered polynomial.
pub fn delete_term(input: &str, degree: &str) -> Result<(bool, String)> {
    let mut poly = parse(input)?;
    let deleted = poly.delete_term(parse_degree(degree)?);
    Ok((deleted, poly.to_text()))
}

pub fn search_term(input: &str, degree: &str) -> Result<Option<f64>> {
    Ok(parse(input)?.search_term(parse_degree(degree)?))
}

pub fn sort(input: &str, ascending: bool) -> Result<String> {
    let mut poly = parse(input)?;
    poly.sort_terms(ascending);
    Ok(poly.to_text())
}

pub fn evaluate(input: &str, x: f64) -> Result<f64> {
    Ok(parse(input)?.evaluate(x))
}
