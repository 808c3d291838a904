use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use log::debug;
use num_traits::Zero;

use crate::error::{PolyError, Result};
use crate::format::pretty_with;
use crate::notation::Notation;
use crate::parser::parse_polynomial_with;
use crate::term::Term;

/// Storage order of a polynomial's terms.
///
/// `Descending` is the canonical order every arithmetic result is built in.
/// `Ascending` only arises from [`Polynomial::sort_terms`] and is kept as a
/// display order until the next insertion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TermOrder {
    #[default]
    Descending,
    Ascending,
}

/// A sparse polynomial in one variable with real coefficients.
///
/// Terms never carry a zero coefficient and no degree appears twice. The empty
/// polynomial is zero. Equality compares terms and ignores the display order.
#[derive(Clone, Debug, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
    order: TermOrder,
}

impl Polynomial {
    pub fn zero() -> Self {
        Polynomial::default()
    }

    pub fn from_constant(c: f64) -> Self {
        let mut poly = Polynomial::zero();
        poly.insert_or_merge(c, 0);
        poly
    }

    pub fn parse(input: &str) -> Result<Self> {
        parse_polynomial_with(input, &Notation::default())
    }

    pub fn parse_with(input: &str, notation: &Notation) -> Result<Self> {
        parse_polynomial_with(input, notation)
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn order(&self) -> TermOrder {
        self.order
    }

    pub fn is_canonical(&self) -> bool {
        self.order == TermOrder::Descending
    }

    pub fn degree(&self) -> Option<usize> {
        self.descending().first().map(|t| t.degree)
    }

    pub fn leading_coefficient(&self) -> Option<f64> {
        self.descending().first().map(|t| t.coefficient)
    }

    /// Adds `coefficient * x^degree`, merging with an existing term of the
    /// same degree and dropping it if the sum cancels to zero.
    pub fn insert_or_merge(&mut self, coefficient: f64, degree: usize) {
        if !coefficient.is_finite() {
            debug!("dropping non-finite coefficient {coefficient} for degree {degree}");
            return;
        }
        if self.order == TermOrder::Ascending {
            debug!("restoring descending order before inserting degree {degree}");
            self.terms.reverse();
            self.order = TermOrder::Descending;
        }

        match self.terms.binary_search_by(|t| degree.cmp(&t.degree)) {
            Ok(index) => {
                let sum = self.terms[index].coefficient + coefficient;
                if sum == 0.0 {
                    self.terms.remove(index);
                } else {
                    self.terms[index].coefficient = sum;
                }
            }
            Err(index) => {
                if coefficient != 0.0 {
                    self.terms.insert(index, Term::new(coefficient, degree));
                }
            }
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Polynomial {
            terms: merge(&self.descending(), &other.descending()),
            order: TermOrder::Descending,
        }
    }

    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    pub fn negate(&self) -> Self {
        Polynomial {
            terms: self.terms.iter().map(|t| t.negate()).collect(),
            order: self.order,
        }
    }

    /// Removes the term of `degree`, reporting whether one was present.
    pub fn delete_term(&mut self, degree: usize) -> bool {
        match self.terms.iter().position(|t| t.degree == degree) {
            Some(index) => {
                self.terms.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn search_term(&self, degree: usize) -> Option<f64> {
        self.terms
            .iter()
            .find(|t| t.degree == degree)
            .map(|t| t.coefficient)
    }

    pub fn sort_terms(&mut self, ascending: bool) {
        if ascending {
            self.terms.sort_by_key(|t| t.degree);
            self.order = TermOrder::Ascending;
        } else {
            self.terms.sort_by(|a, b| b.degree.cmp(&a.degree));
            self.order = TermOrder::Descending;
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.evaluate(x)).sum()
    }

    pub fn to_text(&self) -> String {
        pretty_with(self, &Notation::default())
    }

    pub fn to_text_with(&self, notation: &Notation) -> String {
        pretty_with(self, notation)
    }

    fn descending(&self) -> Cow<'_, [Term]> {
        match self.order {
            TermOrder::Descending => Cow::Borrowed(&self.terms),
            TermOrder::Ascending => Cow::Owned(self.terms.iter().rev().copied().collect()),
        }
    }
}

// Both inputs are strictly descending by degree; so is the output.
fn merge(lhs: &[Term], rhs: &[Term]) -> Vec<Term> {
    let mut out = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);
    loop {
        match (lhs.get(i), rhs.get(j)) {
            (Some(a), Some(b)) => match a.degree.cmp(&b.degree) {
                Ordering::Greater => {
                    out.push(*a);
                    i += 1;
                }
                Ordering::Less => {
                    out.push(*b);
                    j += 1;
                }
                Ordering::Equal => {
                    let sum = a.coefficient + b.coefficient;
                    if sum != 0.0 {
                        out.push(Term::new(sum, a.degree));
                    }
                    i += 1;
                    j += 1;
                }
            },
            (Some(_), None) => {
                out.extend_from_slice(&lhs[i..]);
                break;
            }
            (None, Some(_)) => {
                out.extend_from_slice(&rhs[j..]);
                break;
            }
            (None, None) => break,
        }
    }
    out
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.descending() == other.descending()
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut poly = Polynomial::zero();
        poly.extend(iter);
        poly
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.insert_or_merge(term.coefficient, term.degree);
        }
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Polynomial) -> Polynomial {
        Polynomial::add(&self, &rhs)
    }
}

impl std::ops::Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        self.subtract(&rhs)
    }
}

impl std::ops::Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.subtract(rhs)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self> {
        Polynomial::parse(s)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut canonical = self.clone();
        canonical.sort_terms(false);
        serializer.serialize_str(&canonical.to_text())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Polynomial::parse(&text).map_err(serde::de::Error::custom)
    }
}
