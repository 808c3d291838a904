//! A single `coefficient * x^degree` term.

use std::fmt;

use crate::format::pretty_term;
use crate::notation::Notation;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub coefficient: f64,
    pub degree: usize,
}

impl Term {
    pub fn new(coefficient: f64, degree: usize) -> Self {
        Term { coefficient, degree }
    }

    pub fn constant(coefficient: f64) -> Self {
        Term::new(coefficient, 0)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    pub fn negate(self) -> Self {
        Term::new(-self.coefficient, self.degree)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match i32::try_from(self.degree) {
            Ok(exp) => self.coefficient * x.powi(exp),
            Err(_) => self.coefficient * x.powf(self.degree as f64),
        }
    }
}

impl From<(f64, usize)> for Term {
    fn from((coefficient, degree): (f64, usize)) -> Self {
        Term::new(coefficient, degree)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pretty_term(self, true, &Notation::default()))
    }
}
