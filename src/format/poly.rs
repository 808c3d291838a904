use crate::notation::Notation;
use crate::polynomial::Polynomial;
use crate::term::Term;

pub fn pretty(poly: &Polynomial) -> String {
    pretty_with(poly, &Notation::default())
}

/// Renders the terms in their current storage order, e.g. `3x^2 + 2x - 5`.
pub fn pretty_with(poly: &Polynomial, notation: &Notation) -> String {
    let mut terms = poly
        .terms()
        .iter()
        .filter(|t| !rounds_to_zero(t.coefficient, notation.precision));
    let Some(first) = terms.next() else {
        return "0".to_string();
    };
    let mut out = pretty_term(first, true, notation);
    for term in terms {
        out.push_str(&pretty_term(term, false, notation));
    }
    out
}

pub(crate) fn pretty_term(term: &Term, leading: bool, notation: &Notation) -> String {
    let sign = match (leading, term.coefficient < 0.0) {
        (true, false) => "",
        (true, true) => "-",
        (false, false) => " + ",
        (false, true) => " - ",
    };
    let magnitude = term.coefficient.abs();
    let coeff = if magnitude == 1.0 && term.degree > 0 {
        String::new()
    } else {
        show_coefficient(magnitude, notation.precision)
    };
    let var = notation.variable;
    match term.degree {
        0 => format!("{sign}{coeff}"),
        1 => format!("{sign}{coeff}{var}"),
        d => format!("{sign}{coeff}{var}^{d}"),
    }
}

fn rounds_to_zero(value: f64, precision: Option<usize>) -> bool {
    precision.is_some() && show_coefficient(value.abs(), precision) == "0"
}

// f64's Display already drops the `.0` of integral values and never switches
// to exponent notation, which keeps the output parseable.
fn show_coefficient(value: f64, precision: Option<usize>) -> String {
    match precision {
        None => format!("{value}"),
        Some(places) => {
            let fixed = format!("{value:.places$}");
            if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                fixed
            }
        }
    }
}
