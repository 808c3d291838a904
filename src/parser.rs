use crate::error::{PolyError, Result};
use crate::notation::Notation;
use crate::polynomial::Polynomial;
use log::trace;
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, verify};
use nom::error::{VerboseError, convert_error};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, terminated};

type Res<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

pub fn parse_polynomial(input: &str) -> Result<Polynomial> {
    parse_polynomial_with(input, &Notation::default())
}

/// Parses a signed-term sequence such as `3x^2 + 2x - 5`.
///
/// Terms of equal degree are summed. Blank input is the zero polynomial.
pub fn parse_polynomial_with(input: &str, notation: &Notation) -> Result<Polynomial> {
    if input.trim().is_empty() {
        return Ok(Polynomial::zero());
    }
    match all_consuming(terms(notation.variable))(input) {
        Ok((_, terms)) => {
            trace!("parsed {} term(s) from {input:?}", terms.len());
            let mut poly = Polynomial::zero();
            for (coefficient, degree) in terms {
                poly.insert_or_merge(coefficient, degree);
            }
            Ok(poly)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(PolyError::Parse(convert_error(input, e)))
        }
        Err(nom::Err::Incomplete(_)) => Err(PolyError::Parse("incomplete input".to_string())),
    }
}

pub fn parse_degree(input: &str) -> Result<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| PolyError::InvalidDegree(input.to_string()))
}

pub fn parse_coefficient(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PolyError::InvalidCoefficient(input.to_string())),
    }
}

fn terms<'a>(var: char) -> impl FnMut(&'a str) -> Res<'a, Vec<(f64, usize)>> {
    move |input| {
        let (rest, (lead, first)) = pair(opt(sign), monomial(var))(input)?;
        let mut out = vec![signed(lead.unwrap_or(1.0), first)];
        let (rest, tail) = many0(pair(sign, monomial(var)))(rest)?;
        out.extend(tail.into_iter().map(|(s, m)| signed(s, m)));
        Ok((rest, out))
    }
}

fn signed(sign: f64, (coefficient, degree): (f64, usize)) -> (f64, usize) {
    (sign * coefficient, degree)
}

fn sign(input: &str) -> Res<'_, f64> {
    map(ws(alt((char('+'), char('-')))), |c: char| if c == '-' { -1.0 } else { 1.0 })(input)
}

// `c`, `c*x`, `cx`, `x`, `cx^n`, `x^n`
fn monomial<'a>(var: char) -> impl FnMut(&'a str) -> Res<'a, (f64, usize)> {
    move |input| {
        alt((
            map(
                pair(
                    opt(terminated(ws(number), opt(ws(char('*'))))),
                    preceded(ws(char(var)), opt(preceded(ws(char('^')), ws(exponent)))),
                ),
                |(coefficient, exp): (Option<f64>, Option<usize>)| {
                    (coefficient.unwrap_or(1.0), exp.unwrap_or(1))
                },
            ),
            map(ws(number), |coefficient| (coefficient, 0)),
        ))(input)
    }
}

fn number(input: &str) -> Res<'_, f64> {
    verify(
        map_res(
            recognize(alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            ))),
            |s: &str| s.parse::<f64>(),
        ),
        |value: &f64| value.is_finite(),
    )(input)
}

fn exponent(input: &str) -> Res<'_, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> Res<'a, O>
where
    F: FnMut(&'a str) -> Res<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}
