//! Textual notation shared by the parser and the formatter.

/// How polynomials are read from and written to text.
///
/// The default reads and writes `x` and prints coefficients exactly, so that
/// `parse(to_text(p))` reproduces `p`. A display precision rounds fractional
/// coefficients for presentation only and can break that round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notation {
    pub variable: char,
    pub precision: Option<usize>,
}

impl Notation {
    pub const fn new(variable: char) -> Self {
        Notation {
            variable,
            precision: None,
        }
    }

    pub const fn with_variable(mut self, variable: char) -> Self {
        self.variable = variable;
        self
    }

    /// Rounds fractional coefficients to `places` decimals when rendering.
    pub const fn with_precision(mut self, places: usize) -> Self {
        self.precision = Some(places);
        self
    }

    pub const fn exact(mut self) -> Self {
        self.precision = None;
        self
    }
}

impl Default for Notation {
    fn default() -> Self {
        Notation::new('x')
    }
}
