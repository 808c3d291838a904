//! Sparse single-variable polynomials with real coefficients, the textual
//! notation they are read from and written to, and a small calculator session
//! with undo history and a queue of pending operations.

pub mod error;
pub mod format;
pub mod notation;
pub mod parser;
pub mod polynomial;
pub mod prelude;
pub mod session;
pub mod structures;
pub mod term;
pub mod ui;

pub use error::{PolyError, Result};
pub use format::{pretty, pretty_with};
pub use notation::Notation;
pub use parser::{parse_coefficient, parse_degree, parse_polynomial, parse_polynomial_with};
pub use polynomial::{Polynomial, TermOrder};
pub use session::{Calculator, Operation};
pub use structures::{Queue, Stack};
pub use term::Term;
