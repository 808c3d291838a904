//! Rendering of polynomials and terms into the textual notation.

pub mod poly;

pub use poly::{pretty, pretty_with};
pub(crate) use poly::pretty_term;
