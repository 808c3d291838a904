use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolyError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolyError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid degree `{0}`: expected a non-negative integer")]
    InvalidDegree(String),
    #[error("invalid coefficient `{0}`: expected a finite real number")]
    InvalidCoefficient(String),
}
