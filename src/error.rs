use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The determinant is exactly zero, so there is no inverse.
    #[error("matrix is singular (determinant is zero)")]
    Singular,

    #[error("invalid fraction literal {0:?}")]
    InvalidFraction(String),

    #[error("fraction denominator is zero")]
    ZeroDenominator,
}
