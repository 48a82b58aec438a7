use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("value is not reduced modulo the field modulus")]
    NonCanonical,
    #[error("invalid integer literal `{0}`")]
    InvalidLiteral(String),
    #[error("byte representation is too long (expected at most: {expected}, actual: {actual})")]
    InvalidLength { expected: usize, actual: usize },
}
