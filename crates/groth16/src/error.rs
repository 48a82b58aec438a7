use thiserror::Error;
use zkv_algebra::AlgebraError;

/// Structural problems with the verifier inputs. A proof that is well-formed but does not satisfy
/// the pairing equation is `Ok(false)`, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Groth16Error {
    #[error("wrong number of public inputs (expected: {expected}, actual: {actual})")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("public input {index} is not less than the scalar field order")]
    InputOutOfRange { index: usize },
    #[error("point `{name}` is not on the curve or not in the prime-order subgroup")]
    InvalidPoint { name: String },
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
    #[error("malformed JSON record: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Groth16Error {
    fn from(err: serde_json::Error) -> Self {
        Groth16Error::Json(err.to_string())
    }
}
