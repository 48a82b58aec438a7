//! Groth16 verification over BN254.
//!
//! [`verify`] evaluates the four-pairing equation against a full verifying key, and
//! [`verify_optimized`] takes `e(alpha, beta)` precomputed (see [`VerifyingKey::prepare`]) and
//! runs three Miller loops instead. Both share one final exponentiation.
mod error;
mod records;
mod types;
mod verifier;

pub use error::*;
pub use records::*;
pub use types::*;
pub use verifier::*;
pub use zkv_pairing::bn254;
