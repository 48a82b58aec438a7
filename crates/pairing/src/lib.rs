//! Pairing traits written against `zkv-algebra` fields and `zkv-ecc` points, and the BN254
//! optimal ate pairing built on them.

pub use zkv_algebra as algebra;
pub use zkv_ecc as ecc;

/// Curve-independent Miller loop, line and pairing-check traits.
pub mod pairing;

/// Types for the BN254 curve, its field tower and its pairing.
#[cfg(feature = "bn254")]
pub mod bn254;
