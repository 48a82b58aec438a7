//! Modular arithmetic and field-extension traits shared by the curve, pairing and Groth16 crates.
use core::fmt::Debug;

use num_bigint::BigUint;

pub mod arithmetic;
mod error;
mod exp_bytes;
pub mod field;
mod literal;
mod moduli;
mod ops;

pub use error::AlgebraError;
pub use exp_bytes::ExpBytes;
pub use field::{ComplexConjugate, Field, FieldExtension};
pub use literal::{parse_signed_literal, parse_unsigned_literal};
// Re-exported for use inside `moduli_declare!` expansions.
pub use num_bigint;

/// Division operation that returns a meaningless value when the denominator is not invertible.
pub trait DivUnsafe<Rhs = Self>: Sized {
    /// Output type of `div_unsafe`.
    type Output;

    /// The result is unspecified when the denominator is not invertible.
    fn div_unsafe(self, other: Rhs) -> Self::Output;
}

/// Division assignment operation that leaves a meaningless value when the denominator is not
/// invertible.
pub trait DivAssignUnsafe<Rhs = Self>: Sized {
    /// The result is unspecified when the denominator is not invertible.
    fn div_assign_unsafe(&mut self, other: Rhs);
}

/// Integers modulo a fixed odd prime `MODULUS`, each operation reduced modulo `MODULUS`.
///
/// Elements are always stored reduced. Conversions from external data reject values that are
/// not below the modulus with [`AlgebraError::NonCanonical`].
pub trait IntMod: Field + Copy {
    /// Underlying byte representation of an element.
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Debug + Clone + Default;

    /// Modulus as a little-endian `Repr`.
    const MODULUS: Self::Repr;

    /// Number of bytes in the modulus.
    const NUM_BYTES: usize;

    /// Creates a new IntMod from little-endian bytes, rejecting values that are not reduced.
    /// Inputs shorter than `NUM_BYTES` are zero-extended.
    fn from_le_bytes(bytes: &[u8]) -> Result<Self, AlgebraError>;

    /// Creates a new IntMod from big-endian bytes, rejecting values that are not reduced.
    fn from_be_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let le: Vec<u8> = bytes.iter().rev().copied().collect();
        Self::from_le_bytes(&le)
    }

    /// Creates a new IntMod from an integer, reducing it modulo `MODULUS`.
    fn from_biguint(value: BigUint) -> Self;

    /// Creates a new IntMod from an integer, rejecting values that are not reduced.
    fn from_canonical_biguint(value: &BigUint) -> Result<Self, AlgebraError> {
        if value >= &Self::modulus_biguint() {
            return Err(AlgebraError::NonCanonical);
        }
        Ok(Self::from_biguint(value.clone()))
    }

    /// Parses a literal with the grammar of [`parse_signed_literal`]. Negative literals are
    /// reduced modulo `MODULUS`; non-negative ones must already be reduced.
    fn from_literal(literal: &str) -> Result<Self, AlgebraError> {
        let value = parse_signed_literal(literal)?;
        match value.to_biguint() {
            Some(value) => Self::from_canonical_biguint(&value),
            None => {
                let magnitude = value.magnitude() % Self::modulus_biguint();
                Ok(-Self::from_biguint(magnitude))
            }
        }
    }

    /// Creates a new IntMod from a u8.
    fn from_u8(val: u8) -> Self {
        Self::from_u64(val as u64)
    }

    /// Creates a new IntMod from a u64.
    fn from_u64(val: u64) -> Self;

    /// Canonical little-endian byte representation.
    fn to_le_bytes(&self) -> Self::Repr;

    /// Canonical big-endian byte representation.
    fn to_be_bytes(&self) -> Self::Repr {
        let mut repr = self.to_le_bytes();
        repr.as_mut().reverse();
        repr
    }

    /// Modulus as a BigUint.
    fn modulus_biguint() -> BigUint {
        BigUint::from_bytes_le(Self::MODULUS.as_ref())
    }

    /// Canonical value as a BigUint.
    fn as_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(self.to_le_bytes().as_ref())
    }
}
