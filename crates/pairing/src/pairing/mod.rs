mod final_exp;
mod line;
mod miller_loop;
mod miller_step;

pub use final_exp::*;
pub use line::*;
pub use miller_loop::*;
pub use miller_step::*;
use thiserror::Error;
use zkv_algebra::{
    field::{ComplexConjugate, FieldExtension},
    ExpBytes, Field, IntMod,
};
use zkv_ecc::AffinePoint;

/// Constants of a pairing-friendly curve whose `Fp12` is the sextic extension of `Fp2`.
pub trait PairingIntrinsics {
    type Fp: Field + IntMod;
    type Fp2: Field + FieldExtension<Self::Fp> + ComplexConjugate;
    type Fp12: Field + FieldExtension<Self::Fp2> + ComplexConjugate;

    /// The sextic extension `Fp12` is `Fp2[X] / (X^6 - \xi)`, where `\xi` is a non-residue.
    const XI: Self::Fp2;
    /// Multiplication constants for the Frobenius map for coefficients in Fp2 c1..=c5 for powers
    /// 0..12: `FROBENIUS_COEFFS[i][j] = \xi^{(j + 1) * (p^i - 1)/6}` when `p = 1 (mod 6)`.
    const FROBENIUS_COEFFS: [[Self::Fp2; 5]; 12];

    const FP2_TWO: Self::Fp2;
    const FP2_THREE: Self::Fp2;
}

#[allow(non_snake_case)]
pub trait PairingCheck {
    type Fp: Field;
    type Fp2: Field + FieldExtension<Self::Fp> + ComplexConjugate;
    type Fp12: Field + FieldExtension<Self::Fp2> + ComplexConjugate;

    /// Checks that `prod_i e(P[i], Q[i]) == 1`. Pairs where either point is the identity
    /// contribute nothing.
    fn pairing_check(
        P: &[AffinePoint<Self::Fp>],
        Q: &[AffinePoint<Self::Fp2>],
    ) -> Result<(), PairingCheckError>;
}

/// Square-and-multiply check that `f^exp == 1`. Slow; `exp` is big-endian.
pub fn exp_check_fallback<F: Field + ExpBytes>(f: &F, exp: &[u8]) -> Result<(), PairingCheckError> {
    if f.exp_bytes(true, exp) == F::ONE {
        Ok(())
    } else {
        Err(PairingCheckError)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Pairing check failed")]
pub struct PairingCheckError;

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use zkv_algebra::moduli_declare;

    use super::*;

    moduli_declare! {
        F13 { modulus = "13" },
    }

    #[test]
    fn test_pairing_check_fallback() {
        let a = F13::from_u8(2);
        let b = BigUint::from(12u32);
        let result = exp_check_fallback(&a, &b.to_bytes_be());
        assert_eq!(result, Ok(()));

        let b = BigUint::from(11u32);
        let result = exp_check_fallback(&a, &b.to_bytes_be());
        assert_eq!(result, Err(PairingCheckError));
        assert_eq!(result.unwrap_err().to_string(), "Pairing check failed");
    }
}
