use zkv_ecc::weierstrass::WeierstrassPoint;
use zkv_pairing::bn254::{Bn254, Fp12, G1Affine, G2Affine};

use crate::Groth16Error;

/// A Groth16 proof `(A, B, C)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

impl Proof {
    pub fn new(a: G1Affine, b: G2Affine, c: G1Affine) -> Self {
        Self { a, b, c }
    }

    pub(crate) fn validate(&self) -> Result<(), Groth16Error> {
        check_g1(&self.a, "proof.a")?;
        check_g2(&self.b, "proof.b")?;
        check_g1(&self.c, "proof.c")
    }
}

/// Groth16 verifying key.
///
/// `gamma_abc` holds one point per public input plus the constant term at index 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyingKey {
    Full {
        alpha: G1Affine,
        beta: G2Affine,
        gamma: G2Affine,
        delta: G2Affine,
        gamma_abc: Vec<G1Affine>,
    },
    /// `alpha` and `beta` replaced by the reduced pairing `e(alpha, beta)`.
    Precomputed {
        alpha_beta: Fp12,
        gamma: G2Affine,
        delta: G2Affine,
        gamma_abc: Vec<G1Affine>,
    },
}

impl VerifyingKey {
    pub fn gamma(&self) -> &G2Affine {
        match self {
            Self::Full { gamma, .. } | Self::Precomputed { gamma, .. } => gamma,
        }
    }

    pub fn delta(&self) -> &G2Affine {
        match self {
            Self::Full { delta, .. } | Self::Precomputed { delta, .. } => delta,
        }
    }

    pub fn gamma_abc(&self) -> &[G1Affine] {
        match self {
            Self::Full { gamma_abc, .. } | Self::Precomputed { gamma_abc, .. } => gamma_abc,
        }
    }

    /// Number of public inputs the key expects. A key with an empty `gamma_abc` is malformed and
    /// reports zero; [`crate::verify`] rejects it through the arity check.
    pub fn num_public_inputs(&self) -> usize {
        self.gamma_abc().len().saturating_sub(1)
    }

    pub fn is_precomputed(&self) -> bool {
        matches!(self, Self::Precomputed { .. })
    }

    /// `e(alpha, beta)`, computed for a full key and read back for a precomputed one.
    pub fn alpha_beta(&self) -> Fp12 {
        match self {
            Self::Full { alpha, beta, .. } => Bn254::pairing(alpha, beta),
            Self::Precomputed { alpha_beta, .. } => *alpha_beta,
        }
    }

    /// Replaces `alpha` and `beta` by `e(alpha, beta)`. A precomputed key is returned unchanged.
    pub fn prepare(&self) -> Self {
        match self {
            Self::Full {
                gamma,
                delta,
                gamma_abc,
                ..
            } => Self::Precomputed {
                alpha_beta: self.alpha_beta(),
                gamma: gamma.clone(),
                delta: delta.clone(),
                gamma_abc: gamma_abc.clone(),
            },
            Self::Precomputed { .. } => self.clone(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Groth16Error> {
        if let Self::Full { alpha, beta, .. } = self {
            check_g1(alpha, "vk.alpha")?;
            check_g2(beta, "vk.beta")?;
        }
        check_g2(self.gamma(), "vk.gamma")?;
        check_g2(self.delta(), "vk.delta")?;
        for (i, p) in self.gamma_abc().iter().enumerate() {
            if !p.is_on_curve() {
                return Err(invalid_point(format!("vk.gamma_abc[{i}]")));
            }
        }
        Ok(())
    }
}

fn invalid_point(name: impl Into<String>) -> Groth16Error {
    let name = name.into();
    tracing::debug!(%name, "rejecting invalid point");
    Groth16Error::InvalidPoint { name }
}

// G1 has cofactor one.
fn check_g1(p: &G1Affine, name: &str) -> Result<(), Groth16Error> {
    if p.is_on_curve() {
        Ok(())
    } else {
        Err(invalid_point(name))
    }
}

fn check_g2(p: &G2Affine, name: &str) -> Result<(), Groth16Error> {
    if p.is_on_curve() && p.is_in_subgroup() {
        Ok(())
    } else {
        Err(invalid_point(name))
    }
}

#[cfg(test)]
mod tests {
    use zkv_algebra::{Field, IntMod};
    use zkv_ecc::{CyclicGroup, Group};
    use zkv_pairing::bn254::{Fp, Fp2, Scalar};

    use super::*;

    fn full_key() -> VerifyingKey {
        let g1 = G1Affine::GENERATOR;
        let g2 = G2Affine::GENERATOR;
        VerifyingKey::Full {
            alpha: g1.mul_scalar(&Scalar::from_u8(3)),
            beta: g2.mul_scalar(&Scalar::from_u8(5)),
            gamma: g2.clone(),
            delta: g2.double(),
            gamma_abc: vec![g1.clone(), g1.double()],
        }
    }

    #[test]
    fn test_prepare() {
        let vk = full_key();
        let prepared = vk.prepare();
        assert!(prepared.is_precomputed());
        assert_eq!(prepared.gamma(), vk.gamma());
        assert_eq!(prepared.delta(), vk.delta());
        assert_eq!(prepared.gamma_abc(), vk.gamma_abc());
        assert_eq!(prepared.num_public_inputs(), 1);
        // e(3 G1, 5 G2) = e(G1, G2)^15
        let expected = Bn254::pairing(
            &G1Affine::GENERATOR.mul_scalar(&Scalar::from_u8(15)),
            &G2Affine::GENERATOR,
        );
        assert_eq!(prepared.alpha_beta(), expected);
        assert_eq!(prepared.prepare(), prepared);
    }

    #[test]
    fn test_validate_rejects_off_curve() {
        let vk = full_key();
        assert_eq!(vk.validate(), Ok(()));

        let VerifyingKey::Full {
            alpha,
            beta,
            gamma,
            delta,
            mut gamma_abc,
        } = vk
        else {
            unreachable!()
        };
        gamma_abc[1] = G1Affine::from_xy_unchecked(Fp::from_u8(1), Fp::from_u8(3));
        let vk = VerifyingKey::Full {
            alpha,
            beta,
            gamma,
            delta,
            gamma_abc,
        };
        assert_eq!(
            vk.validate(),
            Err(Groth16Error::InvalidPoint {
                name: "vk.gamma_abc[1]".to_string()
            })
        );
    }

    #[test]
    fn test_validate_identity_points() {
        let proof = Proof::new(
            <G1Affine as Group>::IDENTITY,
            <G2Affine as Group>::IDENTITY,
            <G1Affine as Group>::IDENTITY,
        );
        assert_eq!(proof.validate(), Ok(()));

        let proof = Proof::new(
            G1Affine::GENERATOR,
            G2Affine::from_xy_unchecked(Fp2::ONE, Fp2::ONE),
            G1Affine::GENERATOR,
        );
        assert_eq!(
            proof.validate(),
            Err(Groth16Error::InvalidPoint {
                name: "proof.b".to_string()
            })
        );
    }
}
