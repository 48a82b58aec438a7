use num_bigint::BigUint;
use tracing::instrument;
use zkv_algebra::IntMod;
use zkv_ecc::{msm, weierstrass::WeierstrassPoint, AffinePoint};
use zkv_pairing::{
    bn254::{Bn254, Fp, Fp12, Fp2, G1Affine, Scalar, BN254_ORDER},
    pairing::{FinalExp, PairingCheck},
};

use crate::{Groth16Error, Proof, VerifyingKey};

/// Checks a Groth16 proof against `vk`:
///
/// `e(A, B) * e(-vk_x, gamma) * e(-C, delta) * e(-alpha, beta) == 1`
///
/// where `vk_x = gamma_abc[0] + sum_i public_inputs[i] * gamma_abc[i + 1]`. A precomputed key is
/// checked as in [`verify_optimized`] with its stored `e(alpha, beta)`.
///
/// Returns `Ok(false)` for a well-formed proof that does not verify.
#[instrument(level = "debug", skip_all, fields(num_inputs = public_inputs.len()))]
pub fn verify(
    public_inputs: &[BigUint],
    proof: &Proof,
    vk: &VerifyingKey,
) -> Result<bool, Groth16Error> {
    let VerifyingKey::Full {
        alpha,
        beta,
        gamma,
        delta,
        ..
    } = vk
    else {
        return verify_optimized(public_inputs, proof, vk, &vk.alpha_beta());
    };

    let vk_x = prepare_inputs(public_inputs, proof, vk)?;

    let g1_points = [
        proof.a.clone(),
        -vk_x,
        -proof.c.clone(),
        -alpha.clone(),
    ]
    .map(WeierstrassPoint::into_affine);
    let g2_points = [proof.b.clone(), gamma.clone(), delta.clone(), beta.clone()]
        .map(WeierstrassPoint::into_affine);

    Ok(Bn254::pairing_check(&g1_points, &g2_points).is_ok())
}

/// Checks a Groth16 proof given `alpha_beta = e(alpha, beta)`, with three Miller loops:
///
/// `FE(ml(A, B) * ml(-vk_x, gamma) * ml(-C, delta)) == alpha_beta`
///
/// Only `gamma`, `delta` and `gamma_abc` are read from `vk`.
#[instrument(level = "debug", skip_all, fields(num_inputs = public_inputs.len()))]
pub fn verify_optimized(
    public_inputs: &[BigUint],
    proof: &Proof,
    vk: &VerifyingKey,
    alpha_beta: &Fp12,
) -> Result<bool, Groth16Error> {
    let vk_x = prepare_inputs(public_inputs, proof, vk)?;

    let g1_points: [AffinePoint<Fp>; 3] =
        [proof.a.clone(), -vk_x, -proof.c.clone()].map(WeierstrassPoint::into_affine);
    let g2_points: [AffinePoint<Fp2>; 3] =
        [proof.b.clone(), vk.gamma().clone(), vk.delta().clone()]
            .map(WeierstrassPoint::into_affine);

    let f = Bn254::final_exp(&Bn254::miller_loop_product(&g1_points, &g2_points));
    let accepted = &f == alpha_beta;
    if !accepted {
        tracing::debug!("pairing product does not match e(alpha, beta)");
    }
    Ok(accepted)
}

/// Structural checks shared by both entry points, then the public-input combination `vk_x`.
fn prepare_inputs(
    public_inputs: &[BigUint],
    proof: &Proof,
    vk: &VerifyingKey,
) -> Result<G1Affine, Groth16Error> {
    let gamma_abc = vk.gamma_abc();
    if gamma_abc.len() != public_inputs.len() + 1 {
        tracing::debug!(
            expected = vk.num_public_inputs(),
            actual = public_inputs.len(),
            "public input count does not match the verifying key"
        );
        return Err(Groth16Error::ArityMismatch {
            expected: vk.num_public_inputs(),
            actual: public_inputs.len(),
        });
    }
    let scalars = public_inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            if input >= &*BN254_ORDER {
                tracing::debug!(index, "public input out of range");
                return Err(Groth16Error::InputOutOfRange { index });
            }
            Ok(Scalar::from_biguint(input.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    proof.validate()?;
    vk.validate()?;

    tracing::trace!(num_inputs = scalars.len(), "accumulating public inputs");
    Ok(compute_vk_x(&scalars, gamma_abc))
}

/// `gamma_abc[0] + sum_i inputs[i] * gamma_abc[i + 1]`
pub fn compute_vk_x(inputs: &[Scalar], gamma_abc: &[G1Affine]) -> G1Affine {
    match gamma_abc.split_first() {
        Some((constant, bases)) => msm(inputs, bases) + constant,
        None => <G1Affine as WeierstrassPoint>::IDENTITY,
    }
}

#[cfg(test)]
mod tests {
    use zkv_algebra::Field;
    use zkv_ecc::{CyclicGroup, Group};
    use zkv_pairing::bn254::G2Affine;

    use super::*;

    fn toy_key(num_inputs: u64) -> VerifyingKey {
        let g1 = G1Affine::GENERATOR;
        VerifyingKey::Full {
            alpha: g1.clone(),
            beta: G2Affine::GENERATOR,
            gamma: G2Affine::GENERATOR,
            delta: G2Affine::GENERATOR,
            gamma_abc: (1..=num_inputs + 1)
                .map(|i| g1.mul_scalar(&Scalar::from_u64(i)))
                .collect(),
        }
    }

    #[test]
    fn test_compute_vk_x() {
        let vk = toy_key(3);
        let inputs = [2u64, 0, 7].map(Scalar::from_u64);
        // 1 + 2 * 2 + 0 * 3 + 7 * 4
        let expected = G1Affine::GENERATOR.mul_scalar(&Scalar::from_u64(33));
        assert_eq!(compute_vk_x(&inputs, vk.gamma_abc()), expected);
        assert_eq!(
            compute_vk_x(&[], &vk.gamma_abc()[..1]),
            G1Affine::GENERATOR
        );
        assert!(compute_vk_x(&[], &[]).is_identity());
    }

    #[test]
    fn test_structural_errors_come_first() {
        // Off-curve proof points are only looked at after the arity and range checks.
        let bad = G1Affine::from_xy_unchecked(Fp::from_u8(1), Fp::from_u8(1));
        let proof = Proof::new(bad.clone(), G2Affine::GENERATOR, bad);
        let vk = toy_key(2);

        assert_eq!(
            verify(&[BigUint::from(1u8)], &proof, &vk),
            Err(Groth16Error::ArityMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            verify(&[BigUint::from(1u8), BN254_ORDER.clone()], &proof, &vk),
            Err(Groth16Error::InputOutOfRange { index: 1 })
        );
        assert_eq!(
            verify(&[BigUint::from(1u8), BigUint::from(2u8)], &proof, &vk),
            Err(Groth16Error::InvalidPoint {
                name: "proof.a".to_string()
            })
        );
    }

    #[test]
    fn test_empty_gamma_abc() {
        let vk = VerifyingKey::Precomputed {
            alpha_beta: Fp12::ONE,
            gamma: G2Affine::GENERATOR,
            delta: G2Affine::GENERATOR,
            gamma_abc: vec![],
        };
        let g1 = G1Affine::GENERATOR;
        let proof = Proof::new(g1.clone(), G2Affine::GENERATOR, g1);
        assert_eq!(
            verify(&[], &proof, &vk),
            Err(Groth16Error::ArityMismatch {
                expected: 0,
                actual: 0
            })
        );
    }
}
